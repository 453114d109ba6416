mod pdf;
mod photo_storage;

#[rustfmt::skip]
pub use {
    pdf::ReportPdfService,
    photo_storage::PhotoStorageService,
};
