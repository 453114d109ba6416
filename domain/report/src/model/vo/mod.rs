mod form;
mod pdf;
mod photo_pair;
mod photo_path;
mod sanitize;

#[rustfmt::skip]
pub use {
    form::{ReportForm, ReportListFilter, WorkDetailForm},
    pdf::{PdfOutput, ReportPdfData, WorkDetailView},
    photo_pair::{PhotoPair, PhotoView},
    photo_path::{PhotoPathSpec, StoredPhoto},
    sanitize::sanitize_filename,
};
