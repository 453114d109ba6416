mod document;
mod orientation;
mod pdf;
mod photo_storage;
mod report;

pub use document::{wrap_text, DocumentBuilder, PhotoCell};
pub use orientation::{correct_orientation, prepare_photo, read_orientation};
pub use pdf::ReportPdfServiceImpl;
pub use photo_storage::PhotoStorageServiceImpl;
pub use report::ReportServiceImpl;
