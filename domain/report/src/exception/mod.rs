use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportException>;

#[derive(Error, Debug)]
pub enum ReportException {
    #[error("There is no such report with id: {id}.")]
    NotFound { id: i32 },

    #[error("There is no such photo with id: {id}.")]
    PhotoNotFound { id: i32 },

    #[error("Invalid report form: {reason}.")]
    InvalidForm { reason: String },

    #[error("Failed to render report pdf: {reason}.")]
    PdfRender { reason: String },

    #[error("Photo storage error: {source}")]
    PhotoStorage {
        #[source]
        source: anyhow::Error,
    },

    #[error("Report internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for ReportException {
    fn from(e: anyhow::Error) -> Self {
        ReportException::InternalError { source: e }
    }
}
