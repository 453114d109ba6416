use thiserror::Error;

pub type ScheduleResult<T> = Result<T, ScheduleException>;

#[derive(Error, Debug)]
pub enum ScheduleException {
    #[error("There is no such schedule with id: {id}.")]
    NotFound { id: i32 },

    #[error("Invalid schedule form: {reason}.")]
    InvalidForm { reason: String },

    #[error("Mail is not configured.")]
    MailNotConfigured,

    #[error("Schedule internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for ScheduleException {
    fn from(e: anyhow::Error) -> Self {
        ScheduleException::InternalError { source: e }
    }
}
