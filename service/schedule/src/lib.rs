mod mail;
mod notify;
mod sync;

pub use mail::SmtpMailServiceImpl;
pub use notify::NotificationServiceImpl;
pub use sync::ScheduleSyncServiceImpl;
