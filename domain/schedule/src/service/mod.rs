mod mail;
mod notify;
mod sync;

#[rustfmt::skip]
pub use {
    mail::MailService,
    notify::NotificationService,
    sync::ScheduleSyncService,
};
