mod form;
mod notification;
mod sync;

#[rustfmt::skip]
pub use {
    form::{ScheduleForm, ScheduleListFilter},
    notification::{MailContent, NotificationKind},
    sync::SyncWarning,
};
