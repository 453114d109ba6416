use async_trait::async_trait;
use domain_report::model::entity::Report;
use mockall::mock;

use crate::{
    model::{
        entity::Schedule,
        vo::{MailContent, NotificationKind, ScheduleListFilter, SyncWarning},
    },
    repository::ScheduleRepo,
    service::{MailService, NotificationService, ScheduleSyncService},
};

mock! {
    pub ScheduleRepo {}
    #[async_trait]
    impl ScheduleRepo for ScheduleRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Schedule>;
        async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<Schedule>>;
        async fn get_pending_notifiable(&self) -> anyhow::Result<Vec<Schedule>>;
        async fn list(&self, filter: &ScheduleListFilter) -> anyhow::Result<Vec<Schedule>>;
        async fn insert(&self, entity: &Schedule) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Schedule) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
        async fn delete_by_report_id(&self, report_id: i32) -> anyhow::Result<u64>;
    }
}

mock! {
    pub ScheduleSyncService {}
    #[async_trait]
    impl ScheduleSyncService for ScheduleSyncService {
        async fn create_from_work_times(
            &self,
            report: &Report,
            work_dates: &[String],
            start_times: &[String],
            end_times: &[String],
            property_id: i32,
        ) -> Vec<SyncWarning>;
        async fn rebuild_from_work_times(
            &self,
            report: &Report,
            work_dates: &[String],
            start_times: &[String],
            end_times: &[String],
            property_id: i32,
        ) -> Vec<SyncWarning>;
        async fn sync_status_with_report(&self, report: &Report) -> Vec<SyncWarning>;
        async fn cancel_and_detach(&self, report_id: i32) -> Vec<SyncWarning>;
    }
}

mock! {
    pub NotificationService {}
    #[async_trait]
    impl NotificationService for NotificationService {
        async fn check_and_send(&self) -> anyhow::Result<usize>;
        async fn send_schedule_notification(
            &self,
            schedule: &Schedule,
            kind: NotificationKind,
        ) -> anyhow::Result<bool>;
    }
}

mock! {
    pub MailService {}
    #[async_trait]
    impl MailService for MailService {
        fn is_configured(&self) -> bool;
        async fn send(&self, to_addresses: &[String], content: &MailContent) -> anyhow::Result<()>;
    }
}
