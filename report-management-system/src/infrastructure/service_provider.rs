use std::sync::Arc;

use domain_crm::repository::{
    AirConditionerRepo, CustomerRepo, PropertyRepo, UserRepo, WorkItemRepo,
};
use domain_report::{
    repository::{PhotoRepo, ReportRepo, WorkDetailRepo, WorkTimeRepo},
    service::{PhotoStorageService, ReportPdfService},
};
use domain_schedule::{
    repository::ScheduleRepo,
    service::{MailService, NotificationService, ScheduleSyncService},
};
use service_report::{
    PhotoStorageServiceImpl, ReportPdfServiceImpl, ReportServiceImpl,
};
use service_schedule::{NotificationServiceImpl, ScheduleSyncServiceImpl, SmtpMailServiceImpl};

use super::config::AppConfig;
use super::database::{Database, OrmRepo};
use super::service::{BackgroundService, NotificationRunner};

/// 起動時に一度だけ組み立てるサービス一式
///
/// import 時に生えるグローバルの代わりに、設定から明示的に構築して
/// ルート層・ジョブ層へ注入する。
pub struct ServiceProvider {
    pub config: AppConfig,
    pub database: Arc<Database>,
    pub report_service: Arc<ReportServiceImpl>,
    pub pdf_service: Arc<dyn ReportPdfService>,
    pub photo_storage_service: Arc<dyn PhotoStorageService>,
    pub schedule_sync_service: Arc<dyn ScheduleSyncService>,
    pub notification_service: Arc<dyn NotificationService>,
    pub mail_service: Arc<dyn MailService>,
    pub report_repository: Arc<dyn ReportRepo>,
    pub photo_repository: Arc<dyn PhotoRepo>,
    pub work_time_repository: Arc<dyn WorkTimeRepo>,
    pub work_detail_repository: Arc<dyn WorkDetailRepo>,
    pub schedule_repository: Arc<dyn ScheduleRepo>,
    pub customer_repository: Arc<dyn CustomerRepo>,
    pub property_repository: Arc<dyn PropertyRepo>,
    pub air_conditioner_repository: Arc<dyn AirConditionerRepo>,
    pub work_item_repository: Arc<dyn WorkItemRepo>,
    pub user_repository: Arc<dyn UserRepo>,
}

impl ServiceProvider {
    pub async fn build(config: AppConfig) -> anyhow::Result<Self> {
        let database = Arc::new(Database::connect(&config.database.url).await?);
        database.ensure_schema().await?;

        let repo = Arc::new(OrmRepo::builder().db(database.clone()).build());

        let mail_service = Arc::new(
            SmtpMailServiceImpl::builder()
                .smtp_server(config.mail.server.clone())
                .smtp_port(config.mail.port)
                .use_tls(config.mail.use_tls)
                .username(config.mail.username.clone())
                .password(config.mail.password.clone())
                .default_sender(config.mail.default_sender.clone())
                .enabled(config.mail.enabled)
                .build(),
        );

        let schedule_sync_service = Arc::new(
            ScheduleSyncServiceImpl::builder()
                .schedule_repository(repo.clone())
                .property_repository(repo.clone())
                .customer_repository(repo.clone())
                .build(),
        );

        let notification_service = Arc::new(
            NotificationServiceImpl::builder()
                .schedule_repository(repo.clone())
                .customer_repository(repo.clone())
                .property_repository(repo.clone())
                .user_repository(repo.clone())
                .mail_service(mail_service.clone())
                .build(),
        );

        let photo_storage_service = Arc::new(
            PhotoStorageServiceImpl::builder()
                .base(config.upload.folder.clone())
                .build(),
        );

        let pdf_service = Arc::new(
            ReportPdfServiceImpl::builder()
                .upload_base(config.upload.folder.clone())
                .build(),
        );

        let report_service = Arc::new(
            ReportServiceImpl::builder()
                .report_repository(repo.clone())
                .work_time_repository(repo.clone())
                .work_detail_repository(repo.clone())
                .photo_repository(repo.clone())
                .customer_repository(repo.clone())
                .property_repository(repo.clone())
                .air_conditioner_repository(repo.clone())
                .work_item_repository(repo.clone())
                .schedule_sync_service(schedule_sync_service.clone())
                .photo_storage_service(photo_storage_service.clone())
                .build(),
        );

        Ok(Self {
            config,
            database,
            report_service,
            pdf_service,
            photo_storage_service,
            schedule_sync_service,
            notification_service,
            mail_service,
            report_repository: repo.clone(),
            photo_repository: repo.clone(),
            work_time_repository: repo.clone(),
            work_detail_repository: repo.clone(),
            schedule_repository: repo.clone(),
            customer_repository: repo.clone(),
            property_repository: repo.clone(),
            air_conditioner_repository: repo.clone(),
            work_item_repository: repo.clone(),
            user_repository: repo,
        })
    }

    /// サーバー起動時に spawn するバックグラウンドタスク
    pub fn background_services(&self) -> Vec<Arc<dyn BackgroundService>> {
        vec![Arc::new(
            NotificationRunner::builder()
                .notification_service(self.notification_service.clone())
                .check_interval_secs(self.config.notification.check_interval)
                .enabled(self.config.notification.enabled)
                .build(),
        )]
    }
}
