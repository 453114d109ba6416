use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain_schedule::service::NotificationService;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};
use typed_builder::TypedBuilder;

use super::BackgroundService;

/// 一定間隔でスケジュール通知チェックを回す常駐タスク
///
/// tick ごとに自前でサービスを呼ぶだけで、リクエスト処理とは
/// 状態を共有しない。
#[derive(TypedBuilder)]
pub struct NotificationRunner {
    notification_service: Arc<dyn NotificationService>,
    #[builder(default = 60)]
    check_interval_secs: u64,
    #[builder(default = true)]
    enabled: bool,
}

#[async_trait]
impl BackgroundService for NotificationRunner {
    async fn run(&self) {
        if !self.enabled {
            info!("notification check is disabled");
            return;
        }

        info!(
            "notification check started (interval: {}s)",
            self.check_interval_secs
        );
        let mut interval = tokio::time::interval(Duration::from_secs(self.check_interval_secs.max(1)));
        // 遅延した tick はまとめず読み飛ばす
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            match self.notification_service.check_and_send().await {
                Ok(0) => debug!("notification check finished: nothing to send"),
                Ok(sent) => info!("notification check finished: {sent} mail(s) sent"),
                Err(e) => error!("notification check failed: {e}"),
            }
        }
    }
}
