mod notification_runner;

pub use notification_runner::NotificationRunner;

use async_trait::async_trait;

/// サーバー本体と並走するバックグラウンドタスク
#[async_trait]
pub trait BackgroundService: Send + Sync {
    async fn run(&self);
}
