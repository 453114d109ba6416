use async_trait::async_trait;

use crate::model::{entity::Schedule, vo::NotificationKind};

/// スケジュール通知の定期チェック
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 通知対象スケジュールを走査し、時刻の来たものへメールを送る。
    /// 送信件数を返す。個別の失敗はログに残して走査を続行する。
    async fn check_and_send(&self) -> anyhow::Result<usize>;

    /// 1 件のスケジュールについて通知メールを送る
    async fn send_schedule_notification(
        &self,
        schedule: &Schedule,
        kind: NotificationKind,
    ) -> anyhow::Result<bool>;
}
