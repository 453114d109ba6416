use async_trait::async_trait;

use crate::model::{entity::Schedule, vo::ScheduleListFilter};

#[async_trait]
pub trait ScheduleRepo: Send + Sync {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Schedule>;

    /// 指定報告書に紐づくスケジュール
    async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<Schedule>>;

    /// 通知対象（notification_enabled かつ未完了）のスケジュール
    async fn get_pending_notifiable(&self) -> anyhow::Result<Vec<Schedule>>;

    async fn list(&self, filter: &ScheduleListFilter) -> anyhow::Result<Vec<Schedule>>;

    async fn insert(&self, entity: &Schedule) -> anyhow::Result<i32>;

    async fn update(&self, entity: &Schedule) -> anyhow::Result<()>;

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;

    /// 指定報告書に紐づくスケジュールの一括削除。削除件数を返す
    async fn delete_by_report_id(&self, report_id: i32) -> anyhow::Result<u64>;
}
