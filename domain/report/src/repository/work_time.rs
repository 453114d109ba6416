use async_trait::async_trait;

use crate::model::entity::WorkTime;

#[async_trait]
pub trait WorkTimeRepo: Send + Sync {
    /// 作業日・開始時刻の昇順で返す
    async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<WorkTime>>;

    async fn insert(&self, entity: &WorkTime) -> anyhow::Result<i32>;

    async fn delete_by_report_id(&self, report_id: i32) -> anyhow::Result<u64>;
}
