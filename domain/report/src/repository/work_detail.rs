use async_trait::async_trait;

use crate::model::entity::WorkDetail;

#[async_trait]
pub trait WorkDetailRepo: Send + Sync {
    async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<WorkDetail>>;

    async fn insert(&self, entity: &WorkDetail) -> anyhow::Result<i32>;

    async fn delete_by_report_id(&self, report_id: i32) -> anyhow::Result<u64>;
}
