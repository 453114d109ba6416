use async_trait::async_trait;

use crate::model::entity::WorkItem;

#[async_trait]
pub trait WorkItemRepo: Send + Sync {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<WorkItem>;

    /// 有効な作業項目のみ（名前順）
    async fn get_all_active(&self) -> anyhow::Result<Vec<WorkItem>>;

    async fn get_all(&self) -> anyhow::Result<Vec<WorkItem>>;

    async fn insert(&self, entity: &WorkItem) -> anyhow::Result<i32>;
}
