use async_trait::async_trait;

use crate::model::entity::Property;

#[async_trait]
pub trait PropertyRepo: Send + Sync {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Property>;

    /// 顧客に紐づく物件一覧
    async fn get_by_customer_id(&self, customer_id: i32) -> anyhow::Result<Vec<Property>>;

    async fn get_all(&self) -> anyhow::Result<Vec<Property>>;

    async fn insert(&self, entity: &Property) -> anyhow::Result<i32>;
}
