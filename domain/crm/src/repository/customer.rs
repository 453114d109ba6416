use async_trait::async_trait;

use crate::model::entity::Customer;

#[async_trait]
pub trait CustomerRepo: Send + Sync {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Customer>;

    async fn get_all(&self) -> anyhow::Result<Vec<Customer>>;

    async fn insert(&self, entity: &Customer) -> anyhow::Result<i32>;
}
