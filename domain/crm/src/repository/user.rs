use async_trait::async_trait;

use crate::model::entity::User;

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<User>;

    async fn get_all(&self) -> anyhow::Result<Vec<User>>;

    async fn insert(&self, entity: &User) -> anyhow::Result<i32>;
}
