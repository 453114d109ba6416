use async_trait::async_trait;

use crate::model::entity::AirConditioner;

#[async_trait]
pub trait AirConditionerRepo: Send + Sync {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<AirConditioner>;

    /// 物件に設置されているエアコン一覧
    async fn get_by_property_id(&self, property_id: i32) -> anyhow::Result<Vec<AirConditioner>>;

    async fn get_all(&self) -> anyhow::Result<Vec<AirConditioner>>;

    async fn insert(&self, entity: &AirConditioner) -> anyhow::Result<i32>;
}
