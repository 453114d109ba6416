use async_trait::async_trait;

use crate::model::entity::{photo::PhotoType, Photo};

#[async_trait]
pub trait PhotoRepo: Send + Sync {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Photo>;

    async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<Photo>>;

    async fn get_by_report_id_and_type(
        &self,
        report_id: i32,
        photo_type: PhotoType,
    ) -> anyhow::Result<Vec<Photo>>;

    async fn insert(&self, entity: &Photo) -> anyhow::Result<i32>;

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
}
