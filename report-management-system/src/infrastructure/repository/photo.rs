use anyhow::anyhow;
use async_trait::async_trait;
use database_model::system::photo;
use database_model::system::prelude::*;
use domain_report::{
    model::entity::{photo::PhotoType, Photo},
    repository::PhotoRepo,
};
use sea_orm::prelude::*;
use sea_orm::ActiveValue::NotSet;

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl PhotoRepo for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Photo> {
        PhotoEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow!("There is no such photo with id: {id}"))?
            .try_into()
    }

    async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<Photo>> {
        let models = PhotoEntity::find()
            .filter(PhotoColumn::ReportId.eq(report_id))
            .all(self.db.get_connection())
            .await?;
        models.into_iter().map(TryInto::try_into).collect()
    }

    async fn get_by_report_id_and_type(
        &self,
        report_id: i32,
        photo_type: PhotoType,
    ) -> anyhow::Result<Vec<Photo>> {
        let models = PhotoEntity::find()
            .filter(PhotoColumn::ReportId.eq(report_id))
            .filter(PhotoColumn::PhotoType.eq(photo_type.as_str()))
            .all(self.db.get_connection())
            .await?;
        models.into_iter().map(TryInto::try_into).collect()
    }

    async fn insert(&self, entity: &Photo) -> anyhow::Result<i32> {
        let mut active = photo::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = PhotoEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()> {
        PhotoEntity::delete_by_id(id).exec(self.db.get_connection()).await?;
        Ok(())
    }
}
