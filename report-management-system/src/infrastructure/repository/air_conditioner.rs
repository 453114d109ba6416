use anyhow::anyhow;
use async_trait::async_trait;
use database_model::system::air_conditioner;
use database_model::system::prelude::*;
use domain_crm::{model::entity::AirConditioner, repository::AirConditionerRepo};
use sea_orm::prelude::*;
use sea_orm::ActiveValue::NotSet;

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl AirConditionerRepo for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<AirConditioner> {
        Ok(AirConditionerEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow!("There is no such air conditioner with id: {id}"))?
            .into())
    }

    async fn get_by_property_id(&self, property_id: i32) -> anyhow::Result<Vec<AirConditioner>> {
        let models = AirConditionerEntity::find()
            .filter(AirConditionerColumn::PropertyId.eq(property_id))
            .all(self.db.get_connection())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<AirConditioner>> {
        let models = AirConditionerEntity::find().all(self.db.get_connection()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: &AirConditioner) -> anyhow::Result<i32> {
        let mut active = air_conditioner::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = AirConditionerEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }
}
