use anyhow::anyhow;
use async_trait::async_trait;
use database_model::system::prelude::*;
use database_model::system::property;
use domain_crm::{model::entity::Property, repository::PropertyRepo};
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl PropertyRepo for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Property> {
        Ok(PropertyEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow!("There is no such property with id: {id}"))?
            .into())
    }

    async fn get_by_customer_id(&self, customer_id: i32) -> anyhow::Result<Vec<Property>> {
        let models = PropertyEntity::find()
            .filter(PropertyColumn::CustomerId.eq(customer_id))
            .order_by_asc(PropertyColumn::Name)
            .all(self.db.get_connection())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Property>> {
        let models = PropertyEntity::find()
            .order_by_asc(PropertyColumn::Name)
            .all(self.db.get_connection())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: &Property) -> anyhow::Result<i32> {
        let mut active = property::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = PropertyEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }
}
