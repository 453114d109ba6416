use anyhow::anyhow;
use async_trait::async_trait;
use database_model::system::customer;
use database_model::system::prelude::*;
use domain_crm::{model::entity::Customer, repository::CustomerRepo};
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl CustomerRepo for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Customer> {
        Ok(CustomerEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow!("There is no such customer with id: {id}"))?
            .into())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Customer>> {
        let models = CustomerEntity::find()
            .order_by_asc(CustomerColumn::Name)
            .all(self.db.get_connection())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: &Customer) -> anyhow::Result<i32> {
        let mut active = customer::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = CustomerEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }
}
