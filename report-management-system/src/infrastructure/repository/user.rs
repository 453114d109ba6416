use anyhow::anyhow;
use async_trait::async_trait;
use database_model::system::prelude::*;
use database_model::system::user;
use domain_crm::{model::entity::User, repository::UserRepo};
use sea_orm::prelude::*;
use sea_orm::ActiveValue::NotSet;

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl UserRepo for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<User> {
        Ok(UserEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow!("There is no such user with id: {id}"))?
            .into())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<User>> {
        let models = UserEntity::find().all(self.db.get_connection()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: &User) -> anyhow::Result<i32> {
        let mut active = user::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = UserEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }
}
