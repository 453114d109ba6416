use anyhow::anyhow;
use async_trait::async_trait;
use database_model::system::prelude::*;
use database_model::system::work_item;
use domain_crm::{model::entity::WorkItem, repository::WorkItemRepo};
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl WorkItemRepo for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<WorkItem> {
        Ok(WorkItemEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow!("There is no such work item with id: {id}"))?
            .into())
    }

    async fn get_all_active(&self) -> anyhow::Result<Vec<WorkItem>> {
        let models = WorkItemEntity::find()
            .filter(WorkItemColumn::IsActive.eq(true))
            .order_by_asc(WorkItemColumn::Name)
            .all(self.db.get_connection())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<WorkItem>> {
        let models = WorkItemEntity::find()
            .order_by_asc(WorkItemColumn::Name)
            .all(self.db.get_connection())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: &WorkItem) -> anyhow::Result<i32> {
        let mut active = work_item::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = WorkItemEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }
}
