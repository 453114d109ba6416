use async_trait::async_trait;
use database_model::system::prelude::*;
use database_model::system::work_detail;
use domain_report::{model::entity::WorkDetail, repository::WorkDetailRepo};
use sea_orm::prelude::*;
use sea_orm::ActiveValue::NotSet;

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl WorkDetailRepo for OrmRepo {
    async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<WorkDetail>> {
        let models = WorkDetailEntity::find()
            .filter(WorkDetailColumn::ReportId.eq(report_id))
            .all(self.db.get_connection())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: &WorkDetail) -> anyhow::Result<i32> {
        let mut active = work_detail::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = WorkDetailEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }

    async fn delete_by_report_id(&self, report_id: i32) -> anyhow::Result<u64> {
        let result = WorkDetailEntity::delete_many()
            .filter(WorkDetailColumn::ReportId.eq(report_id))
            .exec(self.db.get_connection())
            .await?;
        Ok(result.rows_affected)
    }
}
