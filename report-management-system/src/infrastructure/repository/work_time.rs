use async_trait::async_trait;
use database_model::system::prelude::*;
use database_model::system::work_time;
use domain_report::{model::entity::WorkTime, repository::WorkTimeRepo};
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl WorkTimeRepo for OrmRepo {
    async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<WorkTime>> {
        let models = WorkTimeEntity::find()
            .filter(WorkTimeColumn::ReportId.eq(report_id))
            .order_by_asc(WorkTimeColumn::WorkDate)
            .order_by_asc(WorkTimeColumn::StartTime)
            .all(self.db.get_connection())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: &WorkTime) -> anyhow::Result<i32> {
        let mut active = work_time::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = WorkTimeEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }

    async fn delete_by_report_id(&self, report_id: i32) -> anyhow::Result<u64> {
        let result = WorkTimeEntity::delete_many()
            .filter(WorkTimeColumn::ReportId.eq(report_id))
            .exec(self.db.get_connection())
            .await?;
        Ok(result.rows_affected)
    }
}
