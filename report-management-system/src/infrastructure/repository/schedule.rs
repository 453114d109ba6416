use anyhow::anyhow;
use async_trait::async_trait;
use database_model::system::prelude::*;
use database_model::system::schedule;
use domain_schedule::{
    model::{
        entity::{schedule::ScheduleStatus, Schedule},
        vo::ScheduleListFilter,
    },
    repository::ScheduleRepo,
};
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder};

use crate::infrastructure::database::OrmRepo;

#[async_trait]
impl ScheduleRepo for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Schedule> {
        ScheduleEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow!("There is no such schedule with id: {id}"))?
            .try_into()
    }

    async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<Schedule>> {
        let models = ScheduleEntity::find()
            .filter(ScheduleColumn::ReportId.eq(report_id))
            .all(self.db.get_connection())
            .await?;
        models.into_iter().map(TryInto::try_into).collect()
    }

    async fn get_pending_notifiable(&self) -> anyhow::Result<Vec<Schedule>> {
        let models = ScheduleEntity::find()
            .filter(ScheduleColumn::NotificationEnabled.eq(true))
            .filter(ScheduleColumn::Status.eq(ScheduleStatus::Pending.as_str()))
            .all(self.db.get_connection())
            .await?;
        models.into_iter().map(TryInto::try_into).collect()
    }

    async fn list(&self, filter: &ScheduleListFilter) -> anyhow::Result<Vec<Schedule>> {
        let mut query = ScheduleEntity::find().order_by_asc(ScheduleColumn::StartDatetime);
        if let Some(from) = filter.from {
            let from = from.and_hms_opt(0, 0, 0).unwrap_or_default();
            query = query.filter(ScheduleColumn::StartDatetime.gte(from));
        }
        if let Some(to) = filter.to {
            let to = to.and_hms_opt(23, 59, 59).unwrap_or_default();
            query = query.filter(ScheduleColumn::StartDatetime.lte(to));
        }
        if let Some(status) = filter.status {
            query = query.filter(ScheduleColumn::Status.eq(status.as_str()));
        }
        let models = query.all(self.db.get_connection()).await?;
        models.into_iter().map(TryInto::try_into).collect()
    }

    async fn insert(&self, entity: &Schedule) -> anyhow::Result<i32> {
        let mut active = schedule::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = ScheduleEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }

    async fn update(&self, entity: &Schedule) -> anyhow::Result<()> {
        ScheduleEntity::update(schedule::Model::from(entity.clone()).into_set())
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<()> {
        ScheduleEntity::delete_by_id(id).exec(self.db.get_connection()).await?;
        Ok(())
    }

    async fn delete_by_report_id(&self, report_id: i32) -> anyhow::Result<u64> {
        let result = ScheduleEntity::delete_many()
            .filter(ScheduleColumn::ReportId.eq(report_id))
            .exec(self.db.get_connection())
            .await?;
        Ok(result.rows_affected)
    }
}
