use anyhow::anyhow;
use async_trait::async_trait;
use database_model::system::prelude::*;
use database_model::system::{property, report};
use domain_report::{
    model::{entity::Report, vo::ReportListFilter},
    repository::ReportRepo,
};
use sea_orm::prelude::*;
use sea_orm::{
    ActiveValue::NotSet, Condition, JoinType, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::infrastructure::database::OrmRepo;

const DEFAULT_PER_PAGE: u64 = 20;

#[async_trait]
impl ReportRepo for OrmRepo {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Report> {
        ReportEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow!("There is no such report with id: {id}"))?
            .try_into()
    }

    async fn list(&self, filter: &ReportListFilter) -> anyhow::Result<Vec<Report>> {
        let mut query = ReportEntity::find().order_by_desc(ReportColumn::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(ReportColumn::Status.eq(status.as_str()));
        }
        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            // 顧客名・物件名でも検索できるよう関連テーブルを結合する
            query = query
                .join(JoinType::InnerJoin, report::Relation::Property.def())
                .join(JoinType::InnerJoin, property::Relation::Customer.def())
                .filter(
                    Condition::any()
                        .add(CustomerColumn::Name.contains(search))
                        .add(PropertyColumn::Name.contains(search))
                        .add(ReportColumn::WorkAddress.contains(search))
                        .add(ReportColumn::Note.contains(search))
                        .add(ReportColumn::Status.contains(search)),
                );
        }

        let page = filter.page.unwrap_or(1).max(1);
        let per_page = filter.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
        let models = query
            .offset((page - 1) * per_page)
            .limit(per_page)
            .all(self.db.get_connection())
            .await?;

        models.into_iter().map(TryInto::try_into).collect()
    }

    async fn insert(&self, entity: &Report) -> anyhow::Result<i32> {
        let mut active = report::Model::from(entity.clone()).into_set();
        active.id = NotSet;
        let result = ReportEntity::insert(active).exec(self.db.get_connection()).await?;
        Ok(result.last_insert_id)
    }

    async fn update(&self, entity: &Report) -> anyhow::Result<()> {
        ReportEntity::update(report::Model::from(entity.clone()).into_set())
            .exec(self.db.get_connection())
            .await?;
        Ok(())
    }

    async fn delete_with_owned_rows(&self, id: i32) -> anyhow::Result<()> {
        let trans = self.db.get_connection().begin().await?;
        PhotoEntity::delete_many()
            .filter(PhotoColumn::ReportId.eq(id))
            .exec(&trans)
            .await?;
        WorkTimeEntity::delete_many()
            .filter(WorkTimeColumn::ReportId.eq(id))
            .exec(&trans)
            .await?;
        WorkDetailEntity::delete_many()
            .filter(WorkDetailColumn::ReportId.eq(id))
            .exec(&trans)
            .await?;
        ReportEntity::delete_by_id(id).exec(&trans).await?;
        trans.commit().await?;
        Ok(())
    }
}
