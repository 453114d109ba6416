//! スケジュール
use crate::system::prelude::*;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_datetime: DateTime,
    pub end_datetime: DateTime,
    pub all_day: bool,
    /// pending, completed, cancelled
    pub status: String,
    /// low, normal, high, urgent
    pub priority: String,
    pub customer_id: Option<i32>,
    pub property_id: Option<i32>,
    /// 報告書との関連（報告書削除時に NULL へ切り離す）
    pub report_id: Option<i32>,
    /// Googleカレンダー連携（未使用のプレースホルダ）
    pub google_calendar_id: Option<String>,
    pub google_calendar_sync: bool,
    /// 繰り返し設定（未使用のプレースホルダ）
    pub recurrence_type: Option<String>,
    pub recurrence_end: Option<Date>,
    pub notification_enabled: bool,
    /// 何分前に通知するか
    pub notification_minutes: i32,
    pub created_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "CustomerEntity",
        from = "Column::CustomerId",
        to = "CustomerColumn::Id"
    )]
    Customer,
    #[sea_orm(
        belongs_to = "PropertyEntity",
        from = "Column::PropertyId",
        to = "PropertyColumn::Id"
    )]
    Property,
    #[sea_orm(
        belongs_to = "ReportEntity",
        from = "Column::ReportId",
        to = "ReportColumn::Id"
    )]
    Report,
    #[sea_orm(
        belongs_to = "UserEntity",
        from = "Column::CreatedBy",
        to = "UserColumn::Id"
    )]
    Creator,
}

impl Related<CustomerEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<PropertyEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<ReportEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<UserEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            title: Set(self.title),
            description: Set(self.description),
            start_datetime: Set(self.start_datetime),
            end_datetime: Set(self.end_datetime),
            all_day: Set(self.all_day),
            status: Set(self.status),
            priority: Set(self.priority),
            customer_id: Set(self.customer_id),
            property_id: Set(self.property_id),
            report_id: Set(self.report_id),
            google_calendar_id: Set(self.google_calendar_id),
            google_calendar_sync: Set(self.google_calendar_sync),
            recurrence_type: Set(self.recurrence_type),
            recurrence_end: Set(self.recurrence_end),
            notification_enabled: Set(self.notification_enabled),
            notification_minutes: Set(self.notification_minutes),
            created_by: Set(self.created_by),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
