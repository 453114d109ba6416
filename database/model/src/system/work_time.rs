//! 作業時間
use crate::system::prelude::*;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_times")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub work_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub note: Option<String>,
    pub report_id: i32,
    pub property_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "ReportEntity",
        from = "Column::ReportId",
        to = "ReportColumn::Id"
    )]
    Report,
    #[sea_orm(
        belongs_to = "PropertyEntity",
        from = "Column::PropertyId",
        to = "PropertyColumn::Id"
    )]
    Property,
}

impl Related<ReportEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<PropertyEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            work_date: Set(self.work_date),
            start_time: Set(self.start_time),
            end_time: Set(self.end_time),
            note: Set(self.note),
            report_id: Set(self.report_id),
            property_id: Set(self.property_id),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
