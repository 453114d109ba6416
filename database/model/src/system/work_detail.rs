//! 作業内容明細
use crate::system::prelude::*;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 作業項目ID（マスターテーブル参照）
    pub work_item_id: Option<i32>,
    /// 作業項目テキスト（手入力用）
    pub work_item_text: Option<String>,
    pub description: String,
    /// 作業確認
    pub confirmation: Option<String>,
    /// 作業金額
    pub work_amount: i32,
    pub report_id: i32,
    pub property_id: Option<i32>,
    pub air_conditioner_id: Option<i32>,
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
        belongs_to = "WorkItemEntity",
        from = "Column::WorkItemId",
        to = "WorkItemColumn::Id"
    )]
    WorkItem,
    #[sea_orm(
        belongs_to = "AirConditionerEntity",
        from = "Column::AirConditionerId",
        to = "AirConditionerColumn::Id"
    )]
    AirConditioner,
}

impl Related<ReportEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<WorkItemEntity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkItem.def()
    }
}

impl Related<AirConditionerEntity> for Entity {
    fn to() -> RelationDef {
        Relation::AirConditioner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            work_item_id: Set(self.work_item_id),
            work_item_text: Set(self.work_item_text),
            description: Set(self.description),
            confirmation: Set(self.confirmation),
            work_amount: Set(self.work_amount),
            report_id: Set(self.report_id),
            property_id: Set(self.property_id),
            air_conditioner_id: Set(self.air_conditioner_id),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
