//! 施工前後写真
use crate::system::prelude::*;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// 'before' または 'after'
    pub photo_type: String,
    pub filename: String,
    pub original_filename: Option<String>,
    pub caption: Option<String>,
    /// 撮影場所（部屋名等）
    pub room_name: Option<String>,
    /// 施工前後の写真をグループ化するID
    pub photo_set_id: Option<String>,
    pub aircon_model: Option<String>,
    pub note: Option<String>,
    /// 階層化された相対ファイルパス
    pub filepath: Option<String>,
    pub report_id: i32,
    pub air_conditioner_id: Option<i32>,
    pub work_item_id: Option<i32>,
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
        belongs_to = "AirConditionerEntity",
        from = "Column::AirConditionerId",
        to = "AirConditionerColumn::Id"
    )]
    AirConditioner,
    #[sea_orm(
        belongs_to = "WorkItemEntity",
        from = "Column::WorkItemId",
        to = "WorkItemColumn::Id"
    )]
    WorkItem,
}

impl Related<ReportEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<AirConditionerEntity> for Entity {
    fn to() -> RelationDef {
        Relation::AirConditioner.def()
    }
}

impl Related<WorkItemEntity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            photo_type: Set(self.photo_type),
            filename: Set(self.filename),
            original_filename: Set(self.original_filename),
            caption: Set(self.caption),
            room_name: Set(self.room_name),
            photo_set_id: Set(self.photo_set_id),
            aircon_model: Set(self.aircon_model),
            note: Set(self.note),
            filepath: Set(self.filepath),
            report_id: Set(self.report_id),
            air_conditioner_id: Set(self.air_conditioner_id),
            work_item_id: Set(self.work_item_id),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
