//! 報告書
use crate::system::prelude::*;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// タイトル（デフォルト：作業完了書）
    pub title: String,
    /// 作業日
    pub date: Date,
    pub work_address: Option<String>,
    /// 作業者名
    pub technician: Option<String>,
    /// pending, completed など（アプリケーション側の列挙で制約）
    pub status: String,
    /// 作業内容（旧フィールド）
    pub work_description: Option<String>,
    pub note: Option<String>,
    pub property_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "PropertyEntity",
        from = "Column::PropertyId",
        to = "PropertyColumn::Id"
    )]
    Property,
    #[sea_orm(has_many = "PhotoEntity")]
    Photo,
    #[sea_orm(has_many = "WorkTimeEntity")]
    WorkTime,
    #[sea_orm(has_many = "WorkDetailEntity")]
    WorkDetail,
}

impl Related<PropertyEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<PhotoEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Photo.def()
    }
}

impl Related<WorkTimeEntity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkTime.def()
    }
}

impl Related<WorkDetailEntity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            title: Set(self.title),
            date: Set(self.date),
            work_address: Set(self.work_address),
            technician: Set(self.technician),
            status: Set(self.status),
            work_description: Set(self.work_description),
            note: Set(self.note),
            property_id: Set(self.property_id),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
