//! エアコン
use crate::system::prelude::*;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "air_conditioners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    /// エアコン種別（壁掛け、天井埋込み等）
    pub ac_type: Option<String>,
    pub manufacturer: Option<String>,
    /// 品番
    pub model_number: Option<String>,
    pub quantity: i32,
    /// 設置場所
    pub location: Option<String>,
    pub unit_price: Option<i32>,
    pub total_amount: Option<i32>,
    pub cleaning_type: Option<String>,
    pub note: Option<String>,
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
            property_id: Set(self.property_id),
            ac_type: Set(self.ac_type),
            manufacturer: Set(self.manufacturer),
            model_number: Set(self.model_number),
            quantity: Set(self.quantity),
            location: Set(self.location),
            unit_price: Set(self.unit_price),
            total_amount: Set(self.total_amount),
            cleaning_type: Set(self.cleaning_type),
            note: Set(self.note),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
