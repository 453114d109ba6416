//! 物件
use crate::system::prelude::*;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
    /// 受付種別
    pub reception_type: Option<String>,
    /// 受付明細
    pub reception_detail: Option<String>,
    pub customer_id: i32,
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
    #[sea_orm(has_many = "ReportEntity")]
    Report,
    #[sea_orm(has_many = "AirConditionerEntity")]
    AirConditioner,
}

impl Related<CustomerEntity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
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

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_set(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            postal_code: Set(self.postal_code),
            address: Set(self.address),
            note: Set(self.note),
            reception_type: Set(self.reception_type),
            reception_detail: Set(self.reception_detail),
            customer_id: Set(self.customer_id),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
