use chrono::NaiveDateTime;
use database_model::system::property;
use serde::{Deserialize, Serialize};

/// # 物件
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Property {
    pub id: i32,
    /// 物件名
    pub name: String,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
    /// 受付種別
    pub reception_type: Option<String>,
    /// 受付明細
    pub reception_detail: Option<String>,
    /// 属する顧客 id
    pub customer_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<property::Model> for Property {
    fn from(model: property::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            postal_code: model.postal_code,
            address: model.address,
            note: model.note,
            reception_type: model.reception_type,
            reception_detail: model.reception_detail,
            customer_id: model.customer_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Property> for property::Model {
    fn from(entity: Property) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            postal_code: entity.postal_code,
            address: entity.address,
            note: entity.note,
            reception_type: entity.reception_type,
            reception_detail: entity.reception_detail,
            customer_id: entity.customer_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
