use chrono::NaiveDateTime;
use database_model::system::customer;
use serde::{Deserialize, Serialize};

/// # 顧客
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Customer {
    pub id: i32,
    /// 顧客名
    pub name: String,
    /// 会社名
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Customer {
    /// 顧客名と会社名を組み合わせた表示名
    pub fn display_name(&self) -> String {
        match &self.company_name {
            Some(company) if !company.is_empty() => format!("{}（{}）", self.name, company),
            _ => self.name.clone(),
        }
    }
}

impl From<customer::Model> for Customer {
    fn from(model: customer::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            company_name: model.company_name,
            email: model.email,
            phone: model.phone,
            postal_code: model.postal_code,
            address: model.address,
            note: model.note,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Customer> for customer::Model {
    fn from(entity: Customer) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            company_name: entity.company_name,
            email: entity.email,
            phone: entity.phone,
            postal_code: entity.postal_code,
            address: entity.address,
            note: entity.note,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
