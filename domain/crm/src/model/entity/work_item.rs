use chrono::NaiveDateTime;
use database_model::system::work_item;
use serde::{Deserialize, Serialize};

/// # 作業項目マスター
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub work_amount: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<work_item::Model> for WorkItem {
    fn from(model: work_item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            work_amount: model.work_amount,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<WorkItem> for work_item::Model {
    fn from(entity: WorkItem) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            work_amount: entity.work_amount,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
