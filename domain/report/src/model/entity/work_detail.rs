use chrono::NaiveDateTime;
use database_model::system::work_detail;
use serde::{Deserialize, Serialize};

/// # 作業内容明細
///
/// 報告書の 1 行分の作業記録。作業項目はマスター参照
/// (`work_item_id`) と手入力 (`work_item_text`) のどちらか。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkDetail {
    pub id: i32,
    pub work_item_id: Option<i32>,
    pub work_item_text: Option<String>,
    pub description: String,
    pub confirmation: Option<String>,
    pub work_amount: i32,
    pub report_id: i32,
    pub property_id: Option<i32>,
    pub air_conditioner_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<work_detail::Model> for WorkDetail {
    fn from(model: work_detail::Model) -> Self {
        Self {
            id: model.id,
            work_item_id: model.work_item_id,
            work_item_text: model.work_item_text,
            description: model.description,
            confirmation: model.confirmation,
            work_amount: model.work_amount,
            report_id: model.report_id,
            property_id: model.property_id,
            air_conditioner_id: model.air_conditioner_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<WorkDetail> for work_detail::Model {
    fn from(entity: WorkDetail) -> Self {
        Self {
            id: entity.id,
            work_item_id: entity.work_item_id,
            work_item_text: entity.work_item_text,
            description: entity.description,
            confirmation: entity.confirmation,
            work_amount: entity.work_amount,
            report_id: entity.report_id,
            property_id: entity.property_id,
            air_conditioner_id: entity.air_conditioner_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
