use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use database_model::system::work_time;
use serde::{Deserialize, Serialize};

/// # 作業時間
///
/// 報告書に属する 1 つの作業区間（作業日＋開始・終了時刻）。
/// 複数日にまたがる作業では報告書 1 件に複数行並ぶ。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkTime {
    pub id: i32,
    pub work_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub note: Option<String>,
    pub report_id: i32,
    pub property_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<work_time::Model> for WorkTime {
    fn from(model: work_time::Model) -> Self {
        Self {
            id: model.id,
            work_date: model.work_date,
            start_time: model.start_time,
            end_time: model.end_time,
            note: model.note,
            report_id: model.report_id,
            property_id: model.property_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<WorkTime> for work_time::Model {
    fn from(entity: WorkTime) -> Self {
        Self {
            id: entity.id,
            work_date: entity.work_date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            note: entity.note,
            report_id: entity.report_id,
            property_id: entity.property_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
