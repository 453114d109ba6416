use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::entity::schedule::{SchedulePriority, ScheduleStatus};

/// 手動スケジュールの作成・編集入力
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduleForm {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub status: Option<ScheduleStatus>,
    #[serde(default)]
    pub priority: Option<SchedulePriority>,
    #[serde(default)]
    pub customer_id: Option<i32>,
    #[serde(default)]
    pub property_id: Option<i32>,
    #[serde(default)]
    pub notification_enabled: Option<bool>,
    #[serde(default)]
    pub notification_minutes: Option<i32>,
}

/// スケジュール一覧の絞り込み（期間指定）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScheduleListFilter {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<ScheduleStatus>,
}
