use serde::{Deserialize, Serialize};
use thiserror::Error;

/// スケジュール同期中に握りつぶさず収集する警告
///
/// 同期は報告書保存を決して妨げない（ベストエフォート）。その方針の
/// まま、何が落ちたかを呼び出し側が UI に出せるよう型で返す。
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyncWarning {
    #[error("work date at index {index} could not be parsed: {value:?}")]
    InvalidWorkDate { index: usize, value: String },

    #[error("start time at index {index} could not be parsed, defaulted to 09:00: {value:?}")]
    InvalidStartTime { index: usize, value: String },

    #[error("end time at index {index} could not be parsed, defaulted to 17:00: {value:?}")]
    InvalidEndTime { index: usize, value: String },

    #[error("property {property_id} could not be resolved: {reason}")]
    PropertyUnresolved { property_id: i32, reason: String },

    #[error("schedule persistence failed: {reason}")]
    Persistence { reason: String },
}
