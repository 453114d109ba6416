use serde::{Deserialize, Serialize};

use crate::model::entity::report::ReportStatus;

/// 報告書の作成・編集入力
///
/// 作業時間はフォーム由来の並列配列のまま受け取る。要素単位の
/// 解析失敗をスキップできるようにするため、構造化はここでは行わない。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportForm {
    pub property_id: i32,
    /// YYYY-MM-DD
    pub date: String,
    #[serde(default)]
    pub work_address: Option<String>,
    #[serde(default)]
    pub technician: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub status: Option<ReportStatus>,
    /// YYYY-MM-DD（作業時間行ごと）
    #[serde(default)]
    pub work_dates: Vec<String>,
    /// HH:MM
    #[serde(default)]
    pub start_times: Vec<String>,
    /// HH:MM
    #[serde(default)]
    pub end_times: Vec<String>,
    #[serde(default)]
    pub work_time_notes: Vec<String>,
    #[serde(default)]
    pub work_details: Vec<WorkDetailForm>,
}

/// 作業内容明細の入力行
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkDetailForm {
    #[serde(default)]
    pub work_item_id: Option<i32>,
    #[serde(default)]
    pub work_item_text: Option<String>,
    pub description: String,
    #[serde(default)]
    pub confirmation: Option<String>,
    #[serde(default)]
    pub air_conditioner_id: Option<i32>,
}

/// 報告書一覧の絞り込み
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportListFilter {
    #[serde(default)]
    pub status: Option<ReportStatus>,
    /// 顧客名・物件名・住所・備考に対する部分一致
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u64>,
}
