use std::path::PathBuf;

use database_model::system::{
    air_conditioner, customer, photo, property, report, schedule, user, work_detail, work_item,
    work_time,
};
use domain_schedule::model::vo::SyncWarning;
use serde::{Deserialize, Serialize};

/// 報告書の作成・編集結果。スケジュール同期の警告も運ぶ
#[derive(Serialize)]
pub struct ReportSavedResponse {
    pub id: i32,
    pub warnings: Vec<SyncWarning>,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
    pub warnings: Vec<SyncWarning>,
}

#[derive(Deserialize)]
pub struct PdfQuery {
    /// 1 でサーバー側保存
    #[serde(default)]
    pub save: u8,
}

#[derive(Serialize)]
pub struct PdfSavedResponse {
    pub saved_path: Option<PathBuf>,
}

#[derive(Serialize)]
pub struct NotificationStatusResponse {
    pub mail_configured: bool,
    pub enabled: bool,
    pub check_interval: u64,
}

#[derive(Serialize)]
pub struct SentCountResponse {
    pub sent_count: usize,
}

#[derive(Deserialize)]
pub struct TestMailRequest {
    pub to: String,
}

#[derive(Serialize)]
pub struct SentResponse {
    pub sent: bool,
}

/// 全テーブルの一括エクスポート・インポート形式
#[derive(Serialize, Deserialize, Default)]
pub struct DataDump {
    #[serde(default)]
    pub customers: Vec<customer::Model>,
    #[serde(default)]
    pub properties: Vec<property::Model>,
    #[serde(default)]
    pub air_conditioners: Vec<air_conditioner::Model>,
    #[serde(default)]
    pub work_items: Vec<work_item::Model>,
    #[serde(default)]
    pub users: Vec<user::Model>,
    #[serde(default)]
    pub reports: Vec<report::Model>,
    #[serde(default)]
    pub work_times: Vec<work_time::Model>,
    #[serde(default)]
    pub work_details: Vec<work_detail::Model>,
    #[serde(default)]
    pub photos: Vec<photo::Model>,
    #[serde(default)]
    pub schedules: Vec<schedule::Model>,
}

#[derive(Serialize)]
pub struct ImportedResponse {
    pub imported: usize,
}
