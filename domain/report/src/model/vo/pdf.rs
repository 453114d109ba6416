use std::path::PathBuf;

use domain_crm::model::entity::{AirConditioner, Customer, Property, WorkItem};
use serde::{Deserialize, Serialize};

use crate::model::entity::{Report, WorkDetail, WorkTime};
use crate::model::vo::PhotoPair;

/// 作業内容明細と、解決済みの関連マスター情報
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkDetailView {
    pub detail: WorkDetail,
    pub air_conditioner: Option<AirConditioner>,
    pub work_item: Option<WorkItem>,
}

impl WorkDetailView {
    /// マスター参照があればその名称、なければ手入力テキスト
    pub fn work_item_name(&self) -> String {
        if let Some(item) = &self.work_item {
            item.name.clone()
        } else {
            self.detail.work_item_text.clone().unwrap_or_default()
        }
    }
}

/// PDF 生成の入力一式。詳細表示のレスポンスにもそのまま使う
///
/// ORM のリレーション追跡に頼らず、必要な関連行を呼び出し側で
/// 解決してから渡す。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportPdfData {
    pub report: Report,
    pub customer: Option<Customer>,
    pub property: Option<Property>,
    /// 作業日・開始時刻の昇順
    pub work_times: Vec<WorkTime>,
    pub work_details: Vec<WorkDetailView>,
    pub photo_pairs: Vec<PhotoPair>,
}

/// 生成された PDF
#[derive(Debug, Clone)]
pub struct PdfOutput {
    pub bytes: Vec<u8>,
    /// save_to_disk 指定時のみ。保存に失敗しても bytes は返る
    pub saved_path: Option<PathBuf>,
}
