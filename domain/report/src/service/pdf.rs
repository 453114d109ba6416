use async_trait::async_trait;

use crate::exception::ReportResult;
use crate::model::vo::{PdfOutput, ReportPdfData};

/// 作業完了報告書 PDF の生成
#[async_trait]
pub trait ReportPdfService: Send + Sync {
    /// 本文（報告者・顧客・作業時間・作業内容）と写真ギャラリーを
    /// 1 つの文書に組み上げる。`save_to_disk` 指定時はサーバー側にも
    /// 保存するが、保存失敗は致命的ではなく bytes はそのまま返る。
    async fn generate(&self, data: &ReportPdfData, save_to_disk: bool)
        -> ReportResult<PdfOutput>;
}
