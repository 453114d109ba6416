use async_trait::async_trait;
use domain_report::model::entity::Report;

use crate::model::vo::SyncWarning;

/// 報告書の作業時間からのスケジュール導出と、報告書ステータスの反映
///
/// どの操作もエラーを返さない。スケジュール整備はあくまで報告書保存の
/// 副作用であり、失敗しても保存本体を妨げない。問題は警告として返し、
/// 呼び出し側が表示するかどうかを選ぶ。
#[async_trait]
pub trait ScheduleSyncService: Send + Sync {
    /// 作業時間の並列配列（フォーム由来）からスケジュールを新規作成する。
    /// 解析できない日付はその行だけスキップ。
    async fn create_from_work_times(
        &self,
        report: &Report,
        work_dates: &[String],
        start_times: &[String],
        end_times: &[String],
        property_id: i32,
    ) -> Vec<SyncWarning>;

    /// 既存の関連スケジュールを全削除してから作り直す（差分更新はしない）
    async fn rebuild_from_work_times(
        &self,
        report: &Report,
        work_dates: &[String],
        start_times: &[String],
        end_times: &[String],
        property_id: i32,
    ) -> Vec<SyncWarning>;

    /// 報告書ステータスを関連スケジュールへ反映する。
    /// 実際に変わる行だけ updated_at を進める（冪等）。
    async fn sync_status_with_report(&self, report: &Report) -> Vec<SyncWarning>;

    /// 報告書削除時：関連スケジュールをキャンセルにし report_id を外す。
    /// スケジュール自体は履歴として残す。
    async fn cancel_and_detach(&self, report_id: i32) -> Vec<SyncWarning>;
}
