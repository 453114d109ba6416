use async_trait::async_trait;

use crate::model::{entity::Report, vo::ReportListFilter};

#[async_trait]
pub trait ReportRepo: Send + Sync {
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Report>;

    async fn list(&self, filter: &ReportListFilter) -> anyhow::Result<Vec<Report>>;

    async fn insert(&self, entity: &Report) -> anyhow::Result<i32>;

    async fn update(&self, entity: &Report) -> anyhow::Result<()>;

    /// 報告書と所有行（写真・作業時間・作業内容）を 1 トランザクションで削除する。
    /// スケジュールは削除しない（呼び出し側でキャンセルへ切り離す）。
    async fn delete_with_owned_rows(&self, id: i32) -> anyhow::Result<()>;
}
