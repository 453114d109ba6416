use std::path::PathBuf;

use async_trait::async_trait;

use crate::exception::ReportResult;
use crate::model::vo::{PhotoPathSpec, StoredPhoto};

/// 写真ファイルの階層保存
#[async_trait]
pub trait PhotoStorageService: Send + Sync {
    async fn save(
        &self,
        spec: &PhotoPathSpec,
        original_filename: &str,
        content: &[u8],
    ) -> ReportResult<StoredPhoto>;

    /// ファイルが無くても成功扱い（ベストエフォート削除）
    async fn remove(&self, relative_path: &str) -> ReportResult<()>;

    /// アップロードルート配下の絶対パスへ解決する
    fn resolve(&self, relative_path: &str) -> PathBuf;
}
