use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Local;
use domain_report::{
    exception::{ReportException, ReportResult},
    model::vo::{PhotoPathSpec, StoredPhoto},
    service::PhotoStorageService,
};
use tracing::warn;
use typed_builder::TypedBuilder;

/// アップロードルート配下への写真の階層保存
#[derive(TypedBuilder, Clone)]
pub struct PhotoStorageServiceImpl {
    #[builder(setter(into))]
    base: PathBuf,
}

#[async_trait]
impl PhotoStorageService for PhotoStorageServiceImpl {
    async fn save(
        &self,
        spec: &PhotoPathSpec,
        original_filename: &str,
        content: &[u8],
    ) -> ReportResult<StoredPhoto> {
        let relative_dir = spec.relative_dir();
        let filename =
            PhotoPathSpec::storage_filename(original_filename, Local::now().naive_local());
        let relative_path = format!("{relative_dir}/{filename}");

        let dir = self.base.join(&relative_dir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ReportException::PhotoStorage { source: e.into() })?;
        tokio::fs::write(dir.join(&filename), content)
            .await
            .map_err(|e| ReportException::PhotoStorage { source: e.into() })?;

        Ok(StoredPhoto {
            filename,
            relative_path,
        })
    }

    async fn remove(&self, relative_path: &str) -> ReportResult<()> {
        let path = self.resolve(relative_path);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            // 既に無い・消せないファイルは警告に留める
            warn!("failed to remove photo file {path:?}: {e}");
        }
        Ok(())
    }

    fn resolve(&self, relative_path: &str) -> PathBuf {
        self.base.join(relative_path)
    }
}

#[cfg(test)]
mod tests {
    use domain_report::model::entity::photo::PhotoType;

    use super::*;

    fn load() -> (PhotoStorageServiceImpl, PathBuf) {
        let base = std::env::temp_dir().join(format!("photo-storage-test-{}", uuid::Uuid::new_v4()));
        (PhotoStorageServiceImpl::builder().base(base.clone()).build(), base)
    }

    #[tokio::test]
    async fn save_writes_under_the_hierarchical_path() {
        let (service, base) = load();
        let spec = PhotoPathSpec {
            photo_type: PhotoType::Before,
            ..Default::default()
        };

        let stored = service.save(&spec, "room1.jpg", b"fakejpeg").await.unwrap();
        assert!(stored.relative_path.starts_with("before/"));
        assert!(stored.relative_path.ends_with("room1.jpg"));

        let on_disk = tokio::fs::read(service.resolve(&stored.relative_path)).await.unwrap();
        assert_eq!(on_disk, b"fakejpeg");
        std::fs::remove_dir_all(&base).ok();
    }

    #[tokio::test]
    async fn remove_is_best_effort() {
        let (service, base) = load();
        // 存在しないパスでも成功扱い
        service.remove("before/none/missing.jpg").await.unwrap();

        let spec = PhotoPathSpec::default();
        let stored = service.save(&spec, "a.jpg", b"x").await.unwrap();
        service.remove(&stored.relative_path).await.unwrap();
        assert!(!service.resolve(&stored.relative_path).exists());
        std::fs::remove_dir_all(&base).ok();
    }
}
