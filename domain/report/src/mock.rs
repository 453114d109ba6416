use std::path::PathBuf;

use async_trait::async_trait;
use mockall::mock;

use crate::{
    exception::ReportResult,
    model::{
        entity::{photo::PhotoType, Photo, Report, WorkDetail, WorkTime},
        vo::{PdfOutput, PhotoPathSpec, ReportListFilter, ReportPdfData, StoredPhoto},
    },
    repository::{PhotoRepo, ReportRepo, WorkDetailRepo, WorkTimeRepo},
    service::{PhotoStorageService, ReportPdfService},
};

mock! {
    pub ReportRepo {}
    #[async_trait]
    impl ReportRepo for ReportRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Report>;
        async fn list(&self, filter: &ReportListFilter) -> anyhow::Result<Vec<Report>>;
        async fn insert(&self, entity: &Report) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Report) -> anyhow::Result<()>;
        async fn delete_with_owned_rows(&self, id: i32) -> anyhow::Result<()>;
    }
}

mock! {
    pub WorkTimeRepo {}
    #[async_trait]
    impl WorkTimeRepo for WorkTimeRepo {
        async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<WorkTime>>;
        async fn insert(&self, entity: &WorkTime) -> anyhow::Result<i32>;
        async fn delete_by_report_id(&self, report_id: i32) -> anyhow::Result<u64>;
    }
}

mock! {
    pub WorkDetailRepo {}
    #[async_trait]
    impl WorkDetailRepo for WorkDetailRepo {
        async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<WorkDetail>>;
        async fn insert(&self, entity: &WorkDetail) -> anyhow::Result<i32>;
        async fn delete_by_report_id(&self, report_id: i32) -> anyhow::Result<u64>;
    }
}

mock! {
    pub PhotoRepo {}
    #[async_trait]
    impl PhotoRepo for PhotoRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Photo>;
        async fn get_by_report_id(&self, report_id: i32) -> anyhow::Result<Vec<Photo>>;
        async fn get_by_report_id_and_type(
            &self,
            report_id: i32,
            photo_type: PhotoType,
        ) -> anyhow::Result<Vec<Photo>>;
        async fn insert(&self, entity: &Photo) -> anyhow::Result<i32>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
    }
}

mock! {
    pub ReportPdfService {}
    #[async_trait]
    impl ReportPdfService for ReportPdfService {
        async fn generate(
            &self,
            data: &ReportPdfData,
            save_to_disk: bool,
        ) -> ReportResult<PdfOutput>;
    }
}

mock! {
    pub PhotoStorageService {}
    #[async_trait]
    impl PhotoStorageService for PhotoStorageService {
        async fn save(
            &self,
            spec: &PhotoPathSpec,
            original_filename: &str,
            content: &[u8],
        ) -> ReportResult<StoredPhoto>;
        async fn remove(&self, relative_path: &str) -> ReportResult<()>;
        fn resolve(&self, relative_path: &str) -> PathBuf;
    }
}
