use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveTime};
use domain_crm::repository::{AirConditionerRepo, CustomerRepo, PropertyRepo, WorkItemRepo};
use domain_report::{
    exception::{ReportException, ReportResult},
    model::{
        entity::{Photo, Report, WorkDetail, WorkTime},
        vo::{PhotoPair, PhotoView, ReportForm, ReportListFilter, ReportPdfData, WorkDetailView},
    },
    repository::{PhotoRepo, ReportRepo, WorkDetailRepo, WorkTimeRepo},
    service::PhotoStorageService,
};
use domain_report::model::entity::photo::PhotoType;
use domain_schedule::{model::vo::SyncWarning, service::ScheduleSyncService};
use tracing::warn;
use typed_builder::TypedBuilder;

/// 報告書の作成・編集・削除と、PDF 生成入力の組み立て
///
/// スケジュール整備は ScheduleSyncService へ委譲し、返ってきた警告を
/// そのまま呼び出し側へ渡す。同期の失敗が保存を失敗させることはない。
#[derive(TypedBuilder)]
pub struct ReportServiceImpl {
    report_repository: Arc<dyn ReportRepo>,
    work_time_repository: Arc<dyn WorkTimeRepo>,
    work_detail_repository: Arc<dyn WorkDetailRepo>,
    photo_repository: Arc<dyn PhotoRepo>,
    customer_repository: Arc<dyn CustomerRepo>,
    property_repository: Arc<dyn PropertyRepo>,
    air_conditioner_repository: Arc<dyn AirConditionerRepo>,
    work_item_repository: Arc<dyn WorkItemRepo>,
    schedule_sync_service: Arc<dyn ScheduleSyncService>,
    photo_storage_service: Arc<dyn PhotoStorageService>,
}

impl ReportServiceImpl {
    pub async fn create(&self, form: &ReportForm) -> ReportResult<(i32, Vec<SyncWarning>)> {
        let date = parse_form_date(&form.date)?;
        let now = Local::now().naive_local();

        let mut report = Report {
            id: 0,
            title: "作業完了書".to_string(),
            date,
            work_address: form.work_address.clone(),
            technician: form.technician.clone(),
            status: form.status.unwrap_or_default(),
            work_description: None,
            note: form.note.clone(),
            property_id: form.property_id,
            created_at: now,
            updated_at: now,
        };
        report.id = self.report_repository.insert(&report).await?;

        self.insert_work_times(&report, form).await?;
        self.insert_work_details(&report, form).await?;

        let mut warnings = self
            .schedule_sync_service
            .create_from_work_times(
                &report,
                &form.work_dates,
                &form.start_times,
                &form.end_times,
                form.property_id,
            )
            .await;
        warnings.extend(self.schedule_sync_service.sync_status_with_report(&report).await);

        Ok((report.id, warnings))
    }

    pub async fn update(&self, id: i32, form: &ReportForm) -> ReportResult<Vec<SyncWarning>> {
        let mut report = self
            .report_repository
            .get_by_id(id)
            .await
            .map_err(|_| ReportException::NotFound { id })?;

        report.date = parse_form_date(&form.date)?;
        report.property_id = form.property_id;
        report.work_address = form.work_address.clone();
        report.technician = form.technician.clone();
        report.note = form.note.clone();
        if let Some(status) = form.status {
            report.status = status;
        }
        report.updated_at = Local::now().naive_local();
        self.report_repository.update(&report).await?;

        // 作業時間・作業内容は全置換
        self.work_time_repository.delete_by_report_id(id).await?;
        self.work_detail_repository.delete_by_report_id(id).await?;
        self.insert_work_times(&report, form).await?;
        self.insert_work_details(&report, form).await?;

        let mut warnings = self
            .schedule_sync_service
            .rebuild_from_work_times(
                &report,
                &form.work_dates,
                &form.start_times,
                &form.end_times,
                form.property_id,
            )
            .await;
        warnings.extend(self.schedule_sync_service.sync_status_with_report(&report).await);

        Ok(warnings)
    }

    /// 報告書と所有行を削除する。関連スケジュールは削除せず
    /// キャンセル済みへ切り離して履歴として残す
    pub async fn delete(&self, id: i32) -> ReportResult<Vec<SyncWarning>> {
        self.report_repository
            .get_by_id(id)
            .await
            .map_err(|_| ReportException::NotFound { id })?;

        let warnings = self.schedule_sync_service.cancel_and_detach(id).await;

        // 写真ファイルはベストエフォートで掃除する
        match self.photo_repository.get_by_report_id(id).await {
            Ok(photos) => {
                for photo in photos {
                    if let Some(filepath) = photo.filepath.as_deref() {
                        if let Err(e) = self.photo_storage_service.remove(filepath).await {
                            warn!("photo #{}: file cleanup failed: {e}", photo.id);
                        }
                    }
                }
            }
            Err(e) => warn!("report #{id}: photo lookup failed before delete: {e}"),
        }

        self.report_repository.delete_with_owned_rows(id).await?;
        Ok(warnings)
    }

    pub async fn list(&self, filter: &ReportListFilter) -> ReportResult<Vec<Report>> {
        Ok(self.report_repository.list(filter).await?)
    }

    /// 詳細表示と PDF 生成が使う、関連行を解決済みの入力一式
    pub async fn get_detail(&self, id: i32) -> ReportResult<ReportPdfData> {
        let report = self
            .report_repository
            .get_by_id(id)
            .await
            .map_err(|_| ReportException::NotFound { id })?;

        let property = self.property_repository.get_by_id(report.property_id).await.ok();
        let customer = match &property {
            Some(property) => self.customer_repository.get_by_id(property.customer_id).await.ok(),
            None => None,
        };

        let work_times = self.work_time_repository.get_by_report_id(id).await?;

        let mut work_details = vec![];
        for detail in self.work_detail_repository.get_by_report_id(id).await? {
            work_details.push(WorkDetailView {
                air_conditioner: self.resolve_air_conditioner(detail.air_conditioner_id).await,
                work_item: self.resolve_work_item(detail.work_item_id).await,
                detail,
            });
        }

        let before = self
            .photo_repository
            .get_by_report_id_and_type(id, PhotoType::Before)
            .await?;
        let after = self
            .photo_repository
            .get_by_report_id_and_type(id, PhotoType::After)
            .await?;
        let photo_pairs = PhotoPair::pair_up(
            self.photo_views(before).await,
            self.photo_views(after).await,
        );

        Ok(ReportPdfData {
            report,
            customer,
            property,
            work_times,
            work_details,
            photo_pairs,
        })
    }

    async fn photo_views(&self, photos: Vec<Photo>) -> Vec<PhotoView> {
        let mut views = vec![];
        for photo in photos {
            views.push(PhotoView {
                air_conditioner: self.resolve_air_conditioner(photo.air_conditioner_id).await,
                work_item: self.resolve_work_item(photo.work_item_id).await,
                photo,
            });
        }
        views
    }

    async fn resolve_air_conditioner(
        &self,
        id: Option<i32>,
    ) -> Option<domain_crm::model::entity::AirConditioner> {
        match id {
            Some(id) => self.air_conditioner_repository.get_by_id(id).await.ok(),
            None => None,
        }
    }

    async fn resolve_work_item(
        &self,
        id: Option<i32>,
    ) -> Option<domain_crm::model::entity::WorkItem> {
        match id {
            Some(id) => self.work_item_repository.get_by_id(id).await.ok(),
            None => None,
        }
    }

    /// 日付・開始・終了がそろって解析できた行だけ登録する
    async fn insert_work_times(&self, report: &Report, form: &ReportForm) -> ReportResult<()> {
        let now = Local::now().naive_local();
        for (i, raw_date) in form.work_dates.iter().enumerate() {
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").ok();
            let start = form
                .start_times
                .get(i)
                .and_then(|raw| NaiveTime::parse_from_str(raw, "%H:%M").ok());
            let end = form
                .end_times
                .get(i)
                .and_then(|raw| NaiveTime::parse_from_str(raw, "%H:%M").ok());

            let (Some(work_date), Some(start_time), Some(end_time)) = (date, start, end) else {
                continue;
            };

            let work_time = WorkTime {
                id: 0,
                work_date,
                start_time,
                end_time,
                note: form.work_time_notes.get(i).cloned().filter(|n| !n.is_empty()),
                report_id: report.id,
                property_id: report.property_id,
                created_at: now,
                updated_at: now,
            };
            self.work_time_repository.insert(&work_time).await?;
        }
        Ok(())
    }

    /// 作業項目の参照も手入力も無い行、内容が空の行は登録しない
    async fn insert_work_details(&self, report: &Report, form: &ReportForm) -> ReportResult<()> {
        let now = Local::now().naive_local();
        for row in &form.work_details {
            if row.description.is_empty() {
                continue;
            }
            let work_item_text = row.work_item_text.clone().filter(|t| !t.is_empty());
            if row.work_item_id.is_none() && work_item_text.is_none() {
                continue;
            }

            let detail = WorkDetail {
                id: 0,
                work_item_id: row.work_item_id,
                work_item_text,
                description: row.description.clone(),
                confirmation: row.confirmation.clone(),
                work_amount: 0,
                report_id: report.id,
                property_id: Some(report.property_id),
                air_conditioner_id: row.air_conditioner_id,
                created_at: now,
                updated_at: now,
            };
            self.work_detail_repository.insert(&detail).await?;
        }
        Ok(())
    }
}

fn parse_form_date(raw: &str) -> ReportResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ReportException::InvalidForm {
        reason: format!("invalid report date: {raw:?}"),
    })
}

#[cfg(test)]
mod tests {
    use domain_crm::mock::{
        MockAirConditionerRepo, MockCustomerRepo, MockPropertyRepo, MockWorkItemRepo,
    };
    use domain_report::mock::{
        MockPhotoRepo, MockPhotoStorageService, MockReportRepo, MockWorkDetailRepo,
        MockWorkTimeRepo,
    };
    use domain_schedule::mock::MockScheduleSyncService;

    use super::*;

    struct Mocks {
        report: MockReportRepo,
        work_time: MockWorkTimeRepo,
        work_detail: MockWorkDetailRepo,
        photo: MockPhotoRepo,
        sync: MockScheduleSyncService,
        storage: MockPhotoStorageService,
    }

    impl Default for Mocks {
        fn default() -> Self {
            Self {
                report: MockReportRepo::new(),
                work_time: MockWorkTimeRepo::new(),
                work_detail: MockWorkDetailRepo::new(),
                photo: MockPhotoRepo::new(),
                sync: MockScheduleSyncService::new(),
                storage: MockPhotoStorageService::new(),
            }
        }
    }

    fn service(mocks: Mocks) -> ReportServiceImpl {
        ReportServiceImpl::builder()
            .report_repository(Arc::new(mocks.report))
            .work_time_repository(Arc::new(mocks.work_time))
            .work_detail_repository(Arc::new(mocks.work_detail))
            .photo_repository(Arc::new(mocks.photo))
            .customer_repository(Arc::new(MockCustomerRepo::new()))
            .property_repository(Arc::new(MockPropertyRepo::new()))
            .air_conditioner_repository(Arc::new(MockAirConditionerRepo::new()))
            .work_item_repository(Arc::new(MockWorkItemRepo::new()))
            .schedule_sync_service(Arc::new(mocks.sync))
            .photo_storage_service(Arc::new(mocks.storage))
            .build()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn form() -> ReportForm {
        ReportForm {
            property_id: 7,
            date: "2025-06-01".to_string(),
            work_dates: strings(&["2025-06-01", "2025-06-02", "2025-06-03"]),
            start_times: strings(&["09:00", "bad-time", "10:00"]),
            end_times: strings(&["12:00", "17:00", "15:00"]),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_skips_unparsable_work_time_rows_but_syncs_all() {
        let mut mocks = Mocks::default();
        mocks.report.expect_insert().returning(|_| Ok(42));
        // 2 行目は時刻が壊れているので作業時間としては登録されない
        mocks
            .work_time
            .expect_insert()
            .times(2)
            .returning(|_| Ok(1));
        mocks
            .sync
            .expect_create_from_work_times()
            .withf(|report, dates, _, _, property_id| {
                report.id == 42 && dates.len() == 3 && *property_id == 7
            })
            .times(1)
            .returning(|_, _, _, _, _| vec![]);
        mocks
            .sync
            .expect_sync_status_with_report()
            .times(1)
            .returning(|_| vec![]);

        let (id, warnings) = service(mocks).create(&form()).await.unwrap();
        assert_eq!(id, 42);
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn create_surfaces_sync_warnings_without_failing() {
        let mut mocks = Mocks::default();
        mocks.report.expect_insert().returning(|_| Ok(42));
        mocks.work_time.expect_insert().returning(|_| Ok(1));
        mocks.sync.expect_create_from_work_times().returning(|_, _, _, _, _| {
            vec![SyncWarning::InvalidWorkDate {
                index: 1,
                value: "oops".to_string(),
            }]
        });
        mocks.sync.expect_sync_status_with_report().returning(|_| vec![]);

        let (_, warnings) = service(mocks).create(&form()).await.unwrap();
        assert_eq!(warnings.len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_report_date() {
        let mocks = Mocks::default();
        let mut bad_form = form();
        bad_form.date = "June 1st".to_string();
        let result = service(mocks).create(&bad_form).await;
        assert!(matches!(result, Err(ReportException::InvalidForm { .. })));
    }

    #[tokio::test]
    async fn update_replaces_work_rows_and_rebuilds_schedules() {
        let mut mocks = Mocks::default();
        mocks.report.expect_get_by_id().returning(|id| {
            Ok(Report {
                id,
                property_id: 7,
                ..Default::default()
            })
        });
        mocks.report.expect_update().times(1).returning(|_| Ok(()));
        mocks
            .work_time
            .expect_delete_by_report_id()
            .times(1)
            .returning(|_| Ok(3));
        mocks
            .work_detail
            .expect_delete_by_report_id()
            .times(1)
            .returning(|_| Ok(1));
        mocks.work_time.expect_insert().returning(|_| Ok(1));
        mocks
            .sync
            .expect_rebuild_from_work_times()
            .times(1)
            .returning(|_, _, _, _, _| vec![]);
        mocks.sync.expect_sync_status_with_report().times(1).returning(|_| vec![]);

        let warnings = service(mocks).update(42, &form()).await.unwrap();
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn delete_detaches_schedules_and_cleans_photo_files() {
        let mut mocks = Mocks::default();
        mocks.report.expect_get_by_id().returning(|id| {
            Ok(Report {
                id,
                ..Default::default()
            })
        });
        mocks.sync.expect_cancel_and_detach().times(1).returning(|_| vec![]);
        mocks.photo.expect_get_by_report_id().returning(|_| {
            Ok(vec![
                Photo {
                    id: 1,
                    filepath: Some("before/a.jpg".to_string()),
                    ..Default::default()
                },
                Photo {
                    id: 2,
                    filepath: None,
                    ..Default::default()
                },
            ])
        });
        // filepath を持つ写真だけファイル削除される
        mocks.storage.expect_remove().times(1).returning(|_| Ok(()));
        mocks
            .report
            .expect_delete_with_owned_rows()
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(mocks).delete(42).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_report_is_not_found() {
        let mut mocks = Mocks::default();
        mocks
            .report
            .expect_get_by_id()
            .returning(|_| Err(anyhow::anyhow!("no row")));
        let result = service(mocks).delete(999).await;
        assert!(matches!(result, Err(ReportException::NotFound { id: 999 })));
    }
}
