use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDate, NaiveTime};
use domain_crm::repository::{CustomerRepo, PropertyRepo};
use domain_report::model::entity::Report;
use domain_schedule::{
    model::{
        entity::schedule::{Schedule, SchedulePriority, ScheduleStatus},
        vo::SyncWarning,
    },
    repository::ScheduleRepo,
    service::ScheduleSyncService,
};
use tracing::{info, warn};
use typed_builder::TypedBuilder;

/// 開始時刻が解析できないときの既定値
const DEFAULT_START: (u32, u32) = (9, 0);
/// 終了時刻が解析できないときの既定値
const DEFAULT_END: (u32, u32) = (17, 0);

#[derive(TypedBuilder)]
pub struct ScheduleSyncServiceImpl {
    schedule_repository: Arc<dyn ScheduleRepo>,
    property_repository: Arc<dyn PropertyRepo>,
    customer_repository: Arc<dyn CustomerRepo>,
}

/// タイトル・説明生成に使う顧客・物件の表示名
struct ResolvedNames {
    customer_name: String,
    property_name: String,
    customer_id: Option<i32>,
}

#[async_trait]
impl ScheduleSyncService for ScheduleSyncServiceImpl {
    async fn create_from_work_times(
        &self,
        report: &Report,
        work_dates: &[String],
        start_times: &[String],
        end_times: &[String],
        property_id: i32,
    ) -> Vec<SyncWarning> {
        let mut warnings = vec![];
        let names = self.resolve_names(property_id, &mut warnings).await;
        let now = Local::now().naive_local();

        for (i, raw_date) in work_dates.iter().enumerate() {
            // 未入力の行はフォームの空行なので黙って飛ばす
            if raw_date.is_empty() {
                continue;
            }
            let work_date = match NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    warn!(
                        "report #{}: skipping work time row {i}: unparsable date {raw_date:?}",
                        report.id
                    );
                    warnings.push(SyncWarning::InvalidWorkDate {
                        index: i,
                        value: raw_date.clone(),
                    });
                    continue;
                }
            };

            let start_time = parse_time_or_default(
                start_times.get(i),
                DEFAULT_START,
                |value| SyncWarning::InvalidStartTime {
                    index: i,
                    value: value.to_string(),
                },
                &mut warnings,
            );
            let end_time = parse_time_or_default(
                end_times.get(i),
                DEFAULT_END,
                |value| SyncWarning::InvalidEndTime {
                    index: i,
                    value: value.to_string(),
                },
                &mut warnings,
            );

            let (title, description) = if i == 0 {
                let mut description = format!("報告書 #{} の作業\n", report.id);
                if let Some(address) = report.work_address.as_deref().filter(|a| !a.is_empty()) {
                    description.push_str(&format!("作業場所: {address}\n"));
                }
                if let Some(note) = report.note.as_deref().filter(|n| !n.is_empty()) {
                    description.push_str(&format!("備考: {note}"));
                }
                (
                    format!("作業: {} - {}", names.customer_name, names.property_name),
                    description,
                )
            } else {
                (
                    format!(
                        "作業: {} - {} (Day {})",
                        names.customer_name,
                        names.property_name,
                        i + 1
                    ),
                    format!("報告書 #{} の作業 (作業日 {})", report.id, i + 1),
                )
            };

            // ステータスは未完了で作り、その後の同期で報告書側へ合わせる
            let schedule = Schedule {
                id: 0,
                title,
                description: Some(description),
                start_datetime: work_date.and_time(start_time),
                end_datetime: work_date.and_time(end_time),
                all_day: false,
                status: ScheduleStatus::Pending,
                priority: SchedulePriority::Normal,
                customer_id: names.customer_id,
                property_id: Some(property_id),
                report_id: Some(report.id),
                google_calendar_id: None,
                google_calendar_sync: false,
                recurrence_type: None,
                recurrence_end: None,
                notification_enabled: true,
                notification_minutes: 30,
                created_by: None,
                created_at: now,
                updated_at: now,
            };

            if let Err(e) = self.schedule_repository.insert(&schedule).await {
                warn!("report #{}: failed to insert schedule: {e}", report.id);
                warnings.push(SyncWarning::Persistence {
                    reason: e.to_string(),
                });
            }
        }

        warnings
    }

    async fn rebuild_from_work_times(
        &self,
        report: &Report,
        work_dates: &[String],
        start_times: &[String],
        end_times: &[String],
        property_id: i32,
    ) -> Vec<SyncWarning> {
        // 差分更新はしない。既存の関連スケジュールを消して作り直す
        if let Err(e) = self.schedule_repository.delete_by_report_id(report.id).await {
            warn!(
                "report #{}: failed to delete schedules before rebuild: {e}",
                report.id
            );
            // 削除に失敗した状態で作り直すと重複するため打ち切る
            return vec![SyncWarning::Persistence {
                reason: e.to_string(),
            }];
        }

        self.create_from_work_times(report, work_dates, start_times, end_times, property_id)
            .await
    }

    async fn sync_status_with_report(&self, report: &Report) -> Vec<SyncWarning> {
        let mut warnings = vec![];

        let schedules = match self.schedule_repository.get_by_report_id(report.id).await {
            Ok(schedules) => schedules,
            Err(e) => {
                warn!("report #{}: failed to load schedules for sync: {e}", report.id);
                warnings.push(SyncWarning::Persistence {
                    reason: e.to_string(),
                });
                return warnings;
            }
        };

        let target = ScheduleStatus::for_report(report.status);
        let mut updated_count = 0;
        for mut schedule in schedules {
            if schedule.status == target {
                continue;
            }
            schedule.status = target;
            schedule.updated_at = Local::now().naive_local();
            match self.schedule_repository.update(&schedule).await {
                Ok(()) => updated_count += 1,
                Err(e) => {
                    warn!("schedule #{}: failed to sync status: {e}", schedule.id);
                    warnings.push(SyncWarning::Persistence {
                        reason: e.to_string(),
                    });
                }
            }
        }

        if updated_count > 0 {
            info!(
                "report #{}: synced {updated_count} schedule(s) to status {target}",
                report.id
            );
        }

        warnings
    }

    async fn cancel_and_detach(&self, report_id: i32) -> Vec<SyncWarning> {
        let mut warnings = vec![];

        let schedules = match self.schedule_repository.get_by_report_id(report_id).await {
            Ok(schedules) => schedules,
            Err(e) => {
                warn!("report #{report_id}: failed to load schedules for detach: {e}");
                warnings.push(SyncWarning::Persistence {
                    reason: e.to_string(),
                });
                return warnings;
            }
        };

        for mut schedule in schedules {
            schedule.status = ScheduleStatus::Cancelled;
            schedule.updated_at = Local::now().naive_local();
            schedule.report_id = None;
            match self.schedule_repository.update(&schedule).await {
                Ok(()) => {
                    info!("schedule #{}: cancelled and detached from report #{report_id}", schedule.id);
                }
                Err(e) => {
                    warn!("schedule #{}: failed to cancel: {e}", schedule.id);
                    warnings.push(SyncWarning::Persistence {
                        reason: e.to_string(),
                    });
                }
            }
        }

        warnings
    }
}

impl ScheduleSyncServiceImpl {
    async fn resolve_names(
        &self,
        property_id: i32,
        warnings: &mut Vec<SyncWarning>,
    ) -> ResolvedNames {
        let property = match self.property_repository.get_by_id(property_id).await {
            Ok(property) => property,
            Err(e) => {
                warn!("property {property_id}: could not be resolved: {e}");
                warnings.push(SyncWarning::PropertyUnresolved {
                    property_id,
                    reason: e.to_string(),
                });
                return ResolvedNames {
                    customer_name: "不明".to_string(),
                    property_name: "不明".to_string(),
                    customer_id: None,
                };
            }
        };

        let (customer_name, customer_id) =
            match self.customer_repository.get_by_id(property.customer_id).await {
                Ok(customer) => (customer.name, Some(customer.id)),
                Err(e) => {
                    warn!("customer {}: could not be resolved: {e}", property.customer_id);
                    warnings.push(SyncWarning::PropertyUnresolved {
                        property_id,
                        reason: format!("customer {}: {e}", property.customer_id),
                    });
                    ("不明".to_string(), None)
                }
            };

        ResolvedNames {
            customer_name,
            property_name: property.name,
            customer_id,
        }
    }
}

fn parse_time_or_default(
    raw: Option<&String>,
    default: (u32, u32),
    to_warning: impl FnOnce(&str) -> SyncWarning,
    warnings: &mut Vec<SyncWarning>,
) -> NaiveTime {
    let fallback = || NaiveTime::from_hms_opt(default.0, default.1, 0).unwrap_or_default();
    match raw {
        Some(raw) if !raw.is_empty() => match NaiveTime::parse_from_str(raw, "%H:%M") {
            Ok(time) => time,
            Err(_) => {
                warnings.push(to_warning(raw));
                fallback()
            }
        },
        // 未入力は警告なしで既定値
        _ => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{NaiveDate, NaiveDateTime};
    use domain_crm::{
        mock::{MockCustomerRepo, MockPropertyRepo},
        model::entity::{Customer, Property},
    };
    use domain_report::model::entity::report::ReportStatus;
    use domain_schedule::mock::MockScheduleRepo;

    use super::*;

    fn report_42() -> Report {
        Report {
            id: 42,
            title: "作業完了書".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            work_address: Some("奈良県北葛城郡".to_string()),
            property_id: 7,
            ..Default::default()
        }
    }

    fn tanaka_property() -> Property {
        Property {
            id: 7,
            name: "田中様邸".to_string(),
            customer_id: 3,
            ..Default::default()
        }
    }

    fn tanaka_customer() -> Customer {
        Customer {
            id: 3,
            name: "田中".to_string(),
            ..Default::default()
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn datetime(date: (i32, u32, u32), time: (u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, 0)
            .unwrap()
    }

    /// 挿入されたスケジュールを記録する ScheduleRepo モック
    fn capturing_schedule_repo(inserted: Arc<Mutex<Vec<Schedule>>>) -> MockScheduleRepo {
        let mut repo = MockScheduleRepo::new();
        repo.expect_insert().returning(move |schedule| {
            inserted.lock().unwrap().push(schedule.clone());
            Ok(1)
        });
        repo
    }

    fn service_with(
        schedule_repo: MockScheduleRepo,
        property_repo: MockPropertyRepo,
        customer_repo: MockCustomerRepo,
    ) -> ScheduleSyncServiceImpl {
        ScheduleSyncServiceImpl::builder()
            .schedule_repository(Arc::new(schedule_repo))
            .property_repository(Arc::new(property_repo))
            .customer_repository(Arc::new(customer_repo))
            .build()
    }

    fn resolving_crm() -> (MockPropertyRepo, MockCustomerRepo) {
        let mut property_repo = MockPropertyRepo::new();
        property_repo.expect_get_by_id().returning(|_| Ok(tanaka_property()));
        let mut customer_repo = MockCustomerRepo::new();
        customer_repo.expect_get_by_id().returning(|_| Ok(tanaka_customer()));
        (property_repo, customer_repo)
    }

    #[tokio::test]
    async fn creates_one_pending_schedule_per_work_time() {
        let inserted = Arc::new(Mutex::new(vec![]));
        let (property_repo, customer_repo) = resolving_crm();
        let service = service_with(
            capturing_schedule_repo(inserted.clone()),
            property_repo,
            customer_repo,
        );

        let warnings = service
            .create_from_work_times(
                &report_42(),
                &strings(&["2025-06-01"]),
                &strings(&["09:00"]),
                &strings(&["12:00"]),
                7,
            )
            .await;

        assert!(warnings.is_empty());
        let inserted = inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        let schedule = &inserted[0];
        assert!(schedule.title.contains("田中"));
        assert!(schedule.title.contains("田中様邸"));
        assert_eq!(schedule.start_datetime, datetime((2025, 6, 1), (9, 0)));
        assert_eq!(schedule.end_datetime, datetime((2025, 6, 1), (12, 0)));
        assert_eq!(schedule.status, ScheduleStatus::Pending);
        assert_eq!(schedule.priority, SchedulePriority::Normal);
        assert_eq!(schedule.report_id, Some(42));
        assert_eq!(schedule.customer_id, Some(3));
        assert_eq!(schedule.property_id, Some(7));
    }

    #[tokio::test]
    async fn later_days_get_suffix_and_time_defaults() {
        let inserted = Arc::new(Mutex::new(vec![]));
        let (property_repo, customer_repo) = resolving_crm();
        let service = service_with(
            capturing_schedule_repo(inserted.clone()),
            property_repo,
            customer_repo,
        );

        let warnings = service
            .create_from_work_times(
                &report_42(),
                &strings(&["2025-06-01", "2025-06-02", "2025-06-03"]),
                &strings(&["09:00", "morning", ""]),
                &strings(&["12:00", "18:00"]),
                7,
            )
            .await;

        let inserted = inserted.lock().unwrap();
        assert_eq!(inserted.len(), 3);
        assert!(!inserted[0].title.contains("Day"));
        assert!(inserted[1].title.ends_with("(Day 2)"));
        assert!(inserted[2].title.ends_with("(Day 3)"));
        // 2 日目の開始時刻は解析不能なので 09:00 に落ちる
        assert_eq!(inserted[1].start_datetime, datetime((2025, 6, 2), (9, 0)));
        assert_eq!(inserted[1].end_datetime, datetime((2025, 6, 2), (18, 0)));
        // 3 日目は時刻未入力なので警告なしで既定の 09:00-17:00
        assert_eq!(inserted[2].start_datetime, datetime((2025, 6, 3), (9, 0)));
        assert_eq!(inserted[2].end_datetime, datetime((2025, 6, 3), (17, 0)));
        assert_eq!(
            warnings,
            vec![SyncWarning::InvalidStartTime {
                index: 1,
                value: "morning".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn malformed_date_rows_are_skipped_with_warning() {
        let inserted = Arc::new(Mutex::new(vec![]));
        let (property_repo, customer_repo) = resolving_crm();
        let service = service_with(
            capturing_schedule_repo(inserted.clone()),
            property_repo,
            customer_repo,
        );

        let warnings = service
            .create_from_work_times(
                &report_42(),
                &strings(&["06/01/2025", "2025-06-02"]),
                &strings(&["09:00", "10:00"]),
                &strings(&["12:00", "15:00"]),
                7,
            )
            .await;

        let inserted = inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        // 行番号基準の連番なので 2 行目は Day 2 のまま
        assert!(inserted[0].title.ends_with("(Day 2)"));
        assert_eq!(
            warnings,
            vec![SyncWarning::InvalidWorkDate {
                index: 0,
                value: "06/01/2025".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn unresolved_property_still_creates_schedules() {
        let inserted = Arc::new(Mutex::new(vec![]));
        let mut property_repo = MockPropertyRepo::new();
        property_repo
            .expect_get_by_id()
            .returning(|id| Err(anyhow::anyhow!("no property {id}")));
        let customer_repo = MockCustomerRepo::new();
        let service = service_with(
            capturing_schedule_repo(inserted.clone()),
            property_repo,
            customer_repo,
        );

        let warnings = service
            .create_from_work_times(
                &report_42(),
                &strings(&["2025-06-01"]),
                &strings(&["09:00"]),
                &strings(&["12:00"]),
                7,
            )
            .await;

        let inserted = inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert!(inserted[0].title.contains("不明"));
        assert_eq!(inserted[0].customer_id, None);
        assert!(matches!(
            warnings.as_slice(),
            [SyncWarning::PropertyUnresolved { property_id: 7, .. }]
        ));
    }

    #[tokio::test]
    async fn insert_failure_becomes_warning_not_error() {
        let mut schedule_repo = MockScheduleRepo::new();
        schedule_repo
            .expect_insert()
            .returning(|_| Err(anyhow::anyhow!("connection lost")));
        let (property_repo, customer_repo) = resolving_crm();
        let service = service_with(schedule_repo, property_repo, customer_repo);

        let warnings = service
            .create_from_work_times(
                &report_42(),
                &strings(&["2025-06-01"]),
                &strings(&["09:00"]),
                &strings(&["12:00"]),
                7,
            )
            .await;

        assert!(matches!(
            warnings.as_slice(),
            [SyncWarning::Persistence { .. }]
        ));
    }

    #[tokio::test]
    async fn rebuild_deletes_before_recreating() {
        let inserted = Arc::new(Mutex::new(vec![]));
        let mut schedule_repo = capturing_schedule_repo(inserted.clone());
        schedule_repo
            .expect_delete_by_report_id()
            .withf(|report_id| *report_id == 42)
            .times(1)
            .returning(|_| Ok(5));
        let (property_repo, customer_repo) = resolving_crm();
        let service = service_with(schedule_repo, property_repo, customer_repo);

        let warnings = service
            .rebuild_from_work_times(
                &report_42(),
                &strings(&["2025-06-10", "2025-06-11"]),
                &strings(&["08:00", "08:00"]),
                &strings(&["16:00", "16:00"]),
                7,
            )
            .await;

        // 何件あっても作り直し後は新しい作業時間の件数になる
        assert!(warnings.is_empty());
        assert_eq!(inserted.lock().unwrap().len(), 2);
    }

    fn linked_schedule(id: i32, status: ScheduleStatus) -> Schedule {
        Schedule {
            id,
            title: "作業: 田中 - 田中様邸".to_string(),
            status,
            report_id: Some(42),
            start_datetime: datetime((2025, 6, 1), (9, 0)),
            end_datetime: datetime((2025, 6, 1), (12, 0)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn status_sync_touches_only_changed_schedules() {
        let mut schedule_repo = MockScheduleRepo::new();
        schedule_repo.expect_get_by_report_id().returning(|_| {
            Ok(vec![
                linked_schedule(1, ScheduleStatus::Pending),
                linked_schedule(2, ScheduleStatus::Completed),
            ])
        });
        schedule_repo
            .expect_update()
            .withf(|schedule| schedule.id == 1 && schedule.status == ScheduleStatus::Completed)
            .times(1)
            .returning(|_| Ok(()));
        let service = service_with(
            schedule_repo,
            MockPropertyRepo::new(),
            MockCustomerRepo::new(),
        );

        let mut report = report_42();
        report.status = ReportStatus::Completed;
        let warnings = service.sync_status_with_report(&report).await;
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn status_sync_is_idempotent() {
        let mut schedule_repo = MockScheduleRepo::new();
        schedule_repo.expect_get_by_report_id().returning(|_| {
            Ok(vec![
                linked_schedule(1, ScheduleStatus::Completed),
                linked_schedule(2, ScheduleStatus::Completed),
            ])
        });
        // 2 回目の同期相当：全件一致なので update は呼ばれない
        schedule_repo.expect_update().times(0);
        let service = service_with(
            schedule_repo,
            MockPropertyRepo::new(),
            MockCustomerRepo::new(),
        );

        let mut report = report_42();
        report.status = ReportStatus::Completed;
        assert!(service.sync_status_with_report(&report).await.is_empty());
    }

    #[tokio::test]
    async fn draft_and_on_hold_map_to_pending() {
        for status in [ReportStatus::Draft, ReportStatus::OnHold] {
            let mut schedule_repo = MockScheduleRepo::new();
            schedule_repo
                .expect_get_by_report_id()
                .returning(|_| Ok(vec![linked_schedule(1, ScheduleStatus::Completed)]));
            schedule_repo
                .expect_update()
                .withf(|schedule| schedule.status == ScheduleStatus::Pending)
                .times(1)
                .returning(|_| Ok(()));
            let service = service_with(
                schedule_repo,
                MockPropertyRepo::new(),
                MockCustomerRepo::new(),
            );

            let mut report = report_42();
            report.status = status;
            service.sync_status_with_report(&report).await;
        }
    }

    #[tokio::test]
    async fn cancel_and_detach_keeps_schedules_as_history() {
        let mut schedule_repo = MockScheduleRepo::new();
        schedule_repo.expect_get_by_report_id().returning(|_| {
            Ok(vec![
                linked_schedule(1, ScheduleStatus::Pending),
                linked_schedule(2, ScheduleStatus::Completed),
            ])
        });
        schedule_repo
            .expect_update()
            .withf(|schedule| {
                schedule.status == ScheduleStatus::Cancelled && schedule.report_id.is_none()
            })
            .times(2)
            .returning(|_| Ok(()));
        // delete は一度も呼ばれない（履歴として残す）
        schedule_repo.expect_delete_by_id().times(0);
        schedule_repo.expect_delete_by_report_id().times(0);
        let service = service_with(
            schedule_repo,
            MockPropertyRepo::new(),
            MockCustomerRepo::new(),
        );

        assert!(service.cancel_and_detach(42).await.is_empty());
    }
}
