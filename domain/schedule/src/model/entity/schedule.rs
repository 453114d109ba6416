use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{NaiveDate, NaiveDateTime};
use database_model::system::schedule;
use domain_report::model::entity::report::ReportStatus;
use serde::{Deserialize, Serialize};

use crate::model::vo::NotificationKind;

/// リマインダー通知の許容ずれ（秒）
const REMINDER_TOLERANCE_SECS: i64 = 60;
/// 開始通知の許容ずれ（秒）
const START_TOLERANCE_SECS: i64 = 300;

/// # スケジュール
///
/// カレンダー上の 1 予定。報告書から自動生成されたものは `report_id`
/// を持ち、報告書削除後もキャンセル済みの履歴として残り続ける。
/// Google カレンダー連携と繰り返し設定は未使用のプレースホルダ。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Schedule {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub all_day: bool,
    pub status: ScheduleStatus,
    pub priority: SchedulePriority,
    pub customer_id: Option<i32>,
    pub property_id: Option<i32>,
    pub report_id: Option<i32>,
    pub google_calendar_id: Option<String>,
    pub google_calendar_sync: bool,
    pub recurrence_type: Option<String>,
    pub recurrence_end: Option<NaiveDate>,
    pub notification_enabled: bool,
    /// 何分前に通知するか
    pub notification_minutes: i32,
    pub created_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Schedule {
    /// 現在時刻に対して発火すべき通知種別を返す。
    /// リマインダーと開始通知は同じ走査で独立に成立しうる。
    pub fn due_notifications(&self, now: NaiveDateTime) -> Vec<NotificationKind> {
        let mut due = vec![];

        let notification_time =
            self.start_datetime - chrono::Duration::minutes(self.notification_minutes as i64);
        if (now - notification_time).num_seconds().abs() <= REMINDER_TOLERANCE_SECS {
            due.push(NotificationKind::Reminder);
        }

        if (now - self.start_datetime).num_seconds().abs() <= START_TOLERANCE_SECS {
            due.push(NotificationKind::Start);
        }

        due
    }
}

/// スケジュールステータス
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// 未完了
    #[default]
    Pending,
    /// 完了
    Completed,
    /// キャンセル
    Cancelled,
}

impl ScheduleStatus {
    /// 報告書ステータスから対応するスケジュールステータスを引く。
    /// 下書き・作業中・保留はいずれも未完了扱い。
    pub fn for_report(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Draft | ReportStatus::Pending | ReportStatus::OnHold => Self::Pending,
            ReportStatus::Completed => Self::Completed,
            ReportStatus::Cancelled => Self::Cancelled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// 日本語表示
    pub fn display_ja(&self) -> &'static str {
        match self {
            Self::Pending => "未完了",
            Self::Completed => "完了",
            Self::Cancelled => "キャンセル",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            other => return Err(anyhow!("Wrong schedule status: {other}")),
        })
    }
}

/// 優先度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SchedulePriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl SchedulePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn display_ja(&self) -> &'static str {
        match self {
            Self::Low => "低",
            Self::Normal => "標準",
            Self::High => "高",
            Self::Urgent => "緊急",
        }
    }
}

impl fmt::Display for SchedulePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchedulePriority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "low" => Self::Low,
            "normal" => Self::Normal,
            "high" => Self::High,
            "urgent" => Self::Urgent,
            other => return Err(anyhow!("Wrong schedule priority: {other}")),
        })
    }
}

impl TryFrom<schedule::Model> for Schedule {
    type Error = anyhow::Error;

    fn try_from(model: schedule::Model) -> Result<Self, Self::Error> {
        let schedule::Model {
            id,
            title,
            description,
            start_datetime,
            end_datetime,
            all_day,
            status,
            priority,
            customer_id,
            property_id,
            report_id,
            google_calendar_id,
            google_calendar_sync,
            recurrence_type,
            recurrence_end,
            notification_enabled,
            notification_minutes,
            created_by,
            created_at,
            updated_at,
        } = model;

        Ok(Self {
            id,
            title,
            description,
            start_datetime,
            end_datetime,
            all_day,
            status: status.parse()?,
            priority: priority.parse()?,
            customer_id,
            property_id,
            report_id,
            google_calendar_id,
            google_calendar_sync,
            recurrence_type,
            recurrence_end,
            notification_enabled,
            notification_minutes,
            created_by,
            created_at,
            updated_at,
        })
    }
}

impl From<Schedule> for schedule::Model {
    fn from(entity: Schedule) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_datetime: entity.start_datetime,
            end_datetime: entity.end_datetime,
            all_day: entity.all_day,
            status: entity.status.as_str().to_string(),
            priority: entity.priority.as_str().to_string(),
            customer_id: entity.customer_id,
            property_id: entity.property_id,
            report_id: entity.report_id,
            google_calendar_id: entity.google_calendar_id,
            google_calendar_sync: entity.google_calendar_sync,
            recurrence_type: entity.recurrence_type,
            recurrence_end: entity.recurrence_end,
            notification_enabled: entity.notification_enabled,
            notification_minutes: entity.notification_minutes,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn schedule_starting_at(start: NaiveDateTime) -> Schedule {
        Schedule {
            start_datetime: start,
            end_datetime: start + chrono::Duration::hours(3),
            notification_minutes: 30,
            notification_enabled: true,
            ..Default::default()
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn report_status_mapping() {
        assert_eq!(
            ScheduleStatus::for_report(ReportStatus::Draft),
            ScheduleStatus::Pending
        );
        assert_eq!(
            ScheduleStatus::for_report(ReportStatus::Pending),
            ScheduleStatus::Pending
        );
        assert_eq!(
            ScheduleStatus::for_report(ReportStatus::OnHold),
            ScheduleStatus::Pending
        );
        assert_eq!(
            ScheduleStatus::for_report(ReportStatus::Completed),
            ScheduleStatus::Completed
        );
        assert_eq!(
            ScheduleStatus::for_report(ReportStatus::Cancelled),
            ScheduleStatus::Cancelled
        );
    }

    #[test]
    fn reminder_fires_within_one_minute_of_notification_time() {
        let schedule = schedule_starting_at(at(10, 0, 0));
        // 通知時刻は 09:30
        assert_eq!(
            schedule.due_notifications(at(9, 30, 30)),
            vec![NotificationKind::Reminder]
        );
        assert!(schedule.due_notifications(at(9, 27, 0)).is_empty());
    }

    #[test]
    fn start_fires_within_five_minutes_of_start() {
        let schedule = schedule_starting_at(at(10, 0, 0));
        assert_eq!(
            schedule.due_notifications(at(10, 4, 0)),
            vec![NotificationKind::Start]
        );
        assert!(schedule.due_notifications(at(10, 6, 0)).is_empty());
    }

    #[test]
    fn reminder_and_start_can_fire_in_the_same_tick() {
        // 通知 5 分前設定だと開始 5 分前のひと目盛りで両方成立する
        let mut schedule = schedule_starting_at(at(10, 0, 0));
        schedule.notification_minutes = 5;
        assert_eq!(
            schedule.due_notifications(at(9, 55, 30)),
            vec![NotificationKind::Reminder, NotificationKind::Start]
        );
    }
}
