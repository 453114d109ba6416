use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{NaiveDate, NaiveDateTime};
use database_model::system::report;
use serde::{Deserialize, Serialize};

/// # 報告書
///
/// 1回の作業（物件訪問）に対する作業完了報告。作業時間・作業内容・
/// 施工前後写真を所有し、報告書削除時にそれらも削除される。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Report {
    pub id: i32,
    /// タイトル（デフォルト：作業完了書）
    pub title: String,
    /// 作業日
    pub date: NaiveDate,
    pub work_address: Option<String>,
    /// 作業者名
    pub technician: Option<String>,
    pub status: ReportStatus,
    /// 旧フィールド。新規報告書では WorkDetail を使う
    pub work_description: Option<String>,
    pub note: Option<String>,
    pub property_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// 報告書ステータス
///
/// 運用上使われるのは pending / completed のみだが、列挙としては
/// 全状態を保持する。永続化はテキスト列。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// 下書き
    Draft,
    /// 作業中
    #[default]
    Pending,
    /// 完了
    Completed,
    /// キャンセル
    Cancelled,
    /// 保留
    OnHold,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::OnHold => "on_hold",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            "on_hold" => Self::OnHold,
            other => return Err(anyhow!("Wrong report status: {other}")),
        })
    }
}

impl TryFrom<report::Model> for Report {
    type Error = anyhow::Error;

    fn try_from(model: report::Model) -> Result<Self, Self::Error> {
        let report::Model {
            id,
            title,
            date,
            work_address,
            technician,
            status,
            work_description,
            note,
            property_id,
            created_at,
            updated_at,
        } = model;

        Ok(Self {
            id,
            title,
            date,
            work_address,
            technician,
            status: status.parse()?,
            work_description,
            note,
            property_id,
            created_at,
            updated_at,
        })
    }
}

impl From<Report> for report::Model {
    fn from(entity: Report) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            date: entity.date,
            work_address: entity.work_address,
            technician: entity.technician,
            status: entity.status.as_str().to_string(),
            work_description: entity.work_description,
            note: entity.note,
            property_id: entity.property_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            ReportStatus::Draft,
            ReportStatus::Pending,
            ReportStatus::Completed,
            ReportStatus::Cancelled,
            ReportStatus::OnHold,
        ] {
            assert_eq!(status.as_str().parse::<ReportStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("archived".parse::<ReportStatus>().is_err());
    }
}
