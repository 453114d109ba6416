use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::NaiveDateTime;
use database_model::system::photo;
use serde::{Deserialize, Serialize};

/// # 施工前後写真
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Photo {
    pub id: i32,
    pub photo_type: PhotoType,
    pub filename: String,
    pub original_filename: Option<String>,
    pub caption: Option<String>,
    /// 撮影場所（部屋名等）
    pub room_name: Option<String>,
    pub photo_set_id: Option<String>,
    pub aircon_model: Option<String>,
    pub note: Option<String>,
    /// アップロードルートからの相対パス。配信と PDF 埋め込みの両方で使う
    pub filepath: Option<String>,
    pub report_id: i32,
    pub air_conditioner_id: Option<i32>,
    pub work_item_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// 施工前 / 施工後
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PhotoType {
    #[default]
    Before,
    After,
}

impl PhotoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }

    /// PDF 上の日本語見出し
    pub fn label_ja(&self) -> &'static str {
        match self {
            Self::Before => "施工前",
            Self::After => "施工後",
        }
    }
}

impl fmt::Display for PhotoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhotoType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "before" => Self::Before,
            "after" => Self::After,
            other => return Err(anyhow!("Wrong photo type: {other}")),
        })
    }
}

impl TryFrom<photo::Model> for Photo {
    type Error = anyhow::Error;

    fn try_from(model: photo::Model) -> Result<Self, Self::Error> {
        let photo::Model {
            id,
            photo_type,
            filename,
            original_filename,
            caption,
            room_name,
            photo_set_id,
            aircon_model,
            note,
            filepath,
            report_id,
            air_conditioner_id,
            work_item_id,
            created_at,
            updated_at,
        } = model;

        Ok(Self {
            id,
            photo_type: photo_type.parse()?,
            filename,
            original_filename,
            caption,
            room_name,
            photo_set_id,
            aircon_model,
            note,
            filepath,
            report_id,
            air_conditioner_id,
            work_item_id,
            created_at,
            updated_at,
        })
    }
}

impl From<Photo> for photo::Model {
    fn from(entity: Photo) -> Self {
        Self {
            id: entity.id,
            photo_type: entity.photo_type.as_str().to_string(),
            filename: entity.filename,
            original_filename: entity.original_filename,
            caption: entity.caption,
            room_name: entity.room_name,
            photo_set_id: entity.photo_set_id,
            aircon_model: entity.aircon_model,
            note: entity.note,
            filepath: entity.filepath,
            report_id: entity.report_id,
            air_conditioner_id: entity.air_conditioner_id,
            work_item_id: entity.work_item_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
