use chrono::{NaiveDate, NaiveDateTime};
use domain_crm::model::entity::{AirConditioner, Customer, Property, WorkItem};
use serde::{Deserialize, Serialize};

use crate::model::entity::photo::PhotoType;
use crate::model::vo::sanitize_filename;

/// 写真の保存先（顧客＞物件＞エアコン＞作業項目＞作業日）を決める材料
///
/// `relative_dir` が返す相対パスが Photo 行に保存され、配信と
/// PDF 埋め込みの双方で解決に使われる。
#[derive(Debug, Clone, Default)]
pub struct PhotoPathSpec {
    pub photo_type: PhotoType,
    pub customer: Option<Customer>,
    pub property: Option<Property>,
    pub air_conditioner: Option<AirConditioner>,
    pub work_item: Option<WorkItem>,
    pub work_date: Option<NaiveDate>,
}

/// 保存済み写真のファイル名と相対パス
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoredPhoto {
    pub filename: String,
    pub relative_path: String,
}

impl PhotoPathSpec {
    /// アップロードルートからの相対ディレクトリ
    pub fn relative_dir(&self) -> String {
        let customer_folder = match &self.customer {
            Some(customer) => sanitize_filename(&customer.name),
            None => "unknown_customer".to_string(),
        };

        let property_folder = match &self.property {
            Some(property) => {
                // 同名物件を区別するため物件 id を付与する
                let mut folder = sanitize_filename(&format!("{}_{}", property.name, property.id));
                if let Some(address) = property.address.as_deref().filter(|a| !a.is_empty()) {
                    let address_part: String = address.chars().take(30).collect();
                    folder.push('_');
                    folder.push_str(&sanitize_filename(&address_part));
                }
                folder
            }
            None => "unknown_property".to_string(),
        };

        let air_conditioner_folder = match &self.air_conditioner {
            Some(ac) => {
                let mut parts = vec![];
                if let Some(manufacturer) = ac.manufacturer.as_deref().filter(|s| !s.is_empty()) {
                    parts.push(manufacturer.to_string());
                }
                if let Some(model_number) = ac.model_number.as_deref().filter(|s| !s.is_empty()) {
                    parts.push(model_number.to_string());
                }
                if let Some(location) = ac.location.as_deref().filter(|s| !s.is_empty()) {
                    parts.push(format!("({location})"));
                }
                if parts.is_empty() {
                    format!("aircon_{}", ac.id)
                } else {
                    sanitize_filename(&parts.join("_"))
                }
            }
            None => "unknown_air_conditioner".to_string(),
        };

        let work_item_folder = match &self.work_item {
            Some(item) => sanitize_filename(&item.name),
            None => "unknown_work_item".to_string(),
        };

        let work_date_folder = match &self.work_date {
            Some(date) => date.format("%Y%m%d").to_string(),
            None => "unknown_date".to_string(),
        };

        format!(
            "{}/{}/{}/{}/{}/{}",
            self.photo_type, customer_folder, property_folder, air_conditioner_folder,
            work_item_folder, work_date_folder
        )
    }

    /// タイムスタンプを付与した保存ファイル名
    pub fn storage_filename(original_filename: &str, now: NaiveDateTime) -> String {
        format!(
            "{}_{}",
            now.format("%Y%m%d%H%M%S"),
            sanitize_filename(original_filename)
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn relative_dir_builds_full_hierarchy() {
        let spec = PhotoPathSpec {
            photo_type: PhotoType::Before,
            customer: Some(Customer {
                name: "田中".to_string(),
                ..Default::default()
            }),
            property: Some(Property {
                id: 7,
                name: "田中様邸".to_string(),
                address: Some("奈良県北葛城郡".to_string()),
                ..Default::default()
            }),
            air_conditioner: Some(AirConditioner {
                manufacturer: Some("ダイキン".to_string()),
                model_number: Some("AN22YRS".to_string()),
                location: Some("リビング".to_string()),
                ..Default::default()
            }),
            work_item: Some(WorkItem {
                name: "エアコンクリーニング".to_string(),
                ..Default::default()
            }),
            work_date: Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
        };

        assert_eq!(
            spec.relative_dir(),
            "before/田中/田中様邸_7_奈良県北葛城郡/ダイキン_AN22YRS_(リビング)/エアコンクリーニング/20250601"
        );
    }

    #[test]
    fn relative_dir_falls_back_to_unknown_segments() {
        let spec = PhotoPathSpec {
            photo_type: PhotoType::After,
            ..Default::default()
        };
        assert_eq!(
            spec.relative_dir(),
            "after/unknown_customer/unknown_property/unknown_air_conditioner/unknown_work_item/unknown_date"
        );
    }

    #[test]
    fn storage_filename_prefixes_timestamp() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 15)
            .unwrap();
        assert_eq!(
            PhotoPathSpec::storage_filename("before:1.jpg", now),
            "20250601093015_before1.jpg"
        );
    }
}
