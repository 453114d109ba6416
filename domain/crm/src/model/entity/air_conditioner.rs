use chrono::NaiveDateTime;
use database_model::system::air_conditioner;
use serde::{Deserialize, Serialize};

/// # エアコン
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AirConditioner {
    pub id: i32,
    pub property_id: i32,
    /// 種別（壁掛け、天井埋込み等）
    pub ac_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model_number: Option<String>,
    pub quantity: i32,
    /// 設置場所
    pub location: Option<String>,
    pub unit_price: Option<i32>,
    pub total_amount: Option<i32>,
    pub cleaning_type: Option<String>,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl AirConditioner {
    /// メーカー・品番・設置場所をまとめた表示用ラベル
    pub fn summary(&self) -> String {
        let mut label = format!(
            "{} {}",
            self.manufacturer.as_deref().unwrap_or(""),
            self.model_number.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            label.push_str(&format!("（{location}）"));
        }
        label
    }
}

impl From<air_conditioner::Model> for AirConditioner {
    fn from(model: air_conditioner::Model) -> Self {
        Self {
            id: model.id,
            property_id: model.property_id,
            ac_type: model.ac_type,
            manufacturer: model.manufacturer,
            model_number: model.model_number,
            quantity: model.quantity,
            location: model.location,
            unit_price: model.unit_price,
            total_amount: model.total_amount,
            cleaning_type: model.cleaning_type,
            note: model.note,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<AirConditioner> for air_conditioner::Model {
    fn from(entity: AirConditioner) -> Self {
        Self {
            id: entity.id,
            property_id: entity.property_id,
            ac_type: entity.ac_type,
            manufacturer: entity.manufacturer,
            model_number: entity.model_number,
            quantity: entity.quantity,
            location: entity.location,
            unit_price: entity.unit_price,
            total_amount: entity.total_amount,
            cleaning_type: entity.cleaning_type,
            note: entity.note,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_includes_location_when_present() {
        let ac = AirConditioner {
            manufacturer: Some("ダイキン".to_string()),
            model_number: Some("AN22YRS".to_string()),
            location: Some("リビング".to_string()),
            ..Default::default()
        };
        assert_eq!(ac.summary(), "ダイキン AN22YRS（リビング）");
    }

    #[test]
    fn summary_omits_missing_fields() {
        let ac = AirConditioner {
            manufacturer: Some("三菱".to_string()),
            ..Default::default()
        };
        assert_eq!(ac.summary(), "三菱");
    }
}
