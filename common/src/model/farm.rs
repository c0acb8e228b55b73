use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A farm plot and what is grown on it.
///
/// `farmer_id` is a plain foreign-key value: nothing checks that the farmer it
/// names exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farm {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub farmer_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub crop_type: Option<String>,
    /// Hectares.
    #[serde(default)]
    pub area: Option<i32>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub irrigation_type: Option<String>,
    /// Serialized as `YYYY-MM-DD`.
    #[serde(default)]
    pub last_planted: Option<NaiveDate>,
    #[serde(default)]
    pub expected_yield: Option<f64>,
}

impl Farm {
    /// Overwrites every mutable field with the values from `incoming`,
    /// including `None`. The id is left alone.
    pub fn replace_with(&mut self, incoming: Farm) {
        let id = self.id;
        *self = Farm { id, ..incoming };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_with_clears_fields_missing_from_payload() {
        let mut stored = Farm {
            id: Some(7),
            farmer_id: Some(1),
            name: Some("F1".to_string()),
            crop_type: Some("Rice".to_string()),
            area: Some(5),
            soil_type: Some("Clay".to_string()),
            ..Farm::default()
        };
        stored.replace_with(Farm {
            id: Some(99),
            farmer_id: Some(2),
            name: Some("F2".to_string()),
            ..Farm::default()
        });

        assert_eq!(stored.id, Some(7));
        assert_eq!(stored.farmer_id, Some(2));
        assert_eq!(stored.name.as_deref(), Some("F2"));
        assert_eq!(stored.crop_type, None);
        assert_eq!(stored.area, None);
        assert_eq!(stored.soil_type, None);
    }

    #[test]
    fn json_uses_camel_case_and_iso_dates() {
        let farm: Farm = serde_json::from_str(
            r#"{"farmerId":1,"cropType":"Rice","lastPlanted":"2024-06-15","expectedYield":3.5}"#,
        )
        .unwrap();
        assert_eq!(farm.farmer_id, Some(1));
        assert_eq!(farm.crop_type.as_deref(), Some("Rice"));
        assert_eq!(farm.last_planted, NaiveDate::from_ymd_opt(2024, 6, 15));

        let value = serde_json::to_value(&farm).unwrap();
        assert_eq!(value["lastPlanted"], "2024-06-15");
        assert_eq!(value["expectedYield"], 3.5);
        assert!(value["irrigationType"].is_null());
    }
}
