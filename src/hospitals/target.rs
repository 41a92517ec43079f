//! Frontend hospital record.
//!
//! Serialized in camelCase. Optional values that were absent in the backend
//! record are omitted from the output rather than defaulted.

use serde::{Deserialize, Serialize};

/// A hospital as consumed by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub hospital_type: String,
    pub address: Address,
    pub contact: Contact,
    pub beds: Beds,
    pub wait_times: WaitTimes,
    pub features: Features,
    pub specialties: Vec<String>,
    pub insurance: Vec<String>,
    /// RFC 3339 UTC timestamp of when the record was mapped.
    pub last_updated: String,
    /// Miles from the query point, for nearby results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Emergency line; the backend has no separate number so this mirrors `phone`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency: Option<String>,
    pub website: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedCount {
    pub available: u32,
    /// Placeholder capacity derived from `available`, not a real figure.
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beds {
    pub er: BedCount,
    pub icu: BedCount,
    pub pediatric: BedCount,
    pub maternity: BedCount,
}

/// Wait times in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitTimes {
    pub er: u32,
    pub pediatric: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraumaLevel {
    #[serde(rename = "Level I Trauma Center")]
    LevelI,
    #[serde(rename = "Not a Trauma Center")]
    NotDesignated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub trauma_level: TraumaLevel,
    pub teaching_hospital: bool,
    #[serde(
        rename = "has24EmergencyServices",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub has_24_emergency_services: Option<bool>,
    pub has_helicopter_pad: bool,
    pub has_pharmacy: bool,
    pub has_surgical_suites: bool,
    pub has_laboratory: bool,
    pub has_imaging: bool,
    pub has_free_parking: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Hospital {
        let count = BedCount { available: 1, total: 6 };
        Hospital {
            id: "3".into(),
            name: Some("St. Luke's".into()),
            hospital_type: "General Acute Care Hospital".into(),
            address: Address {
                street: Some("190 E Bannock St".into()),
                city: Some("Boise".into()),
                state: Some("ID".into()),
                zip: None,
                coordinates: Coordinates { lat: Some(43.61), lng: None },
            },
            contact: Contact {
                phone: Some("208-381-2222".into()),
                emergency: Some("208-381-2222".into()),
                website: String::new(),
            },
            beds: Beds { er: count, icu: count, pediatric: count, maternity: count },
            wait_times: WaitTimes { er: 10, pediatric: 15 },
            features: Features {
                trauma_level: TraumaLevel::NotDesignated,
                teaching_hospital: false,
                has_24_emergency_services: Some(true),
                has_helicopter_pad: false,
                has_pharmacy: true,
                has_surgical_suites: true,
                has_laboratory: true,
                has_imaging: true,
                has_free_parking: true,
            },
            specialties: vec!["Oncology".into()],
            insurance: vec!["Medicare".into(), "Medicaid".into()],
            last_updated: "2026-01-01T00:00:00.000Z".into(),
            distance_miles: None,
        }
    }

    #[test]
    fn test_frontend_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "General Acute Care Hospital");
        assert_eq!(value["waitTimes"], json!({"er": 10, "pediatric": 15}));
        assert_eq!(value["lastUpdated"], "2026-01-01T00:00:00.000Z");
        assert_eq!(value["features"]["traumaLevel"], "Not a Trauma Center");
        assert_eq!(value["features"]["has24EmergencyServices"], true);
        assert_eq!(value["features"]["hasFreeParking"], true);
        assert_eq!(value["contact"]["website"], "");
    }

    #[test]
    fn test_absent_values_are_omitted() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value["address"].get("zip").is_none());
        assert!(value["address"]["coordinates"].get("lng").is_none());
        assert!(value.get("distanceMiles").is_none());
    }

    #[test]
    fn test_reads_back_frontend_json() {
        let hospital = sample();
        let text = serde_json::to_string(&hospital).unwrap();
        assert_eq!(serde_json::from_str::<Hospital>(&text).unwrap(), hospital);
    }

    #[test]
    fn test_trauma_level_labels() {
        assert_eq!(
            serde_json::to_value(TraumaLevel::LevelI).unwrap(),
            "Level I Trauma Center"
        );
        assert_eq!(
            serde_json::to_value(TraumaLevel::NotDesignated).unwrap(),
            "Not a Trauma Center"
        );
    }
}
