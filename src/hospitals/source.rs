//! Backend payload types.
//!
//! Field names follow the backend's JSON. Required fields are the ones the
//! mapping cannot do without (`id`, `beds`, `waitTime`, `specialties`); their
//! absence fails decoding of the whole response. Unknown fields such as
//! `availableBeds` are ignored.

use std::fmt;
use serde::{Deserialize, Serialize};

/// Backend identifier. Numeric in practice; text is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceId::Number(n) => write!(f, "{}", n),
            SourceId::Text(s) => f.write_str(s),
        }
    }
}

/// Available bed counts per department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBeds {
    pub er: u32,
    pub icu: u32,
    pub pediatric: u32,
    pub maternity: u32,
}

/// One hospital as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceHospital {
    pub id: SourceId,
    pub name: Option<String>,
    /// Hospital category; absent for most records.
    pub hospital_type: Option<String>,
    /// Street line.
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phone: Option<String>,
    pub beds: SourceBeds,
    /// ER wait in minutes.
    #[serde(rename = "waitTime")]
    pub wait_time: u32,
    pub specialties: Vec<String>,
    pub emergency_services: Option<bool>,
    /// Miles from the query point; only set by the nearby route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

/// Envelope of the list routes (`/api/hospitals`, `/nearby`, `/filter`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalList {
    pub hospitals: Vec<SourceHospital>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Aggregate figures from `/api/stats`, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_hospitals: u64,
    pub total_available_beds: u64,
    /// Mean ER wait in minutes, rounded to one decimal by the backend.
    pub average_wait_time: f64,
    /// Number of hospitals offering emergency services.
    pub emergency_services: u64,
}
