//! Query parameters for the nearby and filter routes.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default search radius of the nearby route, in miles.
pub const DEFAULT_RADIUS_MILES: u32 = 25;

/// Department used by the filter route. `All` disables the bed filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedType {
    All,
    Er,
    Icu,
    Pediatric,
    Maternity,
}

impl BedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BedType::All => "all",
            BedType::Er => "er",
            BedType::Icu => "icu",
            BedType::Pediatric => "pediatric",
            BedType::Maternity => "maternity",
        }
    }
}

impl fmt::Display for BedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bed type '{0}' (expected all, er, icu, pediatric, or maternity)")]
pub struct UnknownBedType(pub String);

impl FromStr for BedType {
    type Err = UnknownBedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(BedType::All),
            "er" => Ok(BedType::Er),
            "icu" => Ok(BedType::Icu),
            "pediatric" => Ok(BedType::Pediatric),
            "maternity" => Ok(BedType::Maternity),
            _ => Err(UnknownBedType(s.to_string())),
        }
    }
}

/// Location search around a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius_miles: u32,
}

impl NearbyQuery {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng, radius_miles: DEFAULT_RADIUS_MILES }
    }

    pub fn with_radius(mut self, radius_miles: u32) -> Self {
        self.radius_miles = radius_miles;
        self
    }

    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("lat", self.lat.to_string()),
            ("lng", self.lng.to_string()),
            ("radius", self.radius_miles.to_string()),
        ]
    }
}

/// Criteria for the filter route. Unset criteria are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HospitalFilter {
    /// Only hospitals with beds free in this department.
    pub bed_type: Option<BedType>,
    /// Only hospitals with any bed free.
    pub available: Option<bool>,
    /// Only hospitals offering emergency services.
    pub emergency: Option<bool>,
}

impl HospitalFilter {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(bed_type) = self.bed_type {
            pairs.push(("bedType", bed_type.as_str().to_string()));
        }
        if let Some(available) = self.available {
            pairs.push(("available", available.to_string()));
        }
        if let Some(emergency) = self.emergency {
            pairs.push(("emergency", emergency.to_string()));
        }
        pairs
    }
}
