//! Backend record → frontend record.
//!
//! The mapping is pure apart from the timestamp, which callers pass in so a
//! whole batch shares one `lastUpdated` value.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::hospitals::source::{SourceBeds, SourceHospital};
use crate::hospitals::target::{
    Address, BedCount, Beds, Contact, Coordinates, Features, Hospital, TraumaLevel, WaitTimes,
};

/// Category used when the backend does not supply one.
pub const DEFAULT_HOSPITAL_TYPE: &str = "General Acute Care Hospital";

/// Specialty tag that marks a Level I trauma center.
pub const TRAUMA_SPECIALTY: &str = "Trauma";

/// Placeholder capacity offsets added to available counts.
pub const ER_CAPACITY_OFFSET: u32 = 10;
pub const WARD_CAPACITY_OFFSET: u32 = 5;

/// Pediatric wait is reported as the ER wait plus this many minutes.
pub const PEDIATRIC_WAIT_OFFSET: u32 = 5;

/// Plans listed for every hospital until the backend reports real coverage.
pub const ACCEPTED_INSURANCE: [&str; 2] = ["Medicare", "Medicaid"];

/// Format a mapping time the way the frontend expects (`...T..:..:..sssZ`).
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Map one backend record.
pub fn map_hospital(source: SourceHospital, updated_at: DateTime<Utc>) -> Hospital {
    let trauma_level = if source.specialties.iter().any(|s| s == TRAUMA_SPECIALTY) {
        TraumaLevel::LevelI
    } else {
        TraumaLevel::NotDesignated
    };

    Hospital {
        id: source.id.to_string(),
        name: source.name,
        hospital_type: source
            .hospital_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_HOSPITAL_TYPE.to_string()),
        address: Address {
            street: source.address,
            city: source.city,
            state: source.state,
            zip: source.zip,
            coordinates: Coordinates {
                lat: source.lat,
                lng: source.lng,
            },
        },
        contact: Contact {
            emergency: source.phone.clone(),
            phone: source.phone,
            website: String::new(),
        },
        beds: map_beds(source.beds),
        wait_times: WaitTimes {
            er: source.wait_time,
            pediatric: source.wait_time.saturating_add(PEDIATRIC_WAIT_OFFSET),
        },
        features: Features {
            trauma_level,
            teaching_hospital: false,
            has_24_emergency_services: source.emergency_services,
            has_helicopter_pad: false,
            has_pharmacy: true,
            has_surgical_suites: true,
            has_laboratory: true,
            has_imaging: true,
            has_free_parking: true,
        },
        specialties: source.specialties,
        insurance: ACCEPTED_INSURANCE.iter().map(|s| s.to_string()).collect(),
        last_updated: format_timestamp(updated_at),
        distance_miles: source.distance,
    }
}

/// Map a batch, preserving order. Output length always equals input length.
pub fn map_hospitals(sources: Vec<SourceHospital>, updated_at: DateTime<Utc>) -> Vec<Hospital> {
    sources
        .into_iter()
        .map(|source| map_hospital(source, updated_at))
        .collect()
}

fn map_beds(beds: SourceBeds) -> Beds {
    let count = |available: u32, offset: u32| BedCount {
        available,
        total: available.saturating_add(offset),
    };

    Beds {
        er: count(beds.er, ER_CAPACITY_OFFSET),
        icu: count(beds.icu, WARD_CAPACITY_OFFSET),
        pediatric: count(beds.pediatric, WARD_CAPACITY_OFFSET),
        maternity: count(beds.maternity, WARD_CAPACITY_OFFSET),
    }
}
