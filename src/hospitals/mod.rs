//! Hospital record model.
//!
//! # Data Flow
//! ```text
//! backend JSON
//!     → source.rs (SourceHospital, explicit schema)
//!     → mapping.rs (one target per source, order preserved)
//!     → target.rs (Hospital, frontend shape)
//! ```

pub mod mapping;
pub mod source;
pub mod target;

pub use mapping::{map_hospital, map_hospitals};
pub use source::{HospitalList, SourceBeds, SourceHospital, SourceId, StatsSummary};
pub use target::{
    Address, BedCount, Beds, Contact, Coordinates, Features, Hospital, TraumaLevel, WaitTimes,
};
