//! Backend fetch subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → client.rs (build URL, GET with x-request-id)
//!     → decode into source schema (status consulted only on decode failure)
//!     → hospitals::mapping
//!     → Vec<Hospital>
//!
//! On failure:
//!     try_* operations → Err(FetchError)
//!     plain operations → error log + empty value
//! ```
//!
//! # Design Decisions
//! - No retries, caching, or pagination; one request per call
//! - Timeouts only when configured
//! - A response fails as a whole; there is no per-record error handling

pub mod client;
pub mod error;
pub mod query;

pub use client::{HospitalFetcher, X_REQUEST_ID};
pub use error::{FetchError, FetchResult};
pub use query::{BedType, HospitalFilter, NearbyQuery, UnknownBedType, DEFAULT_RADIUS_MILES};
