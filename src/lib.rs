//! Hospital feed client library.
//!
//! Fetches hospital records from the backend API and reshapes them into the
//! nested record format consumed by the frontend.

pub mod config;
pub mod fetcher;
pub mod hospitals;
pub mod observability;

pub use config::schema::FeedConfig;
pub use fetcher::{FetchError, HospitalFetcher};
pub use hospitals::Hospital;
