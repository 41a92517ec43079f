//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FeedConfig
//!     → CLI / env overrides (base URL), validated again
//!     → HospitalFetcher::new
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file (or no file) is valid
//! - Validation separates syntactic (serde) from semantic checks
//! - The backend base URL is a value, never a compiled-in constant

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{BackendConfig, FeedConfig, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
