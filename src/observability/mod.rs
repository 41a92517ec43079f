//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! fetcher produces:
//!     → logging.rs (structured log events, one error entry per swallowed failure)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stderr
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Request ID (x-request-id) appears in every backend call's log events
//! - The library never installs a subscriber or recorder; the binary does

pub mod logging;
pub mod metrics;
