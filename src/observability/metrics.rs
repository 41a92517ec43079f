//! Metrics collection and exposition.
//!
//! # Metrics
//! - `hospital_feed_requests_total` (counter): backend calls by endpoint, outcome
//! - `hospital_feed_request_duration_seconds` (histogram): backend call latency
//! - `hospital_feed_records_mapped` (gauge): records in the last mapped batch
//!
//! Without an installed recorder the macros are no-ops, so library users
//! pay nothing unless they opt in.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one backend call.
pub fn record_fetch(endpoint: &'static str, outcome: &'static str, start: Instant) {
    ::metrics::counter!(
        "hospital_feed_requests_total",
        "endpoint" => endpoint,
        "outcome" => outcome
    )
    .increment(1);
    ::metrics::histogram!("hospital_feed_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

/// Record the size of a mapped batch.
pub fn record_records_mapped(count: usize) {
    ::metrics::gauge!("hospital_feed_records_mapped").set(count as f64);
}
