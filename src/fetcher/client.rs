//! Hospital backend client.
//!
//! # Responsibilities
//! - Issue GET requests against the configured base URL
//! - Decode backend payloads into the explicit source schema
//! - Map every record to the frontend shape
//! - Offer each operation twice: `try_*` returns the failure, the plain form
//!   logs it and yields an empty value

use std::time::{Duration, Instant};

use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::config::FeedConfig;
use crate::fetcher::error::{FetchError, FetchResult};
use crate::fetcher::query::{HospitalFilter, NearbyQuery};
use crate::hospitals::{map_hospital, map_hospitals, Hospital, HospitalList, SourceHospital, StatsSummary};
use crate::observability::metrics;

/// Correlation header attached to every outbound request.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Longest body excerpt kept in a `FetchError::Status`.
const MAX_ERROR_BODY: usize = 512;

const HOSPITALS_PATH: &str = "/api/hospitals";
const NEARBY_PATH: &str = "/api/hospitals/nearby";
const FILTER_PATH: &str = "/api/hospitals/filter";
const STATS_PATH: &str = "/api/stats";

/// Client for the hospital backend API.
///
/// Cheap to clone; clones share the underlying connection pool. Calls are
/// independent of each other and hold no shared mutable state.
#[derive(Debug, Clone)]
pub struct HospitalFetcher {
    client: Client,
    base_url: String,
}

impl HospitalFetcher {
    /// Create a fetcher from configuration.
    pub fn new(config: &FeedConfig) -> FetchResult<Self> {
        let base_url = config.backend.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| FetchError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder().user_agent(config.backend.user_agent.clone());
        if !config.backend.use_system_proxy {
            builder = builder.no_proxy();
        }
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        tracing::debug!(
            base_url = %base_url,
            connect_timeout_secs = ?config.timeouts.connect_secs,
            request_timeout_secs = ?config.timeouts.request_secs,
            "Hospital fetcher initialized"
        );

        Ok(Self { client, base_url })
    }

    /// Create a fetcher with default settings against `base_url`.
    pub fn from_base_url(base_url: &str) -> FetchResult<Self> {
        Self::new(&FeedConfig::with_base_url(base_url))
    }

    /// Base URL requests are issued against, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and map all hospitals. Any failure is logged and yields an
    /// empty list, so callers cannot tell "no hospitals" from "fetch failed".
    pub async fn fetch_hospitals(&self) -> Vec<Hospital> {
        swallow("fetch_hospitals", self.try_fetch_hospitals().await)
    }

    /// Fetch and map all hospitals, returning the failure.
    pub async fn try_fetch_hospitals(&self) -> FetchResult<Vec<Hospital>> {
        let url = self.endpoint_url(HOSPITALS_PATH)?;
        let (_, list): (_, HospitalList) = self.get_json("hospitals", url, &[]).await?;
        Ok(map_list(list))
    }

    /// Fetch one hospital by backend id. Unknown ids and failures yield `None`.
    pub async fn fetch_hospital(&self, id: &str) -> Option<Hospital> {
        swallow("fetch_hospital", self.try_fetch_hospital(id).await)
    }

    /// Fetch one hospital by backend id. An unknown id is `Ok(None)`.
    pub async fn try_fetch_hospital(&self, id: &str) -> FetchResult<Option<Hospital>> {
        let mut url = self.endpoint_url(HOSPITALS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl {
                url: self.base_url.clone(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .push(id);

        let (status, body): (_, serde_json::Value) = self.get_json("hospital", url, &[]).await?;

        // The backend answers unknown ids with 200 and {"error": "..."}.
        if let Some(message) = body.get("error").and_then(|e| e.as_str()) {
            tracing::debug!(id = %id, message = %message, "Hospital not found");
            return Ok(None);
        }

        let source = decode_record(status, &body)?;
        Ok(Some(map_hospital(source, Utc::now())))
    }

    /// Hospitals within a radius, closest first. Failures yield an empty list.
    pub async fn fetch_nearby(&self, query: NearbyQuery) -> Vec<Hospital> {
        swallow("fetch_nearby", self.try_fetch_nearby(query).await)
    }

    /// Hospitals within a radius, closest first.
    pub async fn try_fetch_nearby(&self, query: NearbyQuery) -> FetchResult<Vec<Hospital>> {
        let url = self.endpoint_url(NEARBY_PATH)?;
        let (_, list): (_, HospitalList) = self.get_json("nearby", url, &query.to_pairs()).await?;
        Ok(map_list(list))
    }

    /// Hospitals matching a filter. Failures yield an empty list.
    pub async fn fetch_filtered(&self, filter: HospitalFilter) -> Vec<Hospital> {
        swallow("fetch_filtered", self.try_fetch_filtered(filter).await)
    }

    /// Hospitals matching a filter.
    pub async fn try_fetch_filtered(&self, filter: HospitalFilter) -> FetchResult<Vec<Hospital>> {
        let url = self.endpoint_url(FILTER_PATH)?;
        let (_, list): (_, HospitalList) = self.get_json("filter", url, &filter.to_pairs()).await?;
        Ok(map_list(list))
    }

    /// Aggregate figures. Failures yield `None`.
    pub async fn fetch_stats(&self) -> Option<StatsSummary> {
        swallow("fetch_stats", self.try_fetch_stats().await.map(Some))
    }

    /// Aggregate figures.
    pub async fn try_fetch_stats(&self) -> FetchResult<StatsSummary> {
        let url = self.endpoint_url(STATS_PATH)?;
        let (_, stats) = self.get_json("stats", url, &[]).await?;
        Ok(stats)
    }

    fn endpoint_url(&self, path: &str) -> FetchResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
        query: &[(&'static str, String)],
    ) -> FetchResult<(StatusCode, T)> {
        let start = Instant::now();
        let request_id = Uuid::new_v4();

        tracing::debug!(
            request_id = %request_id,
            endpoint,
            url = %url,
            "Fetching from hospital backend"
        );

        let result = self.send(url, query, request_id).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        metrics::record_fetch(endpoint, outcome, start);

        tracing::debug!(
            request_id = %request_id,
            endpoint,
            outcome,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Backend call finished"
        );

        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
        request_id: Uuid,
    ) -> FetchResult<(StatusCode, T)> {
        let mut request = self
            .client
            .get(url)
            .header(X_REQUEST_ID, request_id.to_string());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok((status, decode_body(status, &body)?))
    }
}

/// Decode a body regardless of status; the status only matters when the
/// body does not decode.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> FetchResult<T> {
    match serde_json::from_str(body) {
        Ok(value) => {
            if !status.is_success() {
                tracing::warn!(status = %status, "Accepted decodable body from non-success response");
            }
            Ok(value)
        }
        Err(_) if !status.is_success() => Err(FetchError::Status {
            status: status.as_u16(),
            body: excerpt(body),
        }),
        Err(e) => Err(FetchError::Decode(e)),
    }
}

/// Decode a single record out of an already-parsed body. A JSON error body
/// from a non-success response (e.g. 422 `{"detail": ...}`) is a status error.
fn decode_record(status: StatusCode, body: &serde_json::Value) -> FetchResult<SourceHospital> {
    match SourceHospital::deserialize(body) {
        Ok(source) => Ok(source),
        Err(_) if !status.is_success() => Err(FetchError::Status {
            status: status.as_u16(),
            body: excerpt(&body.to_string()),
        }),
        Err(e) => Err(FetchError::Decode(e)),
    }
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

fn map_list(list: HospitalList) -> Vec<Hospital> {
    let hospitals = map_hospitals(list.hospitals, Utc::now());
    metrics::record_records_mapped(hospitals.len());
    tracing::debug!(count = hospitals.len(), "Hospitals mapped");
    hospitals
}

fn swallow<T: Default>(operation: &'static str, result: FetchResult<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!(operation, kind = e.kind(), error = %e, "Backend fetch failed");
        T::default()
    })
}
