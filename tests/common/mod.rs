//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use hospital_feed::{FeedConfig, HospitalFetcher};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Request line target (path and query) plus lower-cased header lines.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub target: String,
    pub headers: Vec<(String, String)>,
}

#[allow(dead_code)]
impl SeenRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Start a programmable mock backend on an ephemeral port.
///
/// `f` receives each request and returns the status code and JSON/text body.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(SeenRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        let (status, body) = f(request).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            422 => "422 Unprocessable Entity",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a backend that answers every request with the same status and body,
/// recording what it was asked for.
#[allow(dead_code)]
pub async fn start_recording_backend(
    status: u16,
    body: String,
) -> (SocketAddr, Arc<Mutex<Vec<SeenRequest>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let addr = start_programmable_backend(move |request| {
        log.lock().unwrap().push(request);
        let body = body.clone();
        async move { (status, body) }
    })
    .await;
    (addr, seen)
}

/// Fetcher for a mock backend, bypassing any system proxy.
#[allow(dead_code)]
pub fn fetcher(addr: SocketAddr) -> HospitalFetcher {
    fetcher_at(&format!("http://{}", addr))
}

#[allow(dead_code)]
pub fn fetcher_at(base_url: &str) -> HospitalFetcher {
    let mut config = FeedConfig::with_base_url(base_url);
    config.backend.use_system_proxy = false;
    HospitalFetcher::new(&config).unwrap()
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<SeenRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let text = String::from_utf8_lossy(&buf);
    let mut lines = text.split("\r\n");
    let target = lines.next()?.split_whitespace().nth(1)?.to_string();
    let headers = lines
        .take_while(|l| !l.is_empty())
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    Some(SeenRequest { target, headers })
}

/// A backend record in the shape `/api/hospitals` serves.
#[allow(dead_code)]
pub fn source_record(id: i64, name: &str, specialties: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "address": format!("{} Main St", id),
        "city": "Springfield",
        "state": "IL",
        "zip": "62701",
        "lat": 39.78,
        "lng": -89.65,
        "phone": "555-1000",
        "beds": {"er": 5, "icu": 2, "pediatric": 3, "maternity": 1},
        "availableBeds": 11,
        "waitTime": 20,
        "specialties": specialties,
        "emergency_services": true
    })
}

/// The `/api/hospitals` envelope around `records`.
#[allow(dead_code)]
pub fn hospital_list(records: Vec<Value>) -> String {
    let count = records.len();
    json!({"hospitals": records, "count": count}).to_string()
}
