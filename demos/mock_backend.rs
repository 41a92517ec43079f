//! Pretend hospital backend for trying the CLI by hand.
//!
//! ```text
//! cargo run --example mock_backend
//! cargo run -- --base-url http://127.0.0.1:8000 list
//! ```

use axum::{extract::Path, routing::get, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;

fn hospitals() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "City Hospital",
            "address": "100 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701",
            "lat": 39.7817,
            "lng": -89.6501,
            "phone": "555-1000",
            "beds": {"er": 5, "icu": 2, "pediatric": 3, "maternity": 1},
            "availableBeds": 11,
            "waitTime": 20,
            "specialties": ["Trauma", "Cardiology"],
            "emergency_services": true
        }),
        json!({
            "id": 2,
            "name": "Lakeside Community",
            "hospital_type": "Critical Access Hospital",
            "address": "7 Shore Rd",
            "city": "Decatur",
            "state": "IL",
            "zip": "62521",
            "lat": 39.8403,
            "lng": -88.9548,
            "phone": "555-2000",
            "beds": {"er": 0, "icu": 1, "pediatric": 0, "maternity": 4},
            "availableBeds": 5,
            "waitTime": 45,
            "specialties": ["Obstetrics"],
            "emergency_services": false
        }),
    ]
}

#[tokio::main]
async fn main() {
    let app = Router::new()
        .route("/api/hospitals", get(|| async {
            let all = hospitals();
            Json(json!({"count": all.len(), "hospitals": all}))
        }))
        .route("/api/hospitals/{id}", get(|Path(id): Path<i64>| async move {
            let found = hospitals().into_iter().find(|h| h["id"] == id);
            Json(found.unwrap_or_else(|| json!({"error": "Hospital not found"})))
        }))
        .route("/api/stats", get(|| async {
            Json(json!({
                "total_hospitals": 2,
                "total_available_beds": 16,
                "average_wait_time": 32.5,
                "emergency_services": 1
            }))
        }));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    println!("Mock hospital backend listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
