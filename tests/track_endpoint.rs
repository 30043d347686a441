//! End-to-end flow through the HTTP surface: track a visit, read it back
//! through the operator API, block it, and verify the session guard.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use helpers::scratch_ledger;
use visitor_status::auth::AdminCredentials;
use visitor_status::dashboard::Dashboard;
use visitor_status::ingest::{IngestionGuard, MemorySessionStore, Tracker};
use visitor_status::location::LookupTier;
use visitor_status::server::{router, AppState};
use visitor_status::storage::VisitorLedger;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

async fn spawn_geolocation_endpoint() -> String {
    let app = Router::new().route(
        "/",
        get(|| async {
            r#"{"ip":"203.0.113.9","country_name":"Philippines","city":"Manila","latitude":14.5995,"longitude":120.9842}"#
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

async fn spawn_app(ledger: VisitorLedger) -> String {
    let lookup_url = spawn_geolocation_endpoint().await;

    let client = Arc::new(
        reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap(),
    );
    let guard = IngestionGuard::new(Arc::new(MemorySessionStore::new()));
    let tracker = Arc::new(Tracker::new(
        client,
        vec![LookupTier::geolocation(lookup_url)],
        ledger.clone(),
        guard,
    ));
    let dashboard = Arc::new(Dashboard::new(ledger.clone()));

    let state = AppState {
        tracker,
        ledger,
        dashboard,
        credentials: Arc::new(AdminCredentials::new("admin", "secret")),
    };

    let app = router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Polls the ledger until it holds `expected` records or the deadline hits.
async fn wait_for_records(ledger: &VisitorLedger, expected: usize) -> bool {
    for _ in 0..50 {
        if ledger.list().await.unwrap().len() == expected {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    false
}

#[tokio::test]
async fn track_ingests_once_per_session() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = scratch_ledger(&dir).await;
    let base = spawn_app(ledger.clone()).await;
    let http = reqwest::Client::new();

    // First visit: 204 immediately, record appears asynchronously
    let response = http
        .post(format!("{base}/track"))
        .header("user-agent", USER_AGENT)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("first visit issues a session cookie")
        .split(';')
        .next()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("vs_session="));

    assert!(wait_for_records(&ledger, 1).await);

    let records = ledger.list().await.unwrap();
    assert_eq!(records[0].network_address, "203.0.113.9");
    assert_eq!(records[0].city, "Manila");
    assert_eq!(records[0].operating_system.as_deref(), Some("Windows 10/11"));
    assert_eq!(records[0].browser.as_deref(), Some("Chrome"));
    assert!(!records[0].is_blocked);

    // Second visit in the same session: admitted by the endpoint but not
    // ingested again
    let response = http
        .post(format!("{base}/track"))
        .header("user-agent", USER_AGENT)
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(ledger.list().await.unwrap().len(), 1);

    // A fresh session is tracked again
    let response = http
        .post(format!("{base}/track"))
        .header("user-agent", USER_AGENT)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(wait_for_records(&ledger, 2).await);
}

#[tokio::test]
async fn operator_api_requires_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = scratch_ledger(&dir).await;
    let base = spawn_app(ledger).await;
    let http = reqwest::Client::new();

    let response = http
        .get(format!("{base}/api/stats"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = http
        .get(format!("{base}/api/stats"))
        .header("x-admin-user", "admin")
        .header("x-admin-pass", "wrong")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = http
        .get(format!("{base}/api/stats"))
        .header("x-admin-user", "admin")
        .header("x-admin-pass", "secret")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn block_and_unblock_through_the_api() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = scratch_ledger(&dir).await;
    let base = spawn_app(ledger.clone()).await;
    let http = reqwest::Client::new();

    http.post(format!("{base}/track"))
        .header("user-agent", USER_AGENT)
        .send()
        .await
        .unwrap();
    assert!(wait_for_records(&ledger, 1).await);
    let id = ledger.list().await.unwrap()[0].id.clone();

    let response = http
        .post(format!("{base}/api/visitors/{id}/block"))
        .header("x-admin-user", "admin")
        .header("x-admin-pass", "secret")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(ledger.list().await.unwrap()[0].is_blocked);

    // Stats snapshot was force-refreshed by the mutation
    let stats: serde_json::Value = http
        .get(format!("{base}/api/stats"))
        .header("x-admin-user", "admin")
        .header("x-admin-pass", "secret")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["blocked_visitors"], 1);

    // Blocking a vanished id is a quiet no-op
    let response = http
        .post(format!("{base}/api/visitors/no-such-id/block"))
        .header("x-admin-user", "admin")
        .header("x-admin-pass", "secret")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = http
        .post(format!("{base}/api/visitors/{id}/unblock"))
        .header("x-admin-user", "admin")
        .header("x-admin-pass", "secret")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!ledger.list().await.unwrap()[0].is_blocked);
}

#[tokio::test]
async fn table_filter_and_order_through_the_api() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = scratch_ledger(&dir).await;

    for record in [
        helpers::sample_record("v1", "Manila", "PH", 100),
        helpers::sample_record("v2", "Cebu", "PH", 300),
        helpers::sample_record("v3", "Manila", "PH", 200),
    ] {
        ledger.append(&record).await.unwrap();
    }

    let base = spawn_app(ledger).await;
    let http = reqwest::Client::new();

    let body: serde_json::Value = http
        .get(format!("{base}/api/visitors?filter=MANILA"))
        .header("x-admin-user", "admin")
        .header("x-admin-pass", "secret")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total"], 2);
    let timestamps: Vec<i64> = body["visitors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["timestamp"].as_i64().unwrap())
        .collect();
    assert_eq!(timestamps, vec![200, 100]);
}
