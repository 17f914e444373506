// HTTP API contract tests, driven through the router without a listener.

mod helpers;

use std::net::Ipv4Addr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use domain_reputation::{build_router, AppState, Config};

use helpers::{canned_whois_response, StubLookup, StubWhois};

fn healthy_state() -> AppState {
    let mut lookup = StubLookup::default();
    lookup.a.insert(
        "example.com".to_string(),
        vec![Ipv4Addr::new(93, 184, 216, 34)],
    );
    lookup.mx.insert(
        "example.com".to_string(),
        vec!["mx1.example.com".to_string()],
    );
    lookup.ns.insert(
        "example.com".to_string(),
        vec!["ns1.example.com".to_string()],
    );
    let whois = StubWhois {
        raw: canned_whois_response(),
        ..StubWhois::default()
    };
    AppState::new(Arc::new(lookup), Arc::new(whois), Config::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).expect("response body was not JSON");
    (status, json)
}

#[tokio::test]
async fn test_check_returns_full_report_as_json() {
    let app = build_router(healthy_state());
    let (status, json) = get(app, "/check?domain=example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["domain"], "example.com");
    assert_eq!(json["aRecord"], "93.184.216.34");
    assert_eq!(json["mx"][0], "mx1.example.com");
    assert_eq!(json["ns"][0], "ns1.example.com");
    assert_eq!(json["whoisStatus"][0], "clientTransferProhibited");
    assert_eq!(json["ipOwner"], "Example Org");
    assert_eq!(json["blacklist"]["surbl"], false);
    assert_eq!(json["blacklist"]["dbl"], false);
}

#[tokio::test]
async fn test_check_without_domain_is_a_400() {
    let app = build_router(healthy_state());
    let (status, json) = get(app, "/check").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing domain parameter.");
}

#[tokio::test]
async fn test_check_with_blank_domain_is_a_400() {
    let app = build_router(healthy_state());
    let (status, json) = get(app, "/check?domain=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing domain parameter.");
}

#[tokio::test]
async fn test_upstream_failure_is_a_500_with_the_error_text() {
    let lookup = StubLookup::default(); // Every lookup resolves to NXDOMAIN
    let whois = StubWhois {
        raw: canned_whois_response(),
        ..StubWhois::default()
    };
    let app = build_router(AppState::new(
        Arc::new(lookup),
        Arc::new(whois),
        Config::default(),
    ));

    let (status, json) = get(app, "/check?domain=nope.invalid").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("nope.invalid"), "unexpected body: {message}");
}

#[tokio::test]
async fn test_status_reports_request_counters() {
    let state = healthy_state();
    let app = build_router(state);

    // One successful check and one invalid request
    let _ = get(app.clone(), "/check?domain=example.com").await;
    let _ = get(app.clone(), "/check").await;

    let (status, json) = get(app, "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["checks_total"], 2);
    assert_eq!(json["checks_ok"], 1);
    assert_eq!(json["checks_failed"], 0);
    assert_eq!(json["invalid_requests"], 1);
    assert!(json["uptime_seconds"].as_f64().unwrap() >= 0.0);
}
