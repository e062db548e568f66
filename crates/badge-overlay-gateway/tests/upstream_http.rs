//! `HttpUpstream` against a local stub of the badge service.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{extract::RawQuery, http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

use badge_overlay_core::error::{ClientCode, OverlayError};
use badge_overlay_core::Card;
use badge_overlay_gateway::config::UpstreamSection;
use badge_overlay_gateway::upstream::{HttpUpstream, UpstreamSource};

async fn spawn_stub() -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route(
            "/api",
            get(|RawQuery(q): RawQuery| async move {
                format!("<svg>stats?{}</svg>", q.unwrap_or_default())
            }),
        )
        .route(
            "/api/top-langs/",
            get(|RawQuery(q): RawQuery| async move {
                format!("<svg>langs?{}</svg>", q.unwrap_or_default())
            }),
        )
        .route(
            "/broken/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "<svg>down</svg>") }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), server)
}

fn section(base: &str) -> UpstreamSection {
    UpstreamSection {
        stats_url: format!("{base}/api"),
        top_langs_url: format!("{base}/api/top-langs/"),
        timeout_ms: Some(5_000),
        reject_error_status: true,
    }
}

fn pairs(p: &[(&str, &str)]) -> Vec<(String, String)> {
    p.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::test]
async fn fetches_each_card_from_its_base_url() {
    let (base, server) = spawn_stub().await;
    let upstream = HttpUpstream::new(&section(&base)).unwrap();

    let body = upstream
        .fetch(Card::Stats, &pairs(&[("theme", "dark"), ("username", "octo")]))
        .await
        .unwrap();
    assert_eq!(body, "<svg>stats?theme=dark&username=octo</svg>");

    let body = upstream
        .fetch(Card::TopLangs, &pairs(&[("layout", "compact"), ("username", "a b")]))
        .await
        .unwrap();
    assert_eq!(body, "<svg>langs?layout=compact&username=a+b</svg>");

    server.abort();
}

#[tokio::test]
async fn error_status_is_rejected_by_default() {
    let (base, server) = spawn_stub().await;
    let mut cfg = section(&base);
    cfg.top_langs_url = format!("{base}/broken/");
    let upstream = HttpUpstream::new(&cfg).unwrap();

    let err = upstream
        .fetch(Card::TopLangs, &pairs(&[("username", "octo")]))
        .await
        .expect_err("must fail");
    assert!(matches!(err, OverlayError::UpstreamStatus(503)));
    assert_eq!(err.client_code(), ClientCode::BadGateway);

    server.abort();
}

#[tokio::test]
async fn error_status_passes_through_when_allowed() {
    let (base, server) = spawn_stub().await;
    let mut cfg = section(&base);
    cfg.top_langs_url = format!("{base}/broken/");
    cfg.reject_error_status = false;
    let upstream = HttpUpstream::new(&cfg).unwrap();

    let body = upstream
        .fetch(Card::TopLangs, &pairs(&[("username", "octo")]))
        .await
        .unwrap();
    assert_eq!(body, "<svg>down</svg>");

    server.abort();
}

#[tokio::test]
async fn connection_failure_is_upstream_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let upstream = HttpUpstream::new(&section(&format!("http://{addr}"))).unwrap();
    let err = upstream
        .fetch(Card::Stats, &pairs(&[("username", "octo")]))
        .await
        .expect_err("must fail");
    assert!(matches!(err, OverlayError::Upstream(_)));
}
