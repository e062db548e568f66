#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use badge_overlay_core::error::ClientCode;
use badge_overlay_gateway::config::{self, GatewayConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  port: 3000
upstream:
  statz_url: "https://example.com/api" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), ClientCode::Internal.as_str());
    assert!(err.to_string().contains("invalid yaml"));
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
    assert_eq!(cfg.assets.dir, "assets");
    assert_eq!(cfg.upstream.stats_url, "https://github-readme-stats.vercel.app/api");
    assert_eq!(
        cfg.upstream.top_langs_url,
        "https://github-readme-stats.vercel.app/api/top-langs/"
    );
    assert_eq!(cfg.upstream.timeout_ms, None);
    assert!(cfg.upstream.reject_error_status);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  host: "127.0.0.1"
  port: 8081
assets:
  dir: "/srv/roles"
upstream:
  stats_url: "http://localhost:9000/api"
  top_langs_url: "http://localhost:9000/api/top-langs/"
  timeout_ms: 2500
  reject_error_status: false
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8081");
    assert_eq!(cfg.assets.dir, "/srv/roles");
    assert_eq!(cfg.upstream.timeout_ms, Some(2500));
    assert!(!cfg.upstream.reject_error_status);
}

#[test]
fn invalid_values_are_rejected() {
    for bad in [
        "version: 2\n",
        "version: 1\nserver: { port: 0 }\n",
        "version: 1\nupstream: { stats_url: \"\" }\n",
        "version: 1\nupstream: { top_langs_url: \"ftp://example.com\" }\n",
        "version: 1\nupstream: { timeout_ms: 0 }\n",
    ] {
        assert!(config::load_from_str(bad).is_err(), "accepted: {bad}");
    }
}

#[test]
fn env_overrides_apply_after_file() {
    let env: HashMap<&str, &str> = [("PORT", "8080"), ("ASSETS_DIR", "/opt/assets")].into();
    let cfg = config::apply_env_overrides(GatewayConfig::default(), |k| {
        env.get(k).map(|v| v.to_string())
    })
    .unwrap();
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.assets.dir, "/opt/assets");
}

#[test]
fn empty_env_values_are_ignored() {
    let cfg = config::apply_env_overrides(GatewayConfig::default(), |_| Some(String::new())).unwrap();
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.assets.dir, "assets");
}

#[test]
fn bad_port_env_is_an_error() {
    let err = config::apply_env_overrides(GatewayConfig::default(), |k| {
        (k == "PORT").then(|| "http".to_string())
    })
    .expect_err("must fail");
    assert!(err.to_string().contains("PORT"));
}
