//! Gateway config loader (strict parsing + environment overrides).
//!
//! Resolution order: built-in defaults, then the optional YAML file, then the
//! `PORT` / `ASSETS_DIR` environment variables. The result is validated once
//! and treated as read-only for the life of the process.

pub mod schema;

use std::{fs, path::Path};

use badge_overlay_core::error::{OverlayError, Result};

pub use schema::{AssetsSection, GatewayConfig, ServerSection, UpstreamSection};

/// Env var naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "BADGE_OVERLAY_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "badge-overlay.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| OverlayError::BadConfig(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| OverlayError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the process configuration from the file system and environment.
///
/// An explicitly named file (`BADGE_OVERLAY_CONFIG`) must exist; the default
/// file is optional.
pub fn load() -> Result<GatewayConfig> {
    let env = |key: &str| std::env::var(key).ok();

    let cfg = match env(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        Some(path) => load_from_file(&path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
        None => GatewayConfig::default(),
    };

    apply_env_overrides(cfg, env)
}

/// Apply `PORT` and `ASSETS_DIR` on top of `cfg`. Empty values are ignored.
pub fn apply_env_overrides<F>(mut cfg: GatewayConfig, env: F) -> Result<GatewayConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = env("PORT").filter(|v| !v.is_empty()) {
        cfg.server.port = port
            .parse()
            .map_err(|_| OverlayError::BadConfig(format!("PORT must be a port number, got {port:?}")))?;
    }
    if let Some(dir) = env("ASSETS_DIR").filter(|v| !v.is_empty()) {
        cfg.assets.dir = dir;
    }
    cfg.validate()?;
    Ok(cfg)
}
