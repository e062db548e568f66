use serde::Deserialize;
use badge_overlay_core::error::{OverlayError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub assets: AssetsSection,

    #[serde(default)]
    pub upstream: UpstreamSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            assets: AssetsSection::default(),
            upstream: UpstreamSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(OverlayError::BadConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.upstream.validate()?;

        Ok(())
    }

    /// `host:port` string handed to the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(OverlayError::BadConfig("server.host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(OverlayError::BadConfig("server.port must be non-zero".into()));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3000
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetsSection {
    #[serde(default = "default_assets_dir")]
    pub dir: String,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
        }
    }
}

fn default_assets_dir() -> String {
    "assets".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    #[serde(default = "default_stats_url")]
    pub stats_url: String,

    #[serde(default = "default_top_langs_url")]
    pub top_langs_url: String,

    /// Request timeout; `None` keeps the HTTP client default.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Treat non-2xx upstream answers as fetch failures.
    #[serde(default = "default_reject_error_status")]
    pub reject_error_status: bool,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            stats_url: default_stats_url(),
            top_langs_url: default_top_langs_url(),
            timeout_ms: None,
            reject_error_status: default_reject_error_status(),
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("upstream.stats_url", &self.stats_url),
            ("upstream.top_langs_url", &self.top_langs_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(OverlayError::BadConfig(format!(
                    "{name} must be an http(s) URL, got {url:?}"
                )));
            }
        }
        if self.timeout_ms == Some(0) {
            return Err(OverlayError::BadConfig(
                "upstream.timeout_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

fn default_stats_url() -> String {
    "https://github-readme-stats.vercel.app/api".into()
}
// Trailing slash is significant for this endpoint.
fn default_top_langs_url() -> String {
    "https://github-readme-stats.vercel.app/api/top-langs/".into()
}
fn default_reject_error_status() -> bool {
    true
}
