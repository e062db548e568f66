//! Upstream badge service access.
//!
//! `UpstreamSource` is the seam between card handlers and the network: the
//! gateway uses [`HttpUpstream`], tests plug in stubs.

use std::time::Duration;

use async_trait::async_trait;
use badge_overlay_core::error::{OverlayError, Result};
use badge_overlay_core::Card;

use crate::config::UpstreamSection;

/// Source of raw card SVG text.
#[async_trait]
pub trait UpstreamSource: Send + Sync + 'static {
    /// Fetch the card body for `card` with `query` attached verbatim.
    async fn fetch(&self, card: Card, query: &[(String, String)]) -> Result<String>;
}

/// Fetches cards over HTTP with one shared client. No retries.
pub struct HttpUpstream {
    client: reqwest::Client,
    stats_url: String,
    top_langs_url: String,
    reject_error_status: bool,
}

impl HttpUpstream {
    pub fn new(cfg: &UpstreamSection) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = cfg.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| OverlayError::Internal(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            stats_url: cfg.stats_url.clone(),
            top_langs_url: cfg.top_langs_url.clone(),
            reject_error_status: cfg.reject_error_status,
        })
    }

    pub fn base_url(&self, card: Card) -> &str {
        match card {
            Card::Stats => &self.stats_url,
            Card::TopLangs => &self.top_langs_url,
        }
    }
}

#[async_trait]
impl UpstreamSource for HttpUpstream {
    async fn fetch(&self, card: Card, query: &[(String, String)]) -> Result<String> {
        let resp = self
            .client
            .get(self.base_url(card))
            .query(query)
            .send()
            .await
            .map_err(|e| OverlayError::Upstream(e.to_string()))?;

        let status = resp.status();
        if self.reject_error_status && !status.is_success() {
            return Err(OverlayError::UpstreamStatus(status.as_u16()));
        }
        if !status.is_success() {
            tracing::debug!(card = card.as_str(), status = status.as_u16(), "passing through non-2xx upstream body");
        }

        resp.text()
            .await
            .map_err(|e| OverlayError::Upstream(format!("read body: {e}")))
    }
}
