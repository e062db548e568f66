//! Shared application state for the badge-overlay gateway.
//!
//! Built once at startup and cloned into every request. Nothing in here is
//! mutated after construction except metrics counters.

use std::sync::Arc;

use badge_overlay_core::error::Result;

use crate::assets::AssetStore;
use crate::config::GatewayConfig;
use crate::obs::OverlayMetrics;
use crate::upstream::{HttpUpstream, UpstreamSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    upstream: Arc<dyn UpstreamSource>,
    metrics: Arc<OverlayMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    assets: AssetStore,
}

impl AppState {
    /// Build application state with the HTTP upstream described by `cfg`.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let upstream = HttpUpstream::new(&cfg.upstream)?;
        Ok(Self::with_upstream(cfg, Arc::new(upstream)))
    }

    /// Build application state around any upstream source.
    pub fn with_upstream(cfg: GatewayConfig, upstream: Arc<dyn UpstreamSource>) -> Self {
        let assets = AssetStore::new(&cfg.assets.dir);
        Self {
            inner: Arc::new(AppStateInner { cfg, assets }),
            upstream,
            metrics: Arc::new(OverlayMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn assets(&self) -> &AssetStore {
        &self.inner.assets
    }

    pub fn upstream(&self) -> &dyn UpstreamSource {
        self.upstream.as_ref()
    }

    pub fn metrics(&self) -> &OverlayMetrics {
        &self.metrics
    }
}
