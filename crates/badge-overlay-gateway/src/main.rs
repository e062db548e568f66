//! badge-overlay gateway
//!
//! Serves composed badge cards:
//! - `/api/stats`, `/api/top-langs`: upstream card + optional role overlay
//! - `/healthz`, `/metrics`: operational endpoints
//!
//! Config: optional YAML (`BADGE_OVERLAY_CONFIG` or `./badge-overlay.yaml`),
//! then `PORT` / `ASSETS_DIR` from the environment.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use badge_overlay_core::error::{OverlayError, Result};
use badge_overlay_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let listen = cfg.listen_addr();
    let assets_dir = cfg.assets.dir.clone();

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, assets_dir = %assets_dir, "badge-overlay-gateway starting");
    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .map_err(|e| OverlayError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| OverlayError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
