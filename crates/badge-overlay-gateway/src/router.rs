//! Axum router wiring.
//!
//! The router is built once per process and shared by the listener and the
//! embedding entry point.

use axum::{routing::get, Router};

use crate::{app_state::AppState, cards, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/stats", get(cards::stats))
        .route("/api/top-langs", get(cards::top_langs))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
