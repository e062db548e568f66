//! Card endpoints (`/api/stats`, `/api/top-langs`).
//!
//! Both run the same pipeline: resolve parameters, fetch the upstream card,
//! load the optional role decoration, compose, respond.

use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use badge_overlay_core::{compose, extract_inner_fragment, Card, CardParams, Composition};
use badge_overlay_core::error::Result;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Headers attached to every successful card response.
pub const SVG_HEADERS: [(header::HeaderName, &str); 3] = [
    (header::CONTENT_TYPE, "image/svg+xml"),
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::CACHE_CONTROL, "s-maxage=3600, stale-while-revalidate"),
];

pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    serve(&state, Card::Stats, &query).await
}

pub async fn top_langs(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    serve(&state, Card::TopLangs, &query).await
}

async fn serve(state: &AppState, card: Card, query: &[(String, String)]) -> Response {
    match render_card(state, card, query).await {
        Ok(svg) => {
            state.metrics().requests.inc(&[("card", card.as_str()), ("outcome", "ok")]);
            (StatusCode::OK, SVG_HEADERS, svg).into_response()
        }
        Err(e) => {
            let code = e.client_code().as_str();
            state.metrics().requests.inc(&[("card", card.as_str()), ("outcome", code)]);
            ApiError(e).into_response()
        }
    }
}

/// Run the full card pipeline and return the composed SVG document.
pub async fn render_card(state: &AppState, card: Card, query: &[(String, String)]) -> Result<String> {
    let params = CardParams::resolve(card, query)?;
    tracing::debug!(card = card.as_str(), username = %params.username, "rendering card");

    let started = Instant::now();
    let fetched = state.upstream().fetch(card, &params.upstream_query).await;
    state
        .metrics()
        .upstream_duration
        .observe(&[("card", card.as_str())], started.elapsed());
    let upstream = fetched.map_err(|e| {
        tracing::warn!(card = card.as_str(), username = %params.username, error = %e, "upstream fetch failed");
        e
    })?;

    let role = match params.role.as_deref() {
        Some(role) => {
            let loaded = state.assets().load(role).await;
            if loaded.is_none() {
                state.metrics().asset_misses.inc(&[("card", card.as_str())]);
            }
            loaded
        }
        None => None,
    };

    let composition = Composition::new(
        &params,
        extract_inner_fragment(&upstream),
        role.as_deref().unwrap_or_default(),
    );
    Ok(compose(&composition))
}
