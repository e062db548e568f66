//! Embedding entry point for hosts that own the HTTP lifecycle
//! (serverless runtimes, test harnesses, other servers).

use std::convert::Infallible;

use axum::{body::Body, http::Request, response::Response, Router};
use tower::ServiceExt;

use crate::{app_state::AppState, router};

/// A built router exposed as a plain request handler.
#[derive(Clone)]
pub struct Handler {
    router: Router,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self::from_router(router::build_router(state))
    }

    pub fn from_router(router: Router) -> Self {
        Self { router }
    }

    /// Serve one request through the gateway routes.
    pub async fn call(&self, req: Request<Body>) -> Response {
        let result: Result<Response, Infallible> = self.router.clone().oneshot(req).await;
        match result {
            Ok(resp) => resp,
            Err(never) => match never {},
        }
    }
}
