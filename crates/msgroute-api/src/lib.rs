//! msgroute-api — HTTP surface for the route engine.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | POST | `/message/route` | Split recipients into tiered routes |
//! | GET | `/healthz` | Liveness probe |
//! | GET | `/metrics` | Prometheus exposition |

pub mod handlers;
pub mod metrics;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use msgroute_alloc::RouteEngine;

pub use metrics::RouteMetrics;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<RouteEngine>,
    pub metrics: Arc<RouteMetrics>,
}

impl ApiState {
    pub fn new(engine: RouteEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            metrics: Arc::new(RouteMetrics::default()),
        }
    }
}

/// Build the complete API router.
pub fn build_router(engine: RouteEngine) -> Router {
    router_with_state(ApiState::new(engine))
}

/// Build the router over existing state, e.g. to inspect metrics in tests.
pub fn router_with_state(state: ApiState) -> Router {
    Router::new()
        .route("/message/route", post(handlers::route_message))
        .route("/healthz", get(handlers::healthz))
        .route("/metrics", get(handlers::prometheus_metrics))
        .with_state(state)
}
