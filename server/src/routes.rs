//! HTTP routes and handlers
//!
//! Two GET endpoints over the shared engine. `/info` maps an access
//! failure to 400; `/check` always answers 200 and lets the payload's
//! `ok` flag carry the verdict - the extension only looks at the body.
//! CORS is wide open: the server binds loopback only and the caller is
//! a browser extension page.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use spacecheck_core::{CheckOutcome, DiskEngine, ErrorReport, InfoReport, Limits, WireResponse};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DiskEngine>,
}

/// Build the router with CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/info", get(disk_info))
        .route("/check", get(check_space))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct InfoParams {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckParams {
    /// Raw query string value; anything non-numeric or <= 0 falls back
    /// to the engine's default size.
    pub size: Option<String>,
    pub path: Option<String>,
}

fn parse_size(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|size| *size > 0)
}

/// `GET /info?path=` - usage snapshot, 400 on an inaccessible path.
pub async fn disk_info(
    State(state): State<AppState>,
    Query(params): Query<InfoParams>,
) -> Result<Json<InfoReport>, (StatusCode, Json<ErrorReport>)> {
    let path = params.path.as_deref().unwrap_or("/");

    match state.engine.info(path) {
        Ok(report) => {
            tracing::info!(
                path = %report.path,
                free_gb = report.free_gb,
                percent_used = report.percent_used,
                "served disk info"
            );
            Ok(Json(report))
        }
        Err(err) => {
            let message = err.to_string();
            tracing::warn!("{message}");
            Err((StatusCode::BAD_REQUEST, Json(ErrorReport::new(message))))
        }
    }
}

/// `GET /check?size=&path=` - sufficiency verdict, always 200.
pub async fn check_space(
    State(state): State<AppState>,
    Query(params): Query<CheckParams>,
) -> Json<WireResponse> {
    let path = params.path.as_deref().unwrap_or("/");
    let size = params.size.as_deref().and_then(parse_size);

    match state.engine.check(size, path) {
        Ok(outcome) => {
            log_check(&outcome, state.engine.limits());
            Json(WireResponse::Check(outcome.report(state.engine.limits())))
        }
        Err(err) => {
            let message = err.to_string();
            tracing::warn!("{message}");
            Json(WireResponse::Error(ErrorReport::new(message)))
        }
    }
}

/// Observer for check requests, invoked after the decision is made.
fn log_check(outcome: &CheckOutcome, limits: &Limits) {
    tracing::info!(
        path = %outcome.path.display(),
        total_gb = limits.to_gb(outcome.usage.total),
        used_gb = limits.to_gb(outcome.usage.used),
        free_gb = limits.to_gb(outcome.usage.free),
        requested_gb = limits.to_gb(outcome.size),
        required_gb = limits.to_gb(outcome.required),
        sufficient = outcome.sufficient(),
        "checked disk space"
    );
}
