//! HTTP routes for the dashboard API.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::presentation::state::AppState;

mod activity;
mod calendar;
mod stats;
mod system;

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/stats", get(stats::get_stats))
        .route("/log-problem", post(activity::log_problem))
        .route("/log-skip", post(activity::log_skip))
        .route("/calendar-problems", get(calendar::get_calendar_problems))
        .route("/calendar-stats", get(calendar::get_calendar_stats))
        .route("/refresh", get(system::get_refresh_key));

    Router::new()
        .route("/health", get(system::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
