use axum::{extract::State, Json};

use super::SharedState;
use crate::application::dtos::RefreshDto;

/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}

/// GET /api/refresh
///
/// Clients poll this and reload when the key changes.
pub async fn get_refresh_key(State(state): State<SharedState>) -> Json<RefreshDto> {
    Json(RefreshDto {
        refresh_key: state.refresh.current(),
    })
}
