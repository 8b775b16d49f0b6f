use axum::{extract::State, Json};
use tracing::error;

use super::SharedState;
use crate::application::dtos::StatsResponseDto;
use crate::presentation::error::ApiError;

/// GET /api/stats
pub async fn get_stats(State(state): State<SharedState>) -> Result<Json<StatsResponseDto>, ApiError> {
    state
        .queries
        .stats
        .get_all_player_stats()
        .await
        .map(Json)
        .map_err(|e| {
            error!(error = %e.format_with_code(), "Failed to fetch stats");
            ApiError::with_summary(e, "Failed to fetch stats")
        })
}
