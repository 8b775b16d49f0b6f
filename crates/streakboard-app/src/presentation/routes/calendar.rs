use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::error;

use super::SharedState;
use crate::application::dtos::{MonthQuery, MonthStatsDto, ProblemDto};
use crate::presentation::error::ApiError;

/// GET /api/calendar-problems
pub async fn get_calendar_problems(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ProblemDto>>, ApiError> {
    state
        .queries
        .calendar
        .list_calendar_problems()
        .await
        .map(Json)
        .map_err(|e| {
            error!(error = %e.format_with_code(), "Failed to fetch calendar problems");
            ApiError::with_summary(e, "Failed to fetch problems")
        })
}

/// GET /api/calendar-stats?year=&month=
///
/// Missing parameters default to the current local month.
pub async fn get_calendar_stats(
    State(state): State<SharedState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<MonthStatsDto>, ApiError> {
    let Query(query) = query
        .map_err(|e| ApiError::validation(format!("Invalid query: {}", e.body_text())))?;

    state
        .queries
        .calendar
        .get_month_stats(query.year, query.month)
        .await
        .map(Json)
        .map_err(|e| ApiError::with_summary(e, "Failed to fetch calendar stats"))
}
