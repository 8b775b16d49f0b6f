use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{error, warn};

use super::SharedState;
use crate::application::commands::CommandHandler;
use crate::application::dtos::{
    LogProblemRequest, LogResponseDto, LogSkipRequest, ProblemDto, SkipDto,
};
use crate::presentation::error::ApiError;
use streakboard_domain::shared::DomainError;

type Created<T> = (StatusCode, Json<LogResponseDto<T>>);

/// POST /api/log-problem
pub async fn log_problem(
    State(state): State<SharedState>,
    payload: Result<Json<LogProblemRequest>, JsonRejection>,
) -> Result<Created<ProblemDto>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;
    let command = request.into_command()?;

    let result = state
        .command_handlers
        .log_problem
        .handle(command)
        .await
        .map_err(|e| summarize(e, "Failed to log problem"))?;

    Ok((
        StatusCode::CREATED,
        Json(LogResponseDto {
            message: "Problem logged successfully".to_string(),
            data: result.problem,
        }),
    ))
}

/// POST /api/log-skip
pub async fn log_skip(
    State(state): State<SharedState>,
    payload: Result<Json<LogSkipRequest>, JsonRejection>,
) -> Result<Created<SkipDto>, ApiError> {
    let Json(request) = payload.map_err(reject_body)?;
    let command = request.into_command()?;

    let result = state
        .command_handlers
        .log_skip
        .handle(command)
        .await
        .map_err(|e| summarize(e, "Failed to log skip"))?;

    Ok((
        StatusCode::CREATED,
        Json(LogResponseDto {
            message: "Skip logged successfully".to_string(),
            data: result.skip,
        }),
    ))
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    warn!(error = %rejection, "Rejected request body");
    ApiError::validation(format!("Invalid request body: {}", rejection.body_text()))
}

fn summarize(err: DomainError, summary: &str) -> ApiError {
    if !err.code().is_client_error() {
        error!(error = %err.format_with_code(), "{}", summary);
    }
    ApiError::with_summary(err, summary)
}
