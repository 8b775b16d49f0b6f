use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::commands::{LogProblemCommand, LogSkipCommand};
use streakboard_domain::problem::{Difficulty, Problem};
use streakboard_domain::shared::DomainError;
use streakboard_domain::skip::Skip;

/// A logged problem as the dashboard consumes it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDto {
    pub id: String,
    pub title: String,
    pub problem_link: String,
    pub difficulty: Difficulty,
    pub date: DateTime<Utc>,
    pub local_date: String, // YYYY-MM-DD
    pub user_id: String,
}

impl From<&Problem> for ProblemDto {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id().to_string(),
            title: problem.name().to_string(),
            problem_link: problem.link().to_string(),
            difficulty: problem.difficulty(),
            date: problem.created_at(),
            local_date: problem.local_date().format("%Y-%m-%d").to_string(),
            user_id: problem.user_id().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkipDto {
    pub id: String,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub local_date: String,
}

impl From<&Skip> for SkipDto {
    fn from(skip: &Skip) -> Self {
        Self {
            id: skip.id().to_string(),
            user_id: skip.user_id().to_string(),
            date: skip.created_at(),
            local_date: skip.local_date().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Body of `POST /api/log-problem`. Every field is required; they are
/// optional here so a missing one becomes a validation error, not a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogProblemRequest {
    pub user_id: Option<String>,
    pub problem_name: Option<String>,
    pub problem_link: Option<String>,
    pub difficulty: Option<String>,
}

impl LogProblemRequest {
    pub fn into_command(self) -> Result<LogProblemCommand, DomainError> {
        match (
            non_blank(self.user_id),
            non_blank(self.problem_name),
            non_blank(self.problem_link),
            non_blank(self.difficulty),
        ) {
            (Some(user_id), Some(problem_name), Some(problem_link), Some(difficulty)) => {
                Ok(LogProblemCommand {
                    user_id,
                    problem_name,
                    problem_link,
                    difficulty,
                })
            }
            _ => Err(DomainError::MissingField(
                "Missing required fields".to_string(),
            )),
        }
    }
}

/// Body of `POST /api/log-skip`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSkipRequest {
    pub user_id: Option<String>,
}

impl LogSkipRequest {
    pub fn into_command(self) -> Result<LogSkipCommand, DomainError> {
        non_blank(self.user_id)
            .map(|user_id| LogSkipCommand { user_id })
            .ok_or_else(|| DomainError::MissingField("User ID is required".to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogResponseDto<T> {
    pub message: String,
    pub data: T,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
