use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::{DomainError, ProblemId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::Validation(format!(
                "Unknown difficulty: {}",
                other
            ))),
        }
    }
}

/// A completed practice problem.
///
/// `local_date` is the civil date in the reference timezone at the moment the
/// problem was logged; it is fixed at write time so day-bucketed queries never
/// have to redo timezone conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    id: ProblemId,
    user_id: UserId,
    name: String,
    link: String,
    difficulty: Difficulty,
    created_at: DateTime<Utc>,
    local_date: NaiveDate,
}

impl Problem {
    pub fn new(
        user_id: UserId,
        name: &str,
        link: &str,
        difficulty: Difficulty,
        created_at: DateTime<Utc>,
        local_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        let link = link.trim();

        if name.is_empty() {
            return Err(DomainError::Validation(
                "Problem name cannot be empty".to_string(),
            ));
        }
        if link.is_empty() {
            return Err(DomainError::Validation(
                "Problem link cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: ProblemId::new(),
            user_id,
            name: name.to_string(),
            link: link.to_string(),
            difficulty,
            created_at,
            local_date,
        })
    }

    pub fn restore(
        id: ProblemId,
        user_id: UserId,
        name: String,
        link: String,
        difficulty: Difficulty,
        created_at: DateTime<Utc>,
        local_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            link,
            difficulty,
            created_at,
            local_date,
        }
    }

    pub fn id(&self) -> &ProblemId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn local_date(&self) -> NaiveDate {
        self.local_date
    }
}
