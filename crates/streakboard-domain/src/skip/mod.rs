use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, SkipId, UserId};

/// A day a user chose to skip instead of solving a problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skip {
    id: SkipId,
    user_id: UserId,
    created_at: DateTime<Utc>,
    local_date: NaiveDate,
}

impl Skip {
    pub fn new(user_id: UserId, created_at: DateTime<Utc>, local_date: NaiveDate) -> Self {
        Self {
            id: SkipId::new(),
            user_id,
            created_at,
            local_date,
        }
    }

    pub fn restore(
        id: SkipId,
        user_id: UserId,
        created_at: DateTime<Utc>,
        local_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            user_id,
            created_at,
            local_date,
        }
    }

    pub fn id(&self) -> &SkipId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn local_date(&self) -> NaiveDate {
        self.local_date
    }
}

#[async_trait]
pub trait SkipRepository: Send + Sync {
    async fn save(&self, skip: &Skip) -> Result<(), DomainError>;

    async fn count_by_user(&self, user_id: &UserId) -> Result<u32, DomainError>;

    /// Count skips whose local date falls in `[start_date, end_date]`.
    async fn count_by_user_in_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<u32, DomainError>;
}
