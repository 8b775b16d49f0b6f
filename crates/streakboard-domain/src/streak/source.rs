use async_trait::async_trait;

use super::ActivityDates;
use crate::shared::{DomainError, UserId};

/// Supplies the civil dates on which a user logged at least one problem.
#[async_trait]
pub trait ActivityDateSource: Send + Sync {
    /// Distinct local-timezone dates for `user_id`, most recent first.
    ///
    /// Fails with [`DomainError::DataUnavailable`] when the backing store
    /// cannot be queried.
    async fn fetch_distinct_dates(&self, user_id: &UserId) -> Result<ActivityDates, DomainError>;
}
