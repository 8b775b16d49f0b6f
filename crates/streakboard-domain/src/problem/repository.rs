use async_trait::async_trait;
use chrono::NaiveDate;

use super::Problem;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait ProblemRepository: Send + Sync {
    /// Append a problem. Writes are plain inserts.
    async fn save(&self, problem: &Problem) -> Result<(), DomainError>;

    /// Most recently logged problem for a user.
    async fn find_latest_by_user(&self, user_id: &UserId) -> Result<Option<Problem>, DomainError>;

    async fn count_by_user(&self, user_id: &UserId) -> Result<u32, DomainError>;

    /// Count problems whose local date falls in `[start_date, end_date]`.
    async fn count_by_user_in_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<u32, DomainError>;

    /// Every problem, oldest first.
    async fn list_all(&self) -> Result<Vec<Problem>, DomainError>;

    /// Problems with a local date in `[start_date, end_date]`, oldest first.
    async fn list_in_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Problem>, DomainError>;
}
