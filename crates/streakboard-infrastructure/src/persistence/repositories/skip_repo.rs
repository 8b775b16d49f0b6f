use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::format_date;
use crate::persistence::SqliteRepositoryBase;
use streakboard_domain::shared::{DomainError, UserId};
use streakboard_domain::skip::{Skip, SkipRepository};

pub struct SqliteSkipRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSkipRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl SkipRepository for SqliteSkipRepository {
    async fn save(&self, skip: &Skip) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO skips (id, user_id, created_at, local_date)
            VALUES (?1, ?2, ?3, ?4)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(skip.id().as_str())
                    .bind(skip.user_id().as_str())
                    .bind(skip.created_at())
                    .bind(format_date(skip.local_date())),
                "Save skip",
            )
            .await?;

        Ok(())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u32, DomainError> {
        self.base
            .fetch_count(
                sqlx::query_scalar("SELECT COUNT(*) FROM skips WHERE user_id = ?1")
                    .bind(user_id.as_str()),
                "Count skips by user",
            )
            .await
    }

    async fn count_by_user_in_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<u32, DomainError> {
        let query = r#"
            SELECT COUNT(*)
            FROM skips
            WHERE user_id = ?1
              AND local_date >= ?2
              AND local_date <= ?3
        "#;

        self.base
            .fetch_count(
                sqlx::query_scalar(query)
                    .bind(user_id.as_str())
                    .bind(format_date(start_date))
                    .bind(format_date(end_date)),
                "Count skips by user in range",
            )
            .await
    }
}
