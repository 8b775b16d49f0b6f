use async_trait::async_trait;
use log::warn;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::parse_date;
use crate::persistence::ResultExt;
use streakboard_domain::shared::{DomainError, UserId};
use streakboard_domain::streak::{ActivityDateSource, ActivityDates};

/// Distinct problem days per user, read straight from the `local_date` bucket.
pub struct SqliteActivityDateSource {
    pool: Arc<SqlitePool>,
}

impl SqliteActivityDateSource {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityDateSource for SqliteActivityDateSource {
    async fn fetch_distinct_dates(&self, user_id: &UserId) -> Result<ActivityDates, DomainError> {
        let query = r#"
            SELECT DISTINCT local_date
            FROM problems
            WHERE user_id = ?1
            ORDER BY local_date DESC
        "#;

        let values: Vec<String> = sqlx::query_scalar(query)
            .bind(user_id.as_str())
            .fetch_all(&*self.pool)
            .await
            .to_unavailable_err()?;

        let dates = values
            .iter()
            .filter_map(|value| match parse_date(value) {
                Ok(date) => Some(date),
                Err(e) => {
                    warn!(
                        "[streak] skip invalid date row user_id={} value={} err={}",
                        user_id, value, e
                    );
                    None
                }
            })
            .collect();

        Ok(ActivityDates::new(dates))
    }
}
