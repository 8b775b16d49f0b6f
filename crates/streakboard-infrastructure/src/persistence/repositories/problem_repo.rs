use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::{format_date, parse_date};
use crate::persistence::SqliteRepositoryBase;
use streakboard_domain::problem::{Problem, ProblemRepository};
use streakboard_domain::shared::{DomainError, ProblemId, UserId};

const SELECT_COLUMNS: &str = r#"
    SELECT
        id,
        user_id,
        problem_name,
        problem_link,
        difficulty,
        created_at,
        local_date
    FROM problems
"#;

#[derive(FromRow)]
struct ProblemRow {
    id: String,
    user_id: String,
    problem_name: String,
    problem_link: String,
    difficulty: String,
    created_at: DateTime<Utc>,
    local_date: String,
}

impl ProblemRow {
    fn try_into_problem(self) -> Result<Problem, DomainError> {
        let difficulty = self.difficulty.parse().map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Invalid difficulty for problem {}: {}",
                self.id, self.difficulty
            ))
        })?;
        let local_date = parse_date(&self.local_date)?;

        Ok(Problem::restore(
            ProblemId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.problem_name,
            self.problem_link,
            difficulty,
            self.created_at,
            local_date,
        ))
    }
}

pub struct SqliteProblemRepository {
    base: SqliteRepositoryBase,
}

impl SqliteProblemRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl ProblemRepository for SqliteProblemRepository {
    async fn save(&self, problem: &Problem) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO problems (
                id,
                user_id,
                problem_name,
                problem_link,
                difficulty,
                created_at,
                local_date
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(problem.id().as_str())
                    .bind(problem.user_id().as_str())
                    .bind(problem.name())
                    .bind(problem.link())
                    .bind(problem.difficulty().as_str())
                    .bind(problem.created_at())
                    .bind(format_date(problem.local_date())),
                "Save problem",
            )
            .await?;

        Ok(())
    }

    async fn find_latest_by_user(&self, user_id: &UserId) -> Result<Option<Problem>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ?1 ORDER BY created_at DESC, rowid DESC LIMIT 1",
            SELECT_COLUMNS
        );

        let row: Option<ProblemRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query).bind(user_id.as_str()),
                "Find latest problem by user",
            )
            .await?;

        row.map(|r| r.try_into_problem()).transpose()
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u32, DomainError> {
        self.base
            .fetch_count(
                sqlx::query_scalar("SELECT COUNT(*) FROM problems WHERE user_id = ?1")
                    .bind(user_id.as_str()),
                "Count problems by user",
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
            FROM problems
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
                "Count problems by user in range",
            )
            .await
    }

    async fn list_all(&self) -> Result<Vec<Problem>, DomainError> {
        let query = format!("{} ORDER BY created_at ASC, rowid ASC", SELECT_COLUMNS);

        let rows: Vec<ProblemRow> = self
            .base
            .fetch_all(sqlx::query_as(&query), "List all problems")
            .await?;

        rows.into_iter().map(|r| r.try_into_problem()).collect()
    }

    async fn list_in_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Problem>, DomainError> {
        let query = format!(
            "{} WHERE local_date >= ?1 AND local_date <= ?2 ORDER BY created_at ASC, rowid ASC",
            SELECT_COLUMNS
        );

        let rows: Vec<ProblemRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(format_date(start_date))
                    .bind(format_date(end_date)),
                "List problems in range",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_problem()).collect()
    }
}
