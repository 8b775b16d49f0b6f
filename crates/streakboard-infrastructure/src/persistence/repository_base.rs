use sqlx::query::{Query, QueryAs, QueryScalar};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::sync::Arc;
use streakboard_domain::shared::DomainError;

/// Shared plumbing for SQLite repositories: runs a query and tags failures
/// with the operation that was attempted.
#[derive(Clone)]
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query
            .execute(self.pool())
            .await
            .map_err(|e| repository_error(context, e))
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        query
            .fetch_optional(self.pool())
            .await
            .map_err(|e| repository_error(context, e))
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        query
            .fetch_all(self.pool())
            .await
            .map_err(|e| repository_error(context, e))
    }

    pub async fn fetch_scalar<'q, O>(
        &self,
        query: QueryScalar<'q, Sqlite, O, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<O, DomainError>
    where
        O: Send + Unpin,
        (O,): Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        query
            .fetch_one(self.pool())
            .await
            .map_err(|e| repository_error(context, e))
    }

    /// `COUNT(*)` results as the u32 counters the domain uses
    pub async fn fetch_count<'q>(
        &self,
        query: QueryScalar<'q, Sqlite, i64, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<u32, DomainError> {
        let count = self.fetch_scalar(query, context).await?;
        u32::try_from(count).map_err(|_| {
            DomainError::DataIntegrity(format!("{}: count out of range ({})", context, count))
        })
    }
}

fn repository_error(context: &str, err: sqlx::Error) -> DomainError {
    log::error!("[db] {} failed: {}", context, err);
    DomainError::Repository(format!("{}: {}", context, err))
}
