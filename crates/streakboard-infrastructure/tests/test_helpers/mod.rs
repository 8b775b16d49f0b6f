#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use streakboard_domain::problem::{Difficulty, Problem};
use streakboard_domain::shared::UserId;
use streakboard_domain::skip::Skip;
use streakboard_infrastructure::Database;

pub async fn setup_in_memory_db() -> Arc<SqlitePool> {
    let database = Database::in_memory().await.expect("open in-memory db");
    database.run_migrations().await.expect("run migrations");
    Arc::new(database.pool().clone())
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Noon UTC on the given day; the local date is passed separately.
pub fn noon_utc(s: &str) -> DateTime<Utc> {
    let d = date(s);
    Utc.from_utc_datetime(&d.and_hms_opt(12, 0, 0).expect("valid time"))
}

pub fn problem(user: &str, name: &str, difficulty: Difficulty, local_date: &str) -> Problem {
    Problem::new(
        UserId::from_string(user),
        name,
        &format!("https://leetcode.com/problems/{}/", name.to_lowercase().replace(' ', "-")),
        difficulty,
        noon_utc(local_date),
        date(local_date),
    )
    .expect("valid problem")
}

pub fn skip(user: &str, local_date: &str) -> Skip {
    Skip::new(UserId::from_string(user), noon_utc(local_date), date(local_date))
}
