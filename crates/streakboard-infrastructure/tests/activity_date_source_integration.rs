use std::sync::Arc;

use streakboard_domain::problem::{Difficulty, ProblemRepository};
use streakboard_domain::shared::{DomainError, UserId};
use streakboard_domain::streak::ActivityDateSource;
use streakboard_infrastructure::persistence::repositories::{
    SqliteActivityDateSource, SqliteProblemRepository,
};

mod test_helpers;
use test_helpers::{date, problem};

#[tokio::test]
async fn activity_dates_are_distinct_and_descending() {
    let pool = test_helpers::setup_in_memory_db().await;
    let problems = SqliteProblemRepository::new(pool.clone());
    let source = SqliteActivityDateSource::new(pool);

    for (name, day) in [
        ("A", "2025-06-08"),
        ("B", "2025-06-10"),
        ("C", "2025-06-09"),
        ("D", "2025-06-10"),
        ("E", "2025-06-05"),
    ] {
        problems
            .save(&problem("1", name, Difficulty::Medium, day))
            .await
            .unwrap();
    }
    problems
        .save(&problem("2", "F", Difficulty::Easy, "2025-06-11"))
        .await
        .unwrap();

    let dates = source
        .fetch_distinct_dates(&UserId::from_string("1"))
        .await
        .unwrap();

    assert_eq!(
        dates.as_slice(),
        &[
            date("2025-06-10"),
            date("2025-06-09"),
            date("2025-06-08"),
            date("2025-06-05"),
        ]
    );
    assert_eq!(dates.current_streak(date("2025-06-10")), 3);
    assert_eq!(dates.current_streak(date("2025-06-11")), 3);
    assert_eq!(dates.current_streak(date("2025-06-12")), 0);
}

#[tokio::test]
async fn activity_dates_for_user_without_problems_is_empty() {
    let pool = test_helpers::setup_in_memory_db().await;
    let source = SqliteActivityDateSource::new(pool);

    let dates = source
        .fetch_distinct_dates(&UserId::from_string("2"))
        .await
        .unwrap();
    assert!(dates.is_empty());
}

#[tokio::test]
async fn closed_pool_reports_data_unavailable() {
    let pool = test_helpers::setup_in_memory_db().await;
    pool.close().await;
    let source = SqliteActivityDateSource::new(Arc::clone(&pool));

    let result = source.fetch_distinct_dates(&UserId::from_string("1")).await;
    assert!(matches!(result, Err(DomainError::DataUnavailable(_))));
}
