use chrono::NaiveDate;
use log::{info, warn};

use streakboard_domain::shared::{DomainError, UserId};
use streakboard_domain::streak::{ActivityDateSource, ActivityDates};

/// Distinct local activity dates for a user.
///
/// A failing date source never fails the dashboard: the user reads as having
/// no activity, so the streak is 0 and today is not completed.
pub(super) async fn activity_dates(
    source: &dyn ActivityDateSource,
    user_id: &UserId,
    today: NaiveDate,
) -> ActivityDates {
    let dates = match source.fetch_distinct_dates(user_id).await {
        Ok(dates) => dates,
        Err(e) => {
            log_fetch_failure(user_id, &e);
            ActivityDates::empty()
        }
    };

    info!(
        "[streak] activity dates user_id={} days={} most_recent={:?} today={}",
        user_id,
        dates.len(),
        dates.most_recent(),
        today
    );

    dates
}

fn log_fetch_failure(user_id: &UserId, error: &DomainError) {
    warn!(
        "[streak] activity dates unavailable user_id={} code={} error={}",
        user_id,
        error.code().code(),
        error
    );
}
