use chrono::NaiveDate;
use futures::future::try_join_all;
use log::info;
use std::sync::Arc;

use crate::application::dtos::{PlayerStatsDto, StatsResponseDto};
use streakboard_domain::clock::{month_range, LocalCalendar};
use streakboard_domain::problem::ProblemRepository;
use streakboard_domain::shared::DomainError;
use streakboard_domain::skip::SkipRepository;
use streakboard_domain::streak::ActivityDateSource;
use streakboard_domain::user::UserRoster;

mod player;
mod streak;


/// Read side of the dashboard's player table
pub struct StatsQueries {
    roster: Arc<UserRoster>,
    problem_repo: Arc<dyn ProblemRepository>,
    skip_repo: Arc<dyn SkipRepository>,
    activity_dates: Arc<dyn ActivityDateSource>,
    calendar: LocalCalendar,
    challenge_start: NaiveDate,
}

impl StatsQueries {
    pub fn new(
        roster: Arc<UserRoster>,
        problem_repo: Arc<dyn ProblemRepository>,
        skip_repo: Arc<dyn SkipRepository>,
        activity_dates: Arc<dyn ActivityDateSource>,
        calendar: LocalCalendar,
        challenge_start: NaiveDate,
    ) -> Self {
        Self {
            roster,
            problem_repo,
            skip_repo,
            activity_dates,
            calendar,
            challenge_start,
        }
    }

    /// Stats for every roster user, in roster order.
    ///
    /// `today` is read once so all users are evaluated against the same day.
    pub async fn get_all_player_stats(&self) -> Result<StatsResponseDto, DomainError> {
        let today = self.calendar.today();
        let (year, month) = self.calendar.current_month();
        let (month_start, month_end) = month_range(year, month)?;

        let context = player::StatsContext {
            problem_repo: self.problem_repo.as_ref(),
            skip_repo: self.skip_repo.as_ref(),
            activity_dates: self.activity_dates.as_ref(),
            today,
            month_start,
            month_end,
        };

        let users: Vec<PlayerStatsDto> = try_join_all(
            self.roster
                .users()
                .iter()
                .map(|user| player::get_player_stats(&context, user)),
        )
        .await?;

        info!(
            "[streak] get_all_player_stats users={} today={}",
            users.len(),
            today
        );

        Ok(StatsResponseDto {
            users,
            challenge_day: self.calendar.challenge_day(self.challenge_start),
            today: today.format("%Y-%m-%d").to_string(),
        })
    }
}
