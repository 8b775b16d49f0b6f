use log::{debug, info};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::dtos::{DayCountDto, MonthStatsDto, ProblemDto, UserCountDto};
use streakboard_domain::clock::{month_range, LocalCalendar};
use streakboard_domain::problem::{Difficulty, ProblemRepository};
use streakboard_domain::shared::DomainError;
use streakboard_domain::user::UserRoster;

/// Calendar view: every logged problem, and per-month totals
pub struct CalendarQueries {
    roster: Arc<UserRoster>,
    problem_repo: Arc<dyn ProblemRepository>,
    calendar: LocalCalendar,
}

impl CalendarQueries {
    pub fn new(
        roster: Arc<UserRoster>,
        problem_repo: Arc<dyn ProblemRepository>,
        calendar: LocalCalendar,
    ) -> Self {
        Self {
            roster,
            problem_repo,
            calendar,
        }
    }

    /// All problems, oldest first
    pub async fn list_calendar_problems(&self) -> Result<Vec<ProblemDto>, DomainError> {
        let problems = self.problem_repo.list_all().await?;
        info!("[calendar] list_calendar_problems rows={}", problems.len());
        Ok(problems.iter().map(ProblemDto::from).collect())
    }

    /// Totals for a local calendar month; `None` parts default to the current month
    pub async fn get_month_stats(
        &self,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<MonthStatsDto, DomainError> {
        let (current_year, current_month) = self.calendar.current_month();
        let year = year.unwrap_or(current_year);
        let month = month.unwrap_or(current_month);

        let (first_day, last_day) = month_range(year, month)?;
        let problems = self.problem_repo.list_in_range(first_day, last_day).await?;

        if problems.is_empty() {
            debug!(
                "[calendar] month stats empty result month={:04}-{:02}",
                year, month
            );
        }

        let mut easy = 0;
        let mut medium = 0;
        let mut hard = 0;
        let mut per_user: BTreeMap<&str, u32> = BTreeMap::new();
        let mut per_day: BTreeMap<_, u32> = BTreeMap::new();

        for problem in &problems {
            match problem.difficulty() {
                Difficulty::Easy => easy += 1,
                Difficulty::Medium => medium += 1,
                Difficulty::Hard => hard += 1,
            }
            *per_user.entry(problem.user_id().as_str()).or_default() += 1;
            *per_day.entry(problem.local_date()).or_default() += 1;
        }

        let by_user = self
            .roster
            .users()
            .iter()
            .map(|user| UserCountDto {
                user_id: user.id().to_string(),
                name: user.name().to_string(),
                count: per_user.get(user.id().as_str()).copied().unwrap_or(0),
            })
            .collect();

        let days = per_day
            .into_iter()
            .map(|(date, count)| DayCountDto {
                date: date.format("%Y-%m-%d").to_string(),
                count,
            })
            .collect();

        info!(
            "[calendar] month stats month={:04}-{:02} total={} easy={} medium={} hard={}",
            year,
            month,
            problems.len(),
            easy,
            medium,
            hard
        );

        Ok(MonthStatsDto {
            year,
            month,
            total: problems.len() as u32,
            easy,
            medium,
            hard,
            by_user,
            days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use chrono::{DateTime, NaiveDate, Utc};
    use streakboard_domain::problem::Problem;
    use streakboard_domain::shared::UserId;

    async fn add(
        repo: &InMemoryProblemRepository,
        user: &str,
        difficulty: Difficulty,
        local_date: NaiveDate,
        at: DateTime<Utc>,
    ) {
        let problem = Problem::new(
            UserId::from_string(user),
            "Problem",
            "https://leetcode.com/problems/x/",
            difficulty,
            at,
            local_date,
        )
        .unwrap();
        repo.save(&problem).await.unwrap();
    }

    fn queries(repo: Arc<InMemoryProblemRepository>) -> CalendarQueries {
        CalendarQueries::new(
            Arc::new(UserRoster::default()),
            repo,
            calendar_at(utc(2025, 6, 15, 18, 0)),
        )
    }

    #[tokio::test]
    async fn test_month_stats_groups_by_difficulty_user_and_day() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        add(&repo, "1", Difficulty::Easy, date(2025, 6, 1), utc(2025, 6, 1, 18, 0)).await;
        add(&repo, "1", Difficulty::Hard, date(2025, 6, 1), utc(2025, 6, 1, 19, 0)).await;
        add(&repo, "2", Difficulty::Medium, date(2025, 6, 3), utc(2025, 6, 3, 18, 0)).await;
        // Belongs to May in Los Angeles even though it is June in UTC
        add(&repo, "2", Difficulty::Easy, date(2025, 5, 31), utc(2025, 6, 1, 3, 0)).await;

        let stats = queries(repo).get_month_stats(None, None).await.unwrap();

        assert_eq!((stats.year, stats.month), (2025, 6));
        assert_eq!(stats.total, 3);
        assert_eq!((stats.easy, stats.medium, stats.hard), (1, 1, 1));
        assert_eq!(stats.by_user[0].name, "Noah");
        assert_eq!(stats.by_user[0].count, 2);
        assert_eq!(stats.by_user[1].count, 1);
        assert_eq!(
            stats.days,
            vec![
                DayCountDto {
                    date: "2025-06-01".to_string(),
                    count: 2
                },
                DayCountDto {
                    date: "2025-06-03".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_month_stats_for_explicit_month() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        add(&repo, "2", Difficulty::Easy, date(2025, 5, 31), utc(2025, 6, 1, 3, 0)).await;

        let stats = queries(repo).get_month_stats(Some(2025), Some(5)).await.unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.by_user[1].count, 1);
    }

    #[tokio::test]
    async fn test_month_stats_for_empty_month_is_all_zero() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        add(&repo, "1", Difficulty::Hard, date(2025, 6, 1), utc(2025, 6, 1, 18, 0)).await;

        let stats = queries(repo).get_month_stats(Some(2025), Some(4)).await.unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!((stats.easy, stats.medium, stats.hard), (0, 0, 0));
        assert_eq!(stats.by_user.len(), 2);
        assert!(stats.by_user.iter().all(|u| u.count == 0));
        assert!(stats.days.is_empty());
    }

    #[tokio::test]
    async fn test_month_stats_rejects_invalid_month() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        let result = queries(repo).get_month_stats(Some(2025), Some(13)).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_calendar_problems_oldest_first() {
        let repo = Arc::new(InMemoryProblemRepository::new());
        add(&repo, "1", Difficulty::Hard, date(2025, 6, 3), utc(2025, 6, 3, 18, 0)).await;
        add(&repo, "2", Difficulty::Easy, date(2025, 6, 1), utc(2025, 6, 1, 18, 0)).await;

        let problems = queries(repo).list_calendar_problems().await.unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].local_date, "2025-06-01");
        assert_eq!(problems[1].local_date, "2025-06-03");
    }
}
