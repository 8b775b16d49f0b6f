//! In-memory fakes shared by the application layer's unit tests.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use streakboard_domain::clock::{FixedClock, LocalCalendar};
use streakboard_domain::events::{DomainEvent, EventBus};
use streakboard_domain::problem::{Problem, ProblemRepository};
use streakboard_domain::shared::{DomainError, UserId};
use streakboard_domain::skip::{Skip, SkipRepository};
use streakboard_domain::streak::{ActivityDateSource, ActivityDates};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// Los Angeles calendar frozen at the given UTC instant
pub fn calendar_at(now: DateTime<Utc>) -> LocalCalendar {
    LocalCalendar::new(chrono_tz::America::Los_Angeles, Arc::new(FixedClock::new(now)))
}


#[derive(Default)]
pub struct InMemoryProblemRepository {
    problems: RwLock<Vec<Problem>>,
}

impl InMemoryProblemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.problems.read().await.len()
    }
}

#[async_trait]
impl ProblemRepository for InMemoryProblemRepository {
    async fn save(&self, problem: &Problem) -> Result<(), DomainError> {
        self.problems.write().await.push(problem.clone());
        Ok(())
    }

    async fn find_latest_by_user(&self, user_id: &UserId) -> Result<Option<Problem>, DomainError> {
        let problems = self.problems.read().await;
        Ok(problems
            .iter()
            .filter(|p| p.user_id() == user_id)
            .max_by_key(|p| p.created_at())
            .cloned())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u32, DomainError> {
        let problems = self.problems.read().await;
        Ok(problems.iter().filter(|p| p.user_id() == user_id).count() as u32)
    }

    async fn count_by_user_in_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<u32, DomainError> {
        let problems = self.problems.read().await;
        Ok(problems
            .iter()
            .filter(|p| p.user_id() == user_id)
            .filter(|p| p.local_date() >= start_date && p.local_date() <= end_date)
            .count() as u32)
    }

    async fn list_all(&self) -> Result<Vec<Problem>, DomainError> {
        let mut problems = self.problems.read().await.clone();
        problems.sort_by_key(|p| p.created_at());
        Ok(problems)
    }

    async fn list_in_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Problem>, DomainError> {
        let mut problems: Vec<Problem> = self
            .problems
            .read()
            .await
            .iter()
            .filter(|p| p.local_date() >= start_date && p.local_date() <= end_date)
            .cloned()
            .collect();
        problems.sort_by_key(|p| p.created_at());
        Ok(problems)
    }
}

/// Distinct dates straight from the fake problem store
#[async_trait]
impl ActivityDateSource for InMemoryProblemRepository {
    async fn fetch_distinct_dates(&self, user_id: &UserId) -> Result<ActivityDates, DomainError> {
        let problems = self.problems.read().await;
        Ok(problems
            .iter()
            .filter(|p| p.user_id() == user_id)
            .map(|p| p.local_date())
            .collect())
    }
}

#[derive(Default)]
pub struct InMemorySkipRepository {
    skips: RwLock<Vec<Skip>>,
}

impl InMemorySkipRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.skips.read().await.len()
    }
}

#[async_trait]
impl SkipRepository for InMemorySkipRepository {
    async fn save(&self, skip: &Skip) -> Result<(), DomainError> {
        self.skips.write().await.push(skip.clone());
        Ok(())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u32, DomainError> {
        let skips = self.skips.read().await;
        Ok(skips.iter().filter(|s| s.user_id() == user_id).count() as u32)
    }

    async fn count_by_user_in_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<u32, DomainError> {
        let skips = self.skips.read().await;
        Ok(skips
            .iter()
            .filter(|s| s.user_id() == user_id)
            .filter(|s| s.local_date() >= start_date && s.local_date() <= end_date)
            .count() as u32)
    }
}

/// Counts published events
pub struct CountingEventBus {
    event_count: RwLock<usize>,
}

impl CountingEventBus {
    pub fn new() -> Self {
        Self {
            event_count: RwLock::new(0),
        }
    }

    pub async fn get_event_count(&self) -> usize {
        *self.event_count.read().await
    }
}

#[async_trait]
impl EventBus for CountingEventBus {
    async fn publish(&self, _event: Box<dyn DomainEvent>) -> Result<(), DomainError> {
        *self.event_count.write().await += 1;
        Ok(())
    }
}
