use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

use crate::shared::DomainError;


/// Civil timezone every "which day was it" question is answered in.
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Abstraction over "current time" to make behavior deterministic in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// The only place instants are turned into civil dates.
///
/// Streaks, "completed today", monthly buckets and the challenge day counter
/// all go through the same calendar so they can never disagree about the
/// current day, whatever the host timezone is.
#[derive(Clone)]
pub struct LocalCalendar {
    tz: Tz,
    clock: Arc<dyn Clock>,
}

impl LocalCalendar {
    pub fn new(tz: Tz, clock: Arc<dyn Clock>) -> Self {
        Self { tz, clock }
    }

    /// Build a calendar from an IANA timezone name
    pub fn from_name(name: &str, clock: Arc<dyn Clock>) -> Result<Self, DomainError> {
        let tz = parse_timezone(name)?;
        Ok(Self::new(tz, clock))
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Civil date of `instant` in the reference timezone
    pub fn local_date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.local_date_of(self.clock.now())
    }

    /// (year, month) of today's civil date
    pub fn current_month(&self) -> (i32, u32) {
        let today = self.today();
        (today.year(), today.month())
    }

    /// 1-based day number of a challenge that started on `start`; 0 before it starts.
    pub fn challenge_day(&self, start: NaiveDate) -> u32 {
        let elapsed = (self.today() - start).num_days();
        if elapsed < 0 {
            0
        } else {
            u32::try_from(elapsed + 1).unwrap_or(u32::MAX)
        }
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.parse::<Tz>()
        .map_err(|e| DomainError::Configuration(format!("Invalid timezone '{}': {}", name, e)))
}

/// First and last civil day of a month
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::Validation(format!("Invalid month: {}", month)));
    }

    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::Validation(format!("Invalid year: {}", year)))?;

    let first_day_next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last_day = first_day_next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| DomainError::Validation(format!("Invalid year: {}", year)))?;

    Ok((first_day, last_day))
}
