use chrono::NaiveDate;

use super::compute_streak;

/// Distinct activity days, most recent first.
///
/// Construction sorts and deduplicates, so [`compute_streak`] always sees a
/// well-formed list no matter what the data source returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDates(Vec<NaiveDate>);

impl ActivityDates {
    pub fn new(mut dates: Vec<NaiveDate>) -> Self {
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();
        Self(dates)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.0
    }

    pub fn most_recent(&self) -> Option<NaiveDate> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.binary_search_by(|entry| date.cmp(entry)).is_ok()
    }

    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        compute_streak(&self.0, today)
    }
}

impl From<Vec<NaiveDate>> for ActivityDates {
    fn from(dates: Vec<NaiveDate>) -> Self {
        Self::new(dates)
    }
}

impl FromIterator<NaiveDate> for ActivityDates {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
