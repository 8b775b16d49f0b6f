mod activity_dates;
mod calculator;
mod source;


pub use activity_dates::ActivityDates;
pub use calculator::compute_streak;
pub use source::ActivityDateSource;
