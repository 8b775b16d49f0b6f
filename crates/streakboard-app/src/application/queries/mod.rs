pub mod calendar_queries;
pub mod stats_queries;

pub use calendar_queries::CalendarQueries;
pub use stats_queries::StatsQueries;
