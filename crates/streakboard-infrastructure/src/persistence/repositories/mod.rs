pub mod activity_date_repo;
pub mod problem_repo;
pub mod skip_repo;

pub use activity_date_repo::SqliteActivityDateSource;
pub use problem_repo::SqliteProblemRepository;
pub use skip_repo::SqliteSkipRepository;

use chrono::NaiveDate;
use streakboard_domain::shared::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| DomainError::DataIntegrity(format!("Invalid local_date: {} ({})", value, e)))
}
