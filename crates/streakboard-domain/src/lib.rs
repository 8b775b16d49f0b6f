// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod clock;
pub mod events;
pub mod problem;
pub mod shared;
pub mod skip;
pub mod streak;
pub mod user;

// Re-exports for convenience
pub use clock::{Clock, LocalCalendar};
pub use events::DomainEvent;
pub use shared::{DomainError, ProblemId, SkipId, UserId};
pub use streak::{compute_streak, ActivityDateSource, ActivityDates};
