mod activity_dto;
mod calendar_dto;
mod stats_dto;

pub use activity_dto::*;
pub use calendar_dto::*;
pub use stats_dto::*;
