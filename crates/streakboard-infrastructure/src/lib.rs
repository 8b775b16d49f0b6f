// Infrastructure layer - Technical implementations
// Depends on domain layer, implements its interfaces

pub mod config;
pub mod events;
pub mod logging;
pub mod persistence;

pub use config::AppConfig;
pub use persistence::{Database, ResultExt, SqliteRepositoryBase};
