use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::event_handlers::RefreshSignal;
use crate::application::queries::{CalendarQueries, StatsQueries};

/// Command handlers container
pub struct CommandHandlers {
    pub log_problem: Arc<LogProblemCommandHandler>,
    pub log_skip: Arc<LogSkipCommandHandler>,
}

pub struct Queries {
    pub stats: Arc<StatsQueries>,
    pub calendar: Arc<CalendarQueries>,
}

/// Everything a request handler can reach
pub struct AppState {
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
    pub refresh: RefreshSignal,
}
