use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::event_handlers::RefreshSignal;
use crate::application::queries::{CalendarQueries, StatsQueries};
use crate::presentation::state::{AppState, CommandHandlers, Queries};
use streakboard_domain::clock::{Clock, LocalCalendar};
use streakboard_domain::events::{ActivityLogged, EventBus, TypedEventHandlerWrapper};
use streakboard_domain::problem::ProblemRepository;
use streakboard_domain::shared::DomainError;
use streakboard_domain::skip::SkipRepository;
use streakboard_domain::streak::ActivityDateSource;
use streakboard_domain::user::UserRoster;
use streakboard_infrastructure::events::InMemoryEventBus;
use streakboard_infrastructure::persistence::repositories::{
    SqliteActivityDateSource, SqliteProblemRepository, SqliteSkipRepository,
};
use streakboard_infrastructure::{AppConfig, Database};

/// Migrate the database, then wire repositories, handlers and queries around it
pub async fn build_app_state(
    database: &Database,
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> Result<AppState, DomainError> {
    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "✓ Migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    let pool = Arc::new(database.pool().clone());
    let calendar = LocalCalendar::new(config.timezone, clock);
    let roster = Arc::new(UserRoster::default());

    let problem_repo =
        Arc::new(SqliteProblemRepository::new(pool.clone())) as Arc<dyn ProblemRepository>;
    let skip_repo = Arc::new(SqliteSkipRepository::new(pool.clone())) as Arc<dyn SkipRepository>;
    let activity_dates =
        Arc::new(SqliteActivityDateSource::new(pool.clone())) as Arc<dyn ActivityDateSource>;

    let refresh = RefreshSignal::new();
    let event_bus = Arc::new(InMemoryEventBus::new());
    event_bus
        .subscribe::<ActivityLogged>(Arc::new(TypedEventHandlerWrapper::<ActivityLogged, _>::new(
            refresh.handler(),
        )))
        .await;
    let event_bus = event_bus as Arc<dyn EventBus>;

    let command_handlers = CommandHandlers {
        log_problem: Arc::new(LogProblemCommandHandler::new(
            roster.clone(),
            problem_repo.clone(),
            event_bus.clone(),
            calendar.clone(),
        )),
        log_skip: Arc::new(LogSkipCommandHandler::new(
            roster.clone(),
            skip_repo.clone(),
            event_bus.clone(),
            calendar.clone(),
        )),
    };

    let queries = Queries {
        stats: Arc::new(StatsQueries::new(
            roster.clone(),
            problem_repo.clone(),
            skip_repo,
            activity_dates,
            calendar.clone(),
            config.challenge_start,
        )),
        calendar: Arc::new(CalendarQueries::new(roster, problem_repo, calendar.clone())),
    };

    info!(
        timezone = %config.timezone,
        today = %calendar.today(),
        challenge_start = %config.challenge_start,
        "✓ Application state ready"
    );

    Ok(AppState {
        queries,
        command_handlers,
        refresh,
    })
}
