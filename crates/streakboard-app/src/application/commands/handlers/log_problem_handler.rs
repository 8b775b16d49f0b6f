use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::activity_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::dtos::ProblemDto;
use streakboard_domain::clock::LocalCalendar;
use streakboard_domain::events::{ActivityKind, ActivityLogged, EventBus};
use streakboard_domain::problem::{Difficulty, Problem, ProblemRepository};
use streakboard_domain::shared::DomainError;
use streakboard_domain::user::UserRoster;

/// Records a completed problem for one of the roster's users
pub struct LogProblemCommandHandler {
    roster: Arc<UserRoster>,
    problem_repo: Arc<dyn ProblemRepository>,
    event_bus: Arc<dyn EventBus>,
    calendar: LocalCalendar,
}

impl LogProblemCommandHandler {
    pub fn new(
        roster: Arc<UserRoster>,
        problem_repo: Arc<dyn ProblemRepository>,
        event_bus: Arc<dyn EventBus>,
        calendar: LocalCalendar,
    ) -> Self {
        Self {
            roster,
            problem_repo,
            event_bus,
            calendar,
        }
    }
}

#[async_trait]
impl CommandHandler<LogProblemCommand> for LogProblemCommandHandler {
    type Result = LogProblemResult;

    async fn handle(&self, cmd: LogProblemCommand) -> Result<Self::Result, DomainError> {
        info!(
            "Handling LogProblemCommand for user {}: {}",
            cmd.user_id, cmd.problem_name
        );

        let user = self.roster.require(cmd.user_id.trim())?;
        let difficulty: Difficulty = cmd.difficulty.parse()?;

        // The civil day is fixed at write time so later reads never re-derive it
        let created_at = self.calendar.now();
        let local_date = self.calendar.local_date_of(created_at);

        let problem = Problem::new(
            user.id().clone(),
            &cmd.problem_name,
            &cmd.problem_link,
            difficulty,
            created_at,
            local_date,
        )?;

        self.problem_repo.save(&problem).await?;

        info!(
            "Problem logged: {} ({}) for {} on {}",
            problem.name(),
            problem.difficulty(),
            user.name(),
            local_date
        );

        let event = ActivityLogged {
            user_id: user.id().clone(),
            kind: ActivityKind::Problem,
            local_date,
            occurred_at: created_at,
        };

        // The row is already stored; a failed notification only delays refresh
        if let Err(e) = self.event_bus.publish(Box::new(event)).await {
            warn!("Failed to publish ActivityLogged for {}: {}", user.id(), e);
        }

        Ok(LogProblemResult {
            problem: ProblemDto::from(&problem),
        })
    }
}
