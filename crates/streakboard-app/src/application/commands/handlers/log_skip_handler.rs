use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::activity_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::dtos::SkipDto;
use streakboard_domain::clock::LocalCalendar;
use streakboard_domain::events::{ActivityKind, ActivityLogged, EventBus};
use streakboard_domain::shared::DomainError;
use streakboard_domain::skip::{Skip, SkipRepository};
use streakboard_domain::user::UserRoster;

pub struct LogSkipCommandHandler {
    roster: Arc<UserRoster>,
    skip_repo: Arc<dyn SkipRepository>,
    event_bus: Arc<dyn EventBus>,
    calendar: LocalCalendar,
}

impl LogSkipCommandHandler {
    pub fn new(
        roster: Arc<UserRoster>,
        skip_repo: Arc<dyn SkipRepository>,
        event_bus: Arc<dyn EventBus>,
        calendar: LocalCalendar,
    ) -> Self {
        Self {
            roster,
            skip_repo,
            event_bus,
            calendar,
        }
    }
}

#[async_trait]
impl CommandHandler<LogSkipCommand> for LogSkipCommandHandler {
    type Result = LogSkipResult;

    async fn handle(&self, cmd: LogSkipCommand) -> Result<Self::Result, DomainError> {
        info!("Handling LogSkipCommand for user {}", cmd.user_id);

        let user = self.roster.require(cmd.user_id.trim())?;

        let created_at = self.calendar.now();
        let local_date = self.calendar.local_date_of(created_at);
        let skip = Skip::new(user.id().clone(), created_at, local_date);

        self.skip_repo.save(&skip).await?;

        info!("Skip logged for {} on {}", user.name(), local_date);

        let event = ActivityLogged {
            user_id: user.id().clone(),
            kind: ActivityKind::Skip,
            local_date,
            occurred_at: created_at,
        };

        if let Err(e) = self.event_bus.publish(Box::new(event)).await {
            warn!("Failed to publish ActivityLogged for {}: {}", user.id(), e);
        }

        Ok(LogSkipResult {
            skip: SkipDto::from(&skip),
        })
    }
}
