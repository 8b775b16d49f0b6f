use chrono::NaiveDate;
use log::debug;

use crate::application::dtos::PlayerStatsDto;
use streakboard_domain::problem::ProblemRepository;
use streakboard_domain::shared::DomainError;
use streakboard_domain::skip::SkipRepository;
use streakboard_domain::streak::ActivityDateSource;
use streakboard_domain::user::User;

use super::streak;

/// Everything one stats request evaluates against
pub(super) struct StatsContext<'a> {
    pub problem_repo: &'a dyn ProblemRepository,
    pub skip_repo: &'a dyn SkipRepository,
    pub activity_dates: &'a dyn ActivityDateSource,
    pub today: NaiveDate,
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
}

pub(super) async fn get_player_stats(
    ctx: &StatsContext<'_>,
    user: &User,
) -> Result<PlayerStatsDto, DomainError> {
    let user_id = user.id();

    let (completed, completed_total, skipped, skipped_total, latest) = futures::try_join!(
        ctx.problem_repo
            .count_by_user_in_range(user_id, ctx.month_start, ctx.month_end),
        ctx.problem_repo.count_by_user(user_id),
        ctx.skip_repo
            .count_by_user_in_range(user_id, ctx.month_start, ctx.month_end),
        ctx.skip_repo.count_by_user(user_id),
        ctx.problem_repo.find_latest_by_user(user_id),
    )?;

    // Streak and completed-today read the same date set so they never disagree.
    let dates = streak::activity_dates(ctx.activity_dates, user_id, ctx.today).await;
    let current_streak = dates.current_streak(ctx.today);
    let completed_today = dates.contains(ctx.today);

    debug!(
        "[streak] player stats user_id={} completed={} total={} streak={}",
        user_id, completed, completed_total, current_streak
    );

    Ok(PlayerStatsDto {
        id: user_id.to_string(),
        name: user.name().to_string(),
        completed,
        completed_total,
        skipped,
        skipped_total,
        last_problem: latest.as_ref().map(|p| p.name().to_string()),
        last_problem_link: latest.as_ref().map(|p| p.link().to_string()),
        current_streak,
        completed_today_local: completed_today,
    })
}
