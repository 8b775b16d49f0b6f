use serde::{Deserialize, Serialize};

/// One row of the dashboard's player table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsDto {
    pub id: String,
    pub name: String,
    pub completed: u32,       // this local month
    pub completed_total: u32, // all time
    pub skipped: u32,         // this local month
    pub skipped_total: u32,
    pub last_problem: Option<String>,
    pub last_problem_link: Option<String>,
    pub current_streak: u32,
    pub completed_today_local: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponseDto {
    pub users: Vec<PlayerStatsDto>,
    pub challenge_day: u32,
    pub today: String, // YYYY-MM-DD in the reference timezone
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshDto {
    pub refresh_key: u64,
}
