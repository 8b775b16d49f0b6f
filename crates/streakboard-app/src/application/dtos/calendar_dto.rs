use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserCountDto {
    pub user_id: String,
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayCountDto {
    pub date: String, // YYYY-MM-DD
    pub count: u32,
}

/// Problem totals for one local calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthStatsDto {
    pub year: i32,
    pub month: u32,
    pub total: u32,
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub by_user: Vec<UserCountDto>,
    pub days: Vec<DayCountDto>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}
