use super::Command;
use crate::application::dtos::{ProblemDto, SkipDto};

/// Log a solved problem for one of the roster users
#[derive(Debug, Clone)]
pub struct LogProblemCommand {
    pub user_id: String,
    pub problem_name: String,
    pub problem_link: String,
    pub difficulty: String,
}

impl Command for LogProblemCommand {}

#[derive(Debug, Clone)]
pub struct LogProblemResult {
    pub problem: ProblemDto,
}

/// Spend a skip day
#[derive(Debug, Clone)]
pub struct LogSkipCommand {
    pub user_id: String,
}

impl Command for LogSkipCommand {}

#[derive(Debug, Clone)]
pub struct LogSkipResult {
    pub skip: SkipDto,
}
