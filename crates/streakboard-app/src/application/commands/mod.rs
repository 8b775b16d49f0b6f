pub mod activity_commands;
pub mod command_handler;
pub mod handlers;

pub use activity_commands::{LogProblemCommand, LogProblemResult, LogSkipCommand, LogSkipResult};
pub use command_handler::{Command, CommandHandler};
