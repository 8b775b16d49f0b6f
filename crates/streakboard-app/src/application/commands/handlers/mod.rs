mod log_problem_handler;
mod log_skip_handler;


pub use log_problem_handler::LogProblemCommandHandler;
pub use log_skip_handler::LogSkipCommandHandler;
