mod aggregate;
mod repository;


pub use aggregate::{Difficulty, Problem};
pub use repository::ProblemRepository;
