mod contest_service;
mod ide_service;
mod problem_service;
mod reference_service;
mod set_service;
mod submission_service;
mod todo_service;
mod user_service;

pub use crate::application::interfaces::*;
