/// Contests, rankings and ratings
pub mod contest;
/// Online IDE
pub mod ide;
/// Practice problems and tags
pub mod problem;
/// Countries, institutions and languages
pub mod reference;
/// Problem sets
pub mod set;
/// Submissions
pub mod submission;
/// Todo list
pub mod todo;
/// Users
pub mod user;

pub use contest::ContestService;
pub use ide::IdeService;
pub use problem::ProblemService;
pub use reference::ReferenceService;
pub use set::SetService;
pub use submission::SubmissionService;
pub use todo::TodoService;
pub use user::UserService;
