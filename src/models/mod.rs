pub mod client;
pub mod project;
pub mod session;
pub mod task;
pub mod user;

pub use client::Client;
pub use project::{Project, ProjectOverview};
pub use session::{Session, SessionUser};
pub use task::{Task, TaskWithProject};
pub use user::User;
