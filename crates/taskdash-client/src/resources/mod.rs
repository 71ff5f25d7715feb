//! Typed resource clients.
//!
//! One trait per backend resource so page code can be exercised against
//! in-memory doubles. [`ApiClient`](crate::ApiClient) implements all three.

mod projects;
mod tasks;
mod team_members;

pub use projects::ProjectResource;
pub use tasks::TaskResource;
pub use team_members::TeamMemberResource;
