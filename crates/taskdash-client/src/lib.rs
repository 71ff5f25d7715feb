pub mod client;
pub mod import;
pub mod resources;

pub use client::ApiClient;
pub use import::{JiraStubProvider, TicketImportProvider, IMPORTED_ASSIGNEE};
pub use resources::{ProjectResource, TaskResource, TeamMemberResource};
