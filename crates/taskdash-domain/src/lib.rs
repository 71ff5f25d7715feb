pub mod field_update;
pub mod filter;
pub mod format;
pub mod forms;
pub mod group;
pub mod project;
pub mod query;
pub mod search;
pub mod settings;
pub mod sort;
pub mod stats;
pub mod task;
pub mod team_member;
pub mod timestamp;
pub mod view;

pub use field_update::FieldUpdate;
pub use filter::{CompositeFilter, PriorityFilter, StatusFilter, TaskFilter};
pub use forms::{FormStatus, ProjectDraft, TaskDraft, TeamMemberDraft};
pub use forms::{member_form::MEMBER_SAVE_FAILED, project_form::PROJECT_SAVE_FAILED, task_form::TASK_SAVE_FAILED};
pub use group::{group_tasks, GroupBy, TaskGroup, ALL_TASKS_LABEL};
pub use project::{NewProject, Project, ProjectId, ProjectUpdate};
pub use query::{
    filter_and_sort_projects, project_tasks, resolve_ids, ProjectQuery, TaskFilters, TaskProjection,
};
pub use search::{Searchable, TextSearcher};
pub use settings::{
    GeneralSettings, JiraConnection, NotificationSettings, SettingsKey, DEFAULT_JIRA_YAML,
};
pub use sort::ProjectSort;
pub use stats::TaskStats;
pub use task::{
    MemberRef, NewTask, ProjectRef, Task, TaskId, TaskPriority, TaskStatus, TaskUpdate,
    UNASSIGNED_LABEL,
};
pub use team_member::{MemberId, NewTeamMember, TeamMember, TeamMemberUpdate, MEMBER_ROLES};
pub use timestamp::Timestamp;
pub use view::{ProjectLayout, TaskLayout};
