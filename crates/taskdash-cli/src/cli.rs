use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskdash_core::config::{API_URL_ENV, SETTINGS_ENV};
use taskdash_domain::{GroupBy, ProjectSort};

#[derive(Parser)]
#[command(name = "taskdash")]
#[command(about = "Terminal dashboard and CLI for a task management backend", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Base URL of the REST API, including the /api prefix
    #[arg(long, global = true, value_name = "URL", env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Path of the local settings file
    #[arg(long, global = true, value_name = "FILE", env = SETTINGS_ENV)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Task operations
    Task(TaskCommand),
    /// Project operations
    Project(ProjectCommand),
    /// Team member operations
    Member(MemberCommand),
    /// Create a task from a JIRA ticket id
    Import {
        #[arg(long)]
        ticket: String,
    },
    /// Local settings
    Settings(SettingsCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks, optionally filtered and grouped
    List(TaskListArgs),
    /// Create a new task
    Create(TaskCreateArgs),
    /// Update the given fields of a task
    Update(TaskUpdateArgs),
    /// Change only the status of a task
    Status {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        status: String,
    },
    /// Delete a task
    Delete {
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Task counts by status
    Stats,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GroupByArg {
    None,
    Status,
    Priority,
    Assignee,
}

impl From<GroupByArg> for GroupBy {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::None => GroupBy::None,
            GroupByArg::Status => GroupBy::Status,
            GroupByArg::Priority => GroupBy::Priority,
            GroupByArg::Assignee => GroupBy::Assignee,
        }
    }
}

#[derive(Args)]
pub struct TaskListArgs {
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    /// Case-insensitive match on title and description
    #[arg(long)]
    pub search: Option<String>,
    /// Return groups instead of a flat list
    #[arg(long, value_enum)]
    pub group_by: Option<GroupByArg>,
}

#[derive(Args)]
pub struct TaskCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, default_value = "medium")]
    pub priority: String,
    #[arg(long, default_value = "todo")]
    pub status: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due_date: Option<String>,
    #[arg(long)]
    pub project_id: Option<i64>,
    #[arg(long)]
    pub member_id: Option<i64>,
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub id: i64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(long, conflicts_with = "clear_due_date")]
    pub due_date: Option<String>,
    #[arg(long)]
    pub clear_due_date: bool,
    #[arg(long, conflicts_with = "clear_project")]
    pub project_id: Option<i64>,
    #[arg(long)]
    pub clear_project: bool,
    #[arg(long, conflicts_with = "unassign")]
    pub member_id: Option<i64>,
    #[arg(long)]
    pub unassign: bool,
}

// Project commands
#[derive(Args)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ProjectSortArg {
    Name,
    Created,
    Tasks,
}

impl From<ProjectSortArg> for ProjectSort {
    fn from(arg: ProjectSortArg) -> Self {
        match arg {
            ProjectSortArg::Name => ProjectSort::Name,
            ProjectSortArg::Created => ProjectSort::CreatedAt,
            ProjectSortArg::Tasks => ProjectSort::TaskCount,
        }
    }
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List projects
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum, default_value = "created")]
        sort: ProjectSortArg,
    },
    /// Create a new project
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a project
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a project
    Delete {
        #[arg(long)]
        id: i64,
        #[arg(long, short)]
        yes: bool,
    },
}

// Member commands
#[derive(Args)]
pub struct MemberCommand {
    #[command(subcommand)]
    pub action: MemberAction,
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// List team members
    List,
    /// Add a team member
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "Developer")]
        role: String,
    },
    /// Update a team member
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Remove a team member
    Delete {
        #[arg(long)]
        id: i64,
        #[arg(long, short)]
        yes: bool,
    },
}

// Settings commands
#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub action: SettingsAction,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show every setting, with defaults for unsaved keys
    Show,
    /// Show only the settings stored in the file, as saved
    List,
    /// Show one setting
    Get {
        #[arg(long)]
        key: String,
    },
    /// Store a setting. Structured keys take a JSON object.
    Set {
        #[arg(long)]
        key: String,
        #[arg(long)]
        value: String,
    },
    /// Forget a stored setting
    Reset {
        #[arg(long)]
        key: String,
    },
    /// Print the settings file location
    Path,
}
