use crate::cli::{TaskAction, TaskCreateArgs, TaskListArgs, TaskUpdateArgs};
use crate::context::CliContext;
use crate::handlers::require_confirmation;
use crate::output;
use serde_json::json;
use taskdash_client::TaskResource;
use taskdash_domain::{
    project_tasks, FieldUpdate, GroupBy, NewTask, TaskFilters, TaskPriority, TaskStatus, TaskUpdate,
    Timestamp,
};

pub async fn handle(ctx: &CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::List(args) => handle_list(ctx, args).await?,
        TaskAction::Create(args) => {
            let task = ctx.api.create(build_new_task(args)?).await?;
            output::output_success(&task);
        }
        TaskAction::Update(args) => {
            let id = args.id;
            let update = build_update(args)?;
            if update.is_empty() {
                output::output_error("Nothing to update");
            }
            let task = ctx.api.patch(id, update).await?;
            output::output_success(&task);
        }
        TaskAction::Status { id, status } => {
            let status = TaskStatus::parse(&status)?;
            let task = ctx.api.update_status(id, status).await?;
            output::output_success(&task);
        }
        TaskAction::Delete { id, yes } => {
            require_confirmation("Are you sure you want to delete this task?", yes)?;
            TaskResource::remove(&ctx.api, id).await?;
            output::output_success(json!({ "deleted": id }));
        }
        TaskAction::Stats => {
            let stats = ctx.api.stats().await?;
            output::output_success(json!({
                "total": stats.total,
                "todo": stats.todo,
                "inProgress": stats.in_progress,
                "completed": stats.completed,
                "completionPercent": stats.completion_percent(),
            }));
        }
    }
    Ok(())
}

async fn handle_list(ctx: &CliContext, args: TaskListArgs) -> anyhow::Result<()> {
    let filters = TaskFilters {
        status: args.status.as_deref().map(TaskStatus::parse).transpose()?,
        priority: args.priority.as_deref().map(TaskPriority::parse).transpose()?,
        search: args.search.unwrap_or_default(),
    };
    let tasks = TaskResource::list(&ctx.api).await?;
    let group_by = args.group_by.map(GroupBy::from);
    let projection = project_tasks(&tasks, &filters, group_by.unwrap_or(GroupBy::None));

    match group_by {
        None => output::output_list(projection.resolve(&tasks)),
        Some(_) => {
            let groups: Vec<_> = projection
                .groups
                .iter()
                .map(|group| {
                    let members = taskdash_domain::resolve_ids(&group.task_ids, &tasks);
                    json!({ "label": group.label, "count": members.len(), "tasks": members })
                })
                .collect();
            output::output_list(groups);
        }
    }
    Ok(())
}

fn build_new_task(args: TaskCreateArgs) -> anyhow::Result<NewTask> {
    let title = args.title.trim();
    if title.is_empty() {
        anyhow::bail!("Title is required");
    }
    let mut task = NewTask::new(title);
    task.description = args.description.filter(|d| !d.trim().is_empty());
    task.priority = TaskPriority::parse(&args.priority)?;
    task.status = TaskStatus::parse(&args.status)?;
    task.due_date = args.due_date.map(Timestamp::new);
    task.project_id = args.project_id;
    task.team_member_id = args.member_id;
    Ok(task)
}

fn build_update(args: TaskUpdateArgs) -> anyhow::Result<TaskUpdate> {
    let due_date = match (args.due_date, args.clear_due_date) {
        (Some(date), _) => FieldUpdate::Set(Timestamp::new(date)),
        (None, true) => FieldUpdate::Clear,
        (None, false) => FieldUpdate::NoChange,
    };
    let project_id = match (args.project_id, args.clear_project) {
        (Some(id), _) => FieldUpdate::Set(id),
        (None, true) => FieldUpdate::Clear,
        (None, false) => FieldUpdate::NoChange,
    };
    let team_member_id = match (args.member_id, args.unassign) {
        (Some(id), _) => FieldUpdate::Set(id),
        (None, true) => FieldUpdate::Clear,
        (None, false) => FieldUpdate::NoChange,
    };

    Ok(TaskUpdate {
        title: args.title,
        description: args
            .description
            .map(FieldUpdate::Set)
            .unwrap_or(FieldUpdate::NoChange),
        priority: args.priority.as_deref().map(TaskPriority::parse).transpose()?,
        status: args.status.as_deref().map(TaskStatus::parse).transpose()?,
        due_date,
        project_id,
        team_member_id,
    })
}
