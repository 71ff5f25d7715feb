use crate::cli::ProjectAction;
use crate::context::CliContext;
use crate::handlers::require_confirmation;
use crate::output;
use serde_json::json;
use taskdash_client::ProjectResource;
use taskdash_domain::{filter_and_sort_projects, FieldUpdate, NewProject, ProjectQuery, ProjectUpdate};

pub async fn handle(ctx: &CliContext, action: ProjectAction) -> anyhow::Result<()> {
    match action {
        ProjectAction::List { search, sort } => {
            let projects = ctx.api.list().await?;
            let query = ProjectQuery {
                search: search.unwrap_or_default(),
                sort: sort.into(),
            };
            let ordered: Vec<_> = filter_and_sort_projects(&projects, &query)
                .into_iter()
                .filter_map(|id| projects.iter().find(|p| p.id == id))
                .map(|project| {
                    json!({
                        "project": project,
                        "taskCount": project.task_count(),
                        "completedCount": project.completed_count(),
                        "completionPercent": project.completion_percent(),
                    })
                })
                .collect();
            output::output_list(ordered);
        }
        ProjectAction::Create { name, description } => {
            if name.trim().is_empty() {
                anyhow::bail!("Project name is required");
            }
            let project = ctx
                .api
                .create(NewProject {
                    name: name.trim().to_string(),
                    description: description.filter(|d| !d.trim().is_empty()),
                })
                .await?;
            output::output_success(&project);
        }
        ProjectAction::Update { id, name, description } => {
            let update = ProjectUpdate {
                name,
                description: description
                    .map(FieldUpdate::Set)
                    .unwrap_or(FieldUpdate::NoChange),
            };
            let project = ctx.api.update(id, update).await?;
            output::output_success(&project);
        }
        ProjectAction::Delete { id, yes } => {
            require_confirmation("Are you sure you want to delete this project?", yes)?;
            ctx.api.remove(id).await?;
            output::output_success(json!({ "deleted": id }));
        }
    }
    Ok(())
}
