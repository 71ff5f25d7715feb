use crate::cli::MemberAction;
use crate::context::CliContext;
use crate::handlers::require_confirmation;
use crate::output;
use serde_json::json;
use taskdash_client::TeamMemberResource;
use taskdash_domain::{TeamMemberDraft, TeamMemberUpdate};

pub async fn handle(ctx: &CliContext, action: MemberAction) -> anyhow::Result<()> {
    match action {
        MemberAction::List => {
            let members = ctx.api.list().await?;
            let items: Vec<_> = members
                .iter()
                .map(|member| json!({ "member": member, "initials": member.initials() }))
                .collect();
            output::output_list(items);
        }
        MemberAction::Create { name, email, role } => {
            let draft = TeamMemberDraft {
                editing: None,
                name,
                email,
                role,
            };
            let member = ctx.api.create(draft.to_new()?).await?;
            output::output_success(&member);
        }
        MemberAction::Update { id, name, email, role } => {
            let update = TeamMemberUpdate { name, email, role };
            if update.is_empty() {
                output::output_error("Nothing to update");
            }
            let member = ctx.api.update(id, update).await?;
            output::output_success(&member);
        }
        MemberAction::Delete { id, yes } => {
            require_confirmation("Are you sure you want to remove this team member?", yes)?;
            ctx.api.remove(id).await?;
            output::output_success(json!({ "deleted": id }));
        }
    }
    Ok(())
}
