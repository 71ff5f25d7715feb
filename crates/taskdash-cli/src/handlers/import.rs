use crate::context::CliContext;
use crate::output;
use taskdash_client::{TaskResource, TicketImportProvider};

/// Builds the stub ticket and creates it as a task.
pub async fn handle(ctx: &CliContext, ticket: String) -> anyhow::Result<()> {
    let ticket = ticket.trim();
    if ticket.is_empty() {
        anyhow::bail!("Ticket id is required");
    }
    let new_task = ctx.importer.fetch_ticket(ticket).await?;
    let task = ctx.api.create(new_task).await?;
    tracing::info!("Imported ticket {} as task {}", ticket, task.id);
    output::output_success(&task);
    Ok(())
}
