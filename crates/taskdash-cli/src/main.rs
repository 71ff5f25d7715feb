mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use std::sync::Arc;
use taskdash_tui::{App, Clients};

const DEBUG_LOG_ENV: &str = "TASKDASH_DEBUG_LOG";

/// With `TASKDASH_DEBUG_LOG` set, everything down to DEBUG goes to that
/// file. Otherwise warnings go to stderr, except under the TUI where
/// nothing is logged.
fn init_tracing(tui: bool) -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else if !tui {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

async fn run_tui(ctx: CliContext) -> anyhow::Result<()> {
    let clients = Clients::from_api(ctx.api.clone(), Arc::new(ctx.importer.clone()), ctx.settings()?);
    let mut app = App::new(clients);
    app.run().await?;
    Ok(())
}

async fn run_command(ctx: &CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Task(task_cmd) => handlers::task::handle(ctx, task_cmd.action).await,
        Commands::Project(project_cmd) => handlers::project::handle(ctx, project_cmd.action).await,
        Commands::Member(member_cmd) => handlers::member::handle(ctx, member_cmd.action).await,
        Commands::Import { ticket } => handlers::import::handle(ctx, ticket).await,
        Commands::Settings(settings_cmd) => handlers::settings::handle(ctx, settings_cmd.action).await,
        Commands::Completions { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none())?;

    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "taskdash", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = match CliContext::load(&cli) {
        Ok(ctx) => ctx,
        Err(e) => output::output_error(&e.to_string()),
    };
    tracing::debug!("Loaded configuration: {:?}", ctx.config);

    match cli.command {
        None => run_tui(ctx).await?,
        Some(command) => {
            if let Err(e) = run_command(&ctx, command).await {
                tracing::debug!("Command failed: {:#}", e);
                output::output_error(&format!("{:#}", e));
            }
        }
    }

    Ok(())
}
