use crate::events::EventHandler;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

fn which_editor() -> String {
    let candidates: &[&str] = if cfg!(target_os = "windows") {
        &["nvim", "vim", "nano", "notepad"]
    } else {
        &["nvim", "vim", "nano", "vi"]
    };
    let which_cmd = if cfg!(target_os = "windows") { "where" } else { "which" };

    candidates
        .iter()
        .find(|editor| {
            Command::new(which_cmd)
                .arg(editor)
                .output()
                .map(|output| output.status.success())
                .unwrap_or(false)
        })
        .map(|editor| editor.to_string())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        })
}

/// Suspends the TUI and opens `initial_content` in `$EDITOR`.
///
/// Returns the saved text, or `None` when the editor exits unsuccessfully.
/// The caller must start a fresh [`EventHandler`] afterwards.
pub fn edit_in_external_editor(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    event_handler: &EventHandler,
    temp_file: &Path,
    initial_content: &str,
) -> io::Result<Option<String>> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| which_editor());

    std::fs::write(temp_file, initial_content)?;

    event_handler.stop();
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    io::stdout().flush()?;

    let status = Command::new(&editor).arg(temp_file).status();

    while crossterm::event::poll(std::time::Duration::ZERO)? {
        let _ = crossterm::event::read()?;
    }
    execute!(io::stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    terminal.clear()?;

    let status = match status {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("Failed to launch editor '{}': {}", editor, e);
            let _ = std::fs::remove_file(temp_file);
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "Editor '{}' not found. Please set $EDITOR environment variable.",
                    editor
                ),
            ));
        }
    };

    let result = if status.success() {
        Some(std::fs::read_to_string(temp_file)?)
    } else {
        None
    };
    let _ = std::fs::remove_file(temp_file);

    Ok(result)
}
