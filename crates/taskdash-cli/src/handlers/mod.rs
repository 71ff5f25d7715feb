pub mod import;
pub mod member;
pub mod project;
pub mod settings;
pub mod task;

use crate::context::confirm;
use crate::output;

/// Stops with an error envelope unless the deletion is confirmed.
pub(crate) fn require_confirmation(prompt: &str, assume_yes: bool) -> anyhow::Result<()> {
    if !confirm(prompt, assume_yes)? {
        output::output_error("Deletion cancelled");
    }
    Ok(())
}
