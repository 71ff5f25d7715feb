//! Per-page renderers. Each takes its page state read-only.

pub mod dashboard;
pub mod projects;
pub mod settings;
pub mod tasks;
pub mod team;

use ratatui::text::Line;

use crate::theme::{label_text, selected_item};

pub(crate) fn placeholder(text: &str) -> Line<'static> {
    Line::styled(text.to_string(), label_text())
}

pub(crate) fn loading_line() -> Line<'static> {
    placeholder("Loading...")
}

pub(crate) fn highlight_if(line: Line<'_>, selected: bool) -> Line<'_> {
    if selected {
        line.style(selected_item(true))
    } else {
        line
    }
}

/// First line to show so that `selected_line` stays inside `height` rows.
pub(crate) fn scroll_offset(selected_line: Option<usize>, height: u16) -> u16 {
    let height = height as usize;
    match selected_line {
        Some(line) if height > 0 && line >= height => (line + 1 - height) as u16,
        _ => 0,
    }
}
