use super::colors::*;
use ratatui::style::{Modifier, Style};
use taskdash_domain::{TaskPriority, TaskStatus};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn active_item() -> Style {
    Style::default()
        .fg(ACTIVE_ITEM)
        .add_modifier(Modifier::BOLD)
}

pub fn done_text() -> Style {
    Style::default()
        .fg(DONE_TEXT)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

/// Unknown priorities fall back to the plain text style.
pub fn priority_style(priority: &TaskPriority) -> Style {
    match priority {
        TaskPriority::High => Style::default().fg(PRIORITY_HIGH),
        TaskPriority::Medium => Style::default().fg(PRIORITY_MEDIUM),
        TaskPriority::Low => Style::default().fg(PRIORITY_LOW),
        TaskPriority::Other(_) => normal_text(),
    }
}

pub fn status_style(status: &TaskStatus) -> Style {
    match status {
        TaskStatus::Todo => Style::default().fg(STATUS_TODO),
        TaskStatus::InProgress => Style::default().fg(STATUS_IN_PROGRESS),
        TaskStatus::Completed => Style::default().fg(STATUS_COMPLETED),
        TaskStatus::Other(_) => normal_text(),
    }
}

pub fn overdue_text() -> Style {
    Style::default().fg(OVERDUE).add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
