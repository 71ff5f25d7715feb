use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use taskdash_domain::{Task, TaskLayout, TaskStatus};

use crate::components::{render_panel, PanelConfig};
use crate::pages::TasksPage;
use crate::theme::{
    bold_highlight, done_text, highlight_text, label_text, normal_text, overdue_text, priority_style,
    status_style,
};
use crate::views::{highlight_if, loading_line, placeholder, scroll_offset};

const DESCRIPTION_PREVIEW: usize = 60;

pub fn render(page: &TasksPage, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(Paragraph::new(toolbar(page)), chunks[0]);

    if page.projection.is_empty() {
        let line = if page.loading {
            loading_line()
        } else if page.filters.has_active_filters() {
            placeholder("No tasks match the current filters. Press 'c' to clear them.")
        } else {
            placeholder("No tasks yet. Press 'n' to create one!")
        };
        render_panel(frame, chunks[1], &PanelConfig::new("Tasks"), Paragraph::new(line));
        return;
    }

    let now = Utc::now();
    match page.layout {
        TaskLayout::List => render_grouped(page, frame, chunks[1], now, false),
        TaskLayout::Cards => render_grouped(page, frame, chunks[1], now, true),
        TaskLayout::Board => render_board(page, frame, chunks[1], now),
    }
}

fn toolbar(page: &TasksPage) -> Line<'_> {
    let status = page
        .filters
        .status
        .as_ref()
        .map_or("All", |s| s.display_name());
    let priority = page
        .filters
        .priority
        .as_ref()
        .map_or("All", |p| p.display_name());
    let search = match &page.search_input {
        Some(input) => format!("/{}_", input.as_str()),
        None if page.filters.search.is_empty() => "-".to_string(),
        None => page.filters.search.clone(),
    };

    Line::from(vec![
        Span::styled("Status: ", label_text()),
        Span::styled(status.to_string(), highlight_text()),
        Span::styled("  Priority: ", label_text()),
        Span::styled(priority.to_string(), highlight_text()),
        Span::styled("  Group: ", label_text()),
        Span::styled(page.group_by.label(), highlight_text()),
        Span::styled("  View: ", label_text()),
        Span::styled(page.layout.label(), highlight_text()),
        Span::styled("  Search: ", label_text()),
        Span::styled(search, normal_text()),
        Span::styled(format!("  {}", page.count_label()), label_text()),
    ])
}

fn title_span(task: &Task) -> Span<'_> {
    let style = if task.status == TaskStatus::Completed {
        done_text()
    } else {
        normal_text()
    };
    Span::styled(task.title.as_str(), style)
}

fn date_span(task: &Task, now: DateTime<Utc>) -> Span<'static> {
    let style = if task.is_overdue(now) {
        overdue_text()
    } else {
        label_text()
    };
    Span::styled(task.display_date(), style)
}

fn task_line(task: &Task, now: DateTime<Utc>) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("[{}] ", task.status.display_name()), status_style(&task.status)),
        title_span(task),
        Span::raw("  "),
        Span::styled(task.priority.display_name().to_string(), priority_style(&task.priority)),
        Span::raw("  "),
        date_span(task, now),
        Span::styled(format!("  @{}", task.assignee_label()), label_text()),
    ])
}

fn card_lines(task: &Task, now: DateTime<Utc>, selected: bool) -> Vec<Line<'_>> {
    let mut lines = vec![highlight_if(
        Line::from(vec![
            Span::styled(if selected { "> " } else { "  " }, bold_highlight()),
            title_span(task),
        ]),
        selected,
    )];
    let description = task.description_text();
    if !description.is_empty() {
        let preview: String = description.chars().take(DESCRIPTION_PREVIEW).collect();
        lines.push(Line::styled(format!("    {}", preview), label_text()));
    }
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(task.priority.display_name().to_string(), priority_style(&task.priority)),
        Span::styled(" | ", label_text()),
        Span::styled(task.status.display_name().to_string(), status_style(&task.status)),
        Span::styled(" | ", label_text()),
        date_span(task, now),
        Span::styled(format!(" | {}", task.assignee_label()), label_text()),
    ]));
    lines.push(Line::from(""));
    lines
}

/// List and card layouts: group headings followed by their tasks.
fn render_grouped(page: &TasksPage, frame: &mut Frame, area: Rect, now: DateTime<Utc>, cards: bool) {
    let selected = page.selection.get();
    let mut lines = Vec::new();
    let mut selected_line = None;
    let mut index = 0;

    for group in &page.projection.groups {
        lines.push(Line::styled(
            format!("{} ({})", group.label, group.task_ids.len()),
            bold_highlight(),
        ));
        for task in page.resolve(&group.task_ids) {
            let is_selected = selected == Some(index);
            if is_selected {
                selected_line = Some(lines.len());
            }
            if cards {
                lines.extend(card_lines(task, now, is_selected));
            } else {
                lines.push(highlight_if(task_line(task, now), is_selected));
            }
            index += 1;
        }
        lines.push(Line::from(""));
    }

    let offset = scroll_offset(selected_line, area.height.saturating_sub(2));
    let content = Paragraph::new(lines).scroll((offset, 0));
    render_panel(frame, area, &PanelConfig::new("Tasks").focused(true), content);
}

/// One column per group.
fn render_board(page: &TasksPage, frame: &mut Frame, area: Rect, now: DateTime<Utc>) {
    let groups = &page.projection.groups;
    let count = groups.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); groups.len().max(1)])
        .split(area);

    let selected = page.selection.get();
    let mut index = 0;
    for (group, column) in groups.iter().zip(columns.iter()) {
        let mut lines = Vec::new();
        let mut selected_line = None;
        for task in page.resolve(&group.task_ids) {
            let is_selected = selected == Some(index);
            if is_selected {
                selected_line = Some(lines.len());
            }
            lines.extend(card_lines(task, now, is_selected));
            index += 1;
        }

        let offset = scroll_offset(selected_line, column.height.saturating_sub(2));
        let config = PanelConfig::new(&group.label)
            .with_count(group.task_ids.len())
            .focused(selected_line.is_some());
        render_panel(frame, *column, &config, Paragraph::new(lines).scroll((offset, 0)));
    }
}
