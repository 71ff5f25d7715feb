use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use taskdash_domain::{Project, ProjectLayout};

use crate::components::{render_panel, PanelConfig};
use crate::pages::ProjectsPage;
use crate::theme::{
    bold_highlight, focused_border, highlight_text, label_text, normal_text, unfocused_border,
};
use crate::views::{highlight_if, loading_line, placeholder, scroll_offset};

const CARDS_PER_ROW: usize = 3;
const CARD_HEIGHT: u16 = 6;

pub fn render(page: &ProjectsPage, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let search = match &page.search_input {
        Some(input) => format!("/{}_", input.as_str()),
        None if page.query.search.is_empty() => "-".to_string(),
        None => page.query.search.clone(),
    };
    let toolbar = Line::from(vec![
        Span::styled("Sort: ", label_text()),
        Span::styled(page.query.sort.label(), highlight_text()),
        Span::styled("  View: ", label_text()),
        Span::styled(page.layout.label(), highlight_text()),
        Span::styled("  Search: ", label_text()),
        Span::styled(search, normal_text()),
        Span::styled(format!("  {}", page.count_label()), label_text()),
    ]);
    frame.render_widget(Paragraph::new(toolbar), chunks[0]);

    let projects = page.visible_projects();
    if projects.is_empty() {
        let line = if page.loading {
            loading_line()
        } else if page.projects.is_empty() {
            placeholder("No projects yet. Press 'n' to create one!")
        } else {
            placeholder("No projects match your search.")
        };
        render_panel(frame, chunks[1], &PanelConfig::new("Projects"), Paragraph::new(line));
        return;
    }

    match page.layout {
        ProjectLayout::Cards => render_cards(page, &projects, frame, chunks[1]),
        ProjectLayout::List => render_list(page, &projects, frame, chunks[1]),
    }
}

fn summary(project: &Project) -> String {
    format!(
        "{} tasks | {} done | {}%",
        project.task_count(),
        project.completed_count(),
        project.completion_percent()
    )
}

fn render_list(page: &ProjectsPage, projects: &[&Project], frame: &mut Frame, area: Rect) {
    let selected = page.selection.get();
    let lines: Vec<Line> = projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let line = Line::from(vec![
                Span::styled(format!("[{}] ", project.initials()), bold_highlight()),
                Span::styled(project.name.as_str(), normal_text()),
                Span::styled(format!("  {}", summary(project)), label_text()),
            ]);
            highlight_if(line, selected == Some(index))
        })
        .collect();

    let offset = scroll_offset(selected, area.height.saturating_sub(2));
    let content = Paragraph::new(lines).scroll((offset, 0));
    render_panel(frame, area, &PanelConfig::new("Projects").focused(true), content);
}

/// Grid of project cards; rows scroll so the selected card stays visible.
fn render_cards(page: &ProjectsPage, projects: &[&Project], frame: &mut Frame, area: Rect) {
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected = page.selection.get();
    let selected_row = selected.map(|index| index / CARDS_PER_ROW).unwrap_or(0);
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let start = (first_row + row_index) * CARDS_PER_ROW;
        if start >= projects.len() {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
            .split(*row_area);

        for (offset, cell) in cells.iter().enumerate() {
            let index = start + offset;
            let Some(project) = projects.get(index) else {
                break;
            };
            render_card(project, selected == Some(index), frame, *cell);
        }
    }
}

fn render_card(project: &Project, selected: bool, frame: &mut Frame, area: Rect) {
    let description = project.description_text();
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", project.initials()), bold_highlight()),
            Span::styled(project.name.as_str(), normal_text()),
        ]),
        Line::styled(
            if description.is_empty() { "No description" } else { description },
            label_text(),
        ),
        Line::styled(summary(project), highlight_text()),
        Line::styled(format!("Created {}", project.created_at.date_label()), label_text()),
    ];
    let border = if selected { focused_border() } else { unfocused_border() };
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);
}
