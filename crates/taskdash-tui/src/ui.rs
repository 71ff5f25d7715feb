use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use taskdash_core::logging::LogLevel;

use crate::app::App;
use crate::components::form::render_form;
use crate::components::{render_confirm_popup, render_input_popup};
use crate::pages::projects::{ProjectModal, DELETE_PROJECT_PROMPT};
use crate::pages::tasks::{TaskModal, DELETE_TASK_PROMPT};
use crate::pages::team::{TeamModal, REMOVE_MEMBER_PROMPT};
use crate::pages::Page;
use crate::theme::{active_item, error_text, focused_border, label_text};
use crate::views;

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(4)])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_body(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    if let Some(banner) = app.current_banner() {
        banner.render(frame, chunks[1]);
    }

    render_modal(app, frame);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .highlight_style(active_item())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focused_border())
                .title(" taskdash "),
        );
    frame.render_widget(tabs, area);
}

fn render_body(app: &App, frame: &mut Frame, area: Rect) {
    match app.page {
        Page::Dashboard => views::dashboard::render(&app.dashboard, frame, area),
        Page::Tasks => views::tasks::render(&app.tasks, frame, area),
        Page::Projects => views::projects::render(&app.projects, frame, area),
        Page::Team => views::team::render(&app.team, frame, area),
        Page::Settings => views::settings::render(&app.settings, frame, area),
    }
}

fn page_hints(app: &App) -> &'static str {
    match app.page {
        Page::Dashboard => "1-5/Tab: page | r: refresh | q: quit",
        Page::Tasks if app.tasks.search_input.is_some() => "Type to search | Enter/Esc: done",
        Page::Tasks => {
            "n: new | e: edit | x: next status | d: delete | i: import | /: search | s/p: filter | g: group | v: view | c: clear"
        }
        Page::Projects if app.projects.search_input.is_some() => "Type to search | Enter/Esc: done",
        Page::Projects => "n: new | e: edit | d: delete | /: search | o: sort | v: view | r: refresh",
        Page::Team => "n: add | e: edit | d: remove | r: refresh | q: quit",
        Page::Settings => "s: save | 1-5/Tab: page",
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::styled(page_hints(app), label_text())];
    if let Some(entry) = app.current_logs().last() {
        let style = match entry.level {
            LogLevel::Error => error_text(),
            _ => label_text(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", entry.timestamp.format("%H:%M:%S")), label_text()),
            Span::styled(entry.message.as_str(), style),
        ]));
    }

    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_modal(app: &App, frame: &mut Frame) {
    match app.page {
        Page::Tasks => match &app.tasks.modal {
            Some(TaskModal::Form(form)) => render_form(frame, form),
            Some(TaskModal::Import(state)) => render_input_popup(
                frame,
                "Import from JIRA",
                "JIRA Ticket ID (e.g. PROJ-123)",
                &state.input,
                state.status.error_message(),
                state.status.is_submitting(),
            ),
            Some(TaskModal::ConfirmDelete(_)) => {
                render_confirm_popup(frame, "Delete Task", DELETE_TASK_PROMPT)
            }
            None => {}
        },
        Page::Projects => match &app.projects.modal {
            Some(ProjectModal::Form(form)) => render_form(frame, form),
            Some(ProjectModal::ConfirmDelete(_)) => {
                render_confirm_popup(frame, "Delete Project", DELETE_PROJECT_PROMPT)
            }
            None => {}
        },
        Page::Team => match &app.team.modal {
            Some(TeamModal::Form(form)) => render_form(frame, form),
            Some(TeamModal::ConfirmRemove(_)) => {
                render_confirm_popup(frame, "Remove Team Member", REMOVE_MEMBER_PROMPT)
            }
            None => {}
        },
        Page::Dashboard | Page::Settings => {}
    }
}
