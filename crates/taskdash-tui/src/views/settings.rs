use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::components::{render_panel, PanelConfig};
use crate::pages::settings::{JiraMode, SettingKind, SettingsPage, SettingsTab};
use crate::theme::{focused_border, highlight_text, label_text, normal_text, selected_item};
use crate::views::loading_line;

pub fn render(page: &SettingsPage, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let titles: Vec<Line> = SettingsTab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
    let selected = SettingsTab::ALL
        .iter()
        .position(|tab| *tab == page.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(selected_item(true))
        .block(Block::default().borders(Borders::ALL).border_style(focused_border()));
    frame.render_widget(tabs, chunks[0]);

    if page.loading {
        render_panel(frame, chunks[1], &PanelConfig::new("Settings"), Paragraph::new(loading_line()));
    } else if page.tab == SettingsTab::Jira && page.jira_mode == JiraMode::Yaml {
        let content = Paragraph::new(page.yaml.as_str()).style(normal_text());
        render_panel(frame, chunks[1], &PanelConfig::new("JIRA YAML configuration"), content);
    } else {
        render_fields(page, frame, chunks[1]);
    }

    frame.render_widget(Paragraph::new(hints(page)).style(label_text()), chunks[2]);
}

fn render_fields(page: &SettingsPage, frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for (index, field) in page.fields().iter().enumerate() {
        let focused = index == page.focus;
        let value = match (&page.editing, focused) {
            (Some(input), true) if field.kind == SettingKind::Secret => {
                format!("{}_", "*".repeat(input.as_str().chars().count()))
            }
            (Some(input), true) => format!("{}_", input.as_str()),
            _ => match field.kind {
                SettingKind::Choice => format!("< {} >", page.value(index)),
                _ => page.value(index),
            },
        };
        let label_style = if focused { highlight_text() } else { label_text() };
        let line = Line::from(vec![
            Span::styled(format!("{:<40}", field.label), label_style),
            Span::styled(value, normal_text()),
        ]);
        lines.push(if focused { line.style(selected_item(true)) } else { line });
    }

    let title = match page.tab {
        SettingsTab::Jira => "JIRA connection",
        SettingsTab::General => "General settings",
        SettingsTab::Notifications => "Notification settings",
    };
    render_panel(frame, area, &PanelConfig::new(title).focused(true), Paragraph::new(lines));
}

fn hints(page: &SettingsPage) -> String {
    if page.editing.is_some() {
        return "Enter: apply  Esc: discard".to_string();
    }
    if page.testing {
        return "Testing connection...".to_string();
    }
    match (page.tab, page.jira_mode) {
        (SettingsTab::Jira, JiraMode::Yaml) => {
            "h/l: tab  m: form mode  e: edit in $EDITOR  s: save  t: test connection".to_string()
        }
        (SettingsTab::Jira, JiraMode::Form) => {
            "h/l: tab  j/k: field  Enter: edit  m: YAML mode  s: save  t: test connection".to_string()
        }
        _ => "h/l: tab  j/k: field  Enter/Space: change  s: save".to_string(),
    }
}
