use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::components::{render_panel, PanelConfig};
use crate::pages::DashboardPage;
use crate::theme::{bold_highlight, colors, label_text};
use crate::views::{loading_line, placeholder};

pub fn render(page: &DashboardPage, frame: &mut Frame, area: Rect) {
    let Some(stats) = page.stats.as_ref() else {
        let line = if page.loading {
            loading_line()
        } else {
            placeholder("No statistics available. Press 'r' to retry.")
        };
        render_panel(frame, area, &PanelConfig::new("Dashboard"), Paragraph::new(line));
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    let entries = [
        ("Total Tasks", stats.total, colors::NORMAL_TEXT),
        ("To Do", stats.todo, colors::STATUS_TODO),
        ("In Progress", stats.in_progress, colors::STATUS_IN_PROGRESS),
        ("Completed", stats.completed, colors::STATUS_COMPLETED),
    ];
    for ((label, count, color), card) in entries.into_iter().zip(cards.iter()) {
        let lines = vec![
            Line::from(Span::styled(count.to_string(), bold_highlight().fg(color))),
            Line::from(Span::styled(label, label_text())),
        ];
        let widget = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)));
        frame.render_widget(widget, *card);
    }

    let percent = stats.completion_percent();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Completion "))
        .gauge_style(Style::default().fg(colors::STATUS_COMPLETED))
        .percent(u16::from(percent))
        .label(format!("{}%", percent));
    frame.render_widget(gauge, rows[1]);
}
