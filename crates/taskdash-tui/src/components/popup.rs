use crate::theme::{bold_highlight, error_text, focused_border, highlight_text, label_text, normal_text, popup_bg};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use taskdash_core::InputState;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Clears a centered area, draws a titled frame and returns its inner area.
pub fn render_popup_with_block(frame: &mut Frame, title: &str, width_percent: u16, height_percent: u16) -> Rect {
    let area = centered_rect(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

/// Single text field popup with an optional error line underneath.
pub fn render_input_popup(
    frame: &mut Frame,
    title: &str,
    label: &str,
    input: &InputState,
    error: Option<&str>,
    busy: bool,
) {
    let inner = render_popup_with_block(frame, title, 60, 30);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(label).style(highlight_text()), chunks[0]);

    let field = Paragraph::new(input.as_str())
        .style(normal_text())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(field, chunks[1]);

    let status = match (busy, error) {
        (true, _) => Paragraph::new("Working...").style(label_text()),
        (false, Some(message)) => Paragraph::new(message).style(error_text()),
        (false, None) => Paragraph::new("Enter: confirm  Esc: cancel").style(label_text()),
    };
    frame.render_widget(status, chunks[2]);

    if !busy {
        let cursor_x = chunks[1].x + input.cursor_column() as u16 + 1;
        frame.set_cursor_position((cursor_x, chunks[1].y + 1));
    }
}

pub fn render_confirm_popup(frame: &mut Frame, title: &str, question: &str) {
    let inner = render_popup_with_block(frame, title, 50, 20);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let text = Paragraph::new(question)
        .style(bold_highlight())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, chunks[0]);

    let hint = Paragraph::new("y: yes  n/Esc: no")
        .style(label_text())
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 40, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 15);
    }
}
