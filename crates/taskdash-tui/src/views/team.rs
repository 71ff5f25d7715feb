use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::components::{render_panel, PanelConfig};
use crate::pages::TeamPage;
use crate::theme::{bold_highlight, label_text, normal_text};
use crate::views::{highlight_if, loading_line, placeholder, scroll_offset};

pub fn render(page: &TeamPage, frame: &mut Frame, area: Rect) {
    let config = PanelConfig::new("Team")
        .with_count(page.members.len())
        .focused(true);

    if page.members.is_empty() {
        let line = if page.loading {
            loading_line()
        } else {
            placeholder("No team members yet. Press 'n' to add one!")
        };
        render_panel(frame, area, &config, Paragraph::new(line));
        return;
    }

    let selected = page.selection.get();
    let lines: Vec<Line> = page
        .members
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let line = Line::from(vec![
                Span::styled(format!("[{:<2}] ", member.initials()), bold_highlight()),
                Span::styled(member.name.as_str(), normal_text()),
                Span::styled(format!("  {}", member.email), label_text()),
                Span::styled(format!("  {}", member.role), label_text()),
            ]);
            highlight_if(line, selected == Some(index))
        })
        .collect();

    let offset = scroll_offset(selected, area.height.saturating_sub(2));
    render_panel(frame, area, &config, Paragraph::new(lines).scroll((offset, 0)));
}
