//! Bordered body panels for the page views.
//!
//! A panel's title carries an optional count, e.g. ` Team (4) ` or a board
//! column ` IN PROGRESS (2) `. The focused panel is the one holding the
//! selected row; on the board that is a single column.

use crate::theme::{focused_border, unfocused_border};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct PanelConfig<'a> {
    pub title: &'a str,
    pub count: Option<usize>,
    pub is_focused: bool,
}

impl<'a> PanelConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            count: None,
            is_focused: false,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn title_text(&self) -> String {
        match self.count {
            Some(count) => format!(" {} ({}) ", self.title, count),
            None => format!(" {} ", self.title),
        }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title_text())
    }
}

pub fn render_panel<'a>(frame: &mut Frame, area: Rect, config: &PanelConfig<'a>, content: Paragraph<'a>) {
    frame.render_widget(content.block(config.block()), area);
}
