//! Page outcome banners.
//!
//! Writes that happen outside a form (quick status change, deletes,
//! settings saves, the JIRA connection test) report through a banner
//! pinned above the footer. A page holds at most one; the app drops it on
//! the first tick after [`BANNER_TTL`].

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use taskdash_core::TaskdashResult;

use crate::theme::colors::{ACTIVE_ITEM, ERROR_COLOR};

pub const BANNER_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerVariant {
    Error,
    Success,
}

impl BannerVariant {
    fn color(self) -> Color {
        match self {
            BannerVariant::Error => ERROR_COLOR,
            BannerVariant::Success => ACTIVE_ITEM,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub variant: BannerVariant,
    pub created_at: Instant,
}

impl Banner {
    fn new(message: impl Into<String>, variant: BannerVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, BannerVariant::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, BannerVariant::Success)
    }

    /// Fixed success or failure text for a finished write. The error detail
    /// belongs in the page log, not here.
    pub fn for_outcome<T>(result: &TaskdashResult<T>, saved: &str, failed: &str) -> Self {
        match result {
            Ok(_) => Self::success(saved),
            Err(_) => Self::error(failed),
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == BannerVariant::Error
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }

    /// Clears `slot` once its banner has outlived [`BANNER_TTL`].
    pub fn clear_expired(slot: &mut Option<Banner>) {
        if slot.as_ref().is_some_and(|b| b.is_expired(BANNER_TTL)) {
            *slot = None;
        }
    }

    /// Box centered horizontally at the top of `area`, sized to the message
    /// plus border and one column of padding each side.
    pub fn area(&self, area: Rect) -> Rect {
        let width = (self.message.chars().count() + 4).min(area.width as usize) as u16;
        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y,
            width,
            height: area.height.min(3),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = self.variant.color();
        let widget = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(widget, self.area(area));
    }
}
