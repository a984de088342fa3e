use std::time::{Duration, Instant};

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct ToastMessage {
    pub text: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), level: ToastLevel::Success, created_at: Instant::now(), ttl: Duration::from_secs(3) }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), level: ToastLevel::Error, created_at: Instant::now(), ttl: Duration::from_secs(3) }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Stacks the newest toasts in the bottom-right corner of `area`.
pub struct ToastWidget<'a> {
    pub toasts: &'a [ToastMessage],
    pub theme: &'a Theme,
}

impl<'a> ToastWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let mut bottom = area.y + area.height;

        for toast in self.toasts.iter().rev().take(3) {
            let width = (toast.text.chars().count() as u16 + 4).max(20).min(area.width.saturating_sub(2));
            let height = 3_u16;
            bottom = bottom.saturating_sub(height);
            if bottom < area.y {
                break;
            }
            let toast_area = Rect { x: area.x + area.width.saturating_sub(width + 1), y: bottom, width, height };

            let border = match toast.level {
                ToastLevel::Success => self.theme.success,
                ToastLevel::Error => self.theme.error,
            };

            frame.render_widget(Clear, toast_area);
            let block = Block::default().borders(Borders::ALL).border_style(border).style(self.theme.overlay);
            frame.render_widget(Paragraph::new(toast.text.as_str()).block(block), toast_area);
        }
    }
}
