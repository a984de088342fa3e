use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

/// Shown in place of the key hints while a filter is being typed.
pub struct FilterPrompt<'a> {
    pub target: &'a str,
    pub input: &'a str,
}

pub struct StatusBarWidget<'a> {
    pub mode: &'a str,
    pub hints: &'a [(String, String)],
    pub prompt: Option<FilterPrompt<'a>>,
    pub theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let status_bg = t.status_bar.bg.unwrap_or(Color::Reset);
        let sep = Style::default().fg(t.border.fg.unwrap_or(Color::Reset)).bg(status_bg);
        let key_style = Style::default().fg(t.accent).bg(status_bg);
        let desc_style = t.status_bar;

        let mode_style = match self.prompt {
            Some(_) => t.filter_mode,
            None => Style::default().fg(status_bg).bg(t.accent).add_modifier(Modifier::BOLD),
        };
        let mut spans = vec![Span::styled(format!(" {} ", self.mode.to_uppercase()), mode_style)];

        match &self.prompt {
            Some(prompt) => {
                spans.push(Span::styled(format!(" Filter {}: ", prompt.target), desc_style));
                spans.push(Span::styled(format!("{}█", prompt.input), key_style));
                spans.push(Span::styled("  Enter apply · Esc clear", desc_style.add_modifier(Modifier::DIM)));
            }
            None => {
                for (key, desc) in self.hints {
                    spans.push(Span::styled(" │ ", sep));
                    spans.push(Span::styled(key.clone(), key_style));
                    spans.push(Span::styled(format!(" {desc}"), desc_style));
                }
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(t.status_bar), area);
    }
}

#[cfg(test)]
mod tests;
