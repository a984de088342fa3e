use std::cell::Cell;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::theme::Theme;

pub struct DetailWidget<'a> {
    pub title: &'a str,
    pub lines: &'a [String],
    pub scroll: usize,
    /// Pin the view to the last page regardless of `scroll`.
    pub stick_to_end: bool,
    pub filter: Option<&'a str>,
    pub highlight_yaml: bool,
    pub focused: bool,
    /// Written during render so scrolling can clamp against the real viewport.
    pub visible_height: &'a Cell<u16>,
    pub theme: &'a Theme,
}

pub fn max_scroll(total_lines: usize, visible_height: u16) -> usize {
    total_lines.saturating_sub(visible_height.max(1) as usize)
}

impl<'a> DetailWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let border_style = if self.focused { t.border_active } else { t.border };
        let title = match self.filter {
            Some(term) => format!(" {}* [{term}] ", self.title),
            None => format!(" {} ", self.title),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
            .title_style(if self.focused { t.title } else { t.text_dim })
            .title(Line::styled(format!(" {} lines ", self.lines.len()), t.text_dim).alignment(Alignment::Right));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        self.visible_height.set(inner.height);
        let max = max_scroll(self.lines.len(), inner.height);
        let scroll = if self.stick_to_end { max } else { self.scroll.min(max) };

        let display: Vec<Line> = self
            .lines
            .iter()
            .skip(scroll)
            .take(inner.height as usize)
            .map(|line| if self.highlight_yaml { highlight_yaml_line(line, t) } else { Line::raw(line.as_str()) })
            .collect();
        frame.render_widget(Paragraph::new(display).style(t.text), inner);

        if self.lines.len() > inner.height as usize {
            let mut state = ScrollbarState::new(max).position(scroll);
            frame.render_stateful_widget(Scrollbar::new(ScrollbarOrientation::VerticalRight), inner, &mut state);
        }
    }
}

pub fn highlight_yaml_line<'l>(line: &'l str, theme: &Theme) -> Line<'l> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    let mut spans = Vec::new();
    if !indent.is_empty() {
        spans.push(Span::raw(indent));
    }

    let (dash, body) = match trimmed.strip_prefix("- ") {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if dash {
        spans.push(Span::styled("- ", theme.text_dim));
    }

    if body.starts_with('#') || body == "---" {
        spans.push(Span::styled(body, theme.text_dim));
    } else if let Some((key, value)) = body.split_once(": ").or_else(|| body.strip_suffix(':').map(|k| (k, ""))) {
        spans.push(Span::styled(key, theme.yaml_key));
        spans.push(Span::styled(":", theme.yaml_key));
        if !value.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(value, value_style(value, theme)));
        }
    } else {
        spans.push(Span::styled(body, value_style(body, theme)));
    }
    Line::from(spans)
}

fn value_style(value: &str, theme: &Theme) -> Style {
    match value {
        "true" | "false" => theme.yaml_boolean,
        "null" | "~" => theme.yaml_null,
        v if v.parse::<f64>().is_ok() => theme.yaml_number,
        _ => theme.yaml_string,
    }
}
