use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme::Theme;

pub struct HelpSection {
    pub title: String,
    pub entries: Vec<(String, String)>,
}

/// Centered popup listing every binding, grouped.
pub struct HelpOverlay<'a> {
    pub sections: &'a [HelpSection],
    pub close_hint: &'a str,
    pub theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let mut lines: Vec<Line> = Vec::new();
        for section in self.sections {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::styled(section.title.clone(), t.title));
            for (key, desc) in &section.entries {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<14}"), t.text.add_modifier(Modifier::BOLD)),
                    Span::styled(desc.clone(), t.text_dim),
                ]));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(self.close_hint.to_string(), t.text_dim.italic()));

        let height = (lines.len() as u16 + 2).min(area.height);
        let width = 56.min(area.width);
        let popup = centered(area, width, height);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_active)
            .title(" Help ")
            .title_style(t.title)
            .style(t.overlay);
        frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), popup);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    #[test]
    fn lists_sections_and_entries() {
        let theme = Theme::default();
        let sections = vec![
            HelpSection { title: "Global".into(), entries: vec![("Q".into(), "Quit".into())] },
            HelpSection { title: "Browse".into(), entries: vec![("R".into(), "Refresh".into())] },
        ];
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                HelpOverlay { sections: &sections, close_hint: "Esc closes", theme: &theme }
                    .render(frame, frame.area());
            })
            .unwrap();
        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Help"));
        assert!(text.contains("Global"));
        assert!(text.contains("Refresh"));
        assert!(text.contains("Esc closes"));
    }

    #[test]
    fn centered_popup_stays_inside_area() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered(area, 56.min(area.width), 30.min(area.height));
        assert_eq!(popup, Rect::new(0, 0, 40, 10));
        assert_eq!(centered(Rect::new(0, 0, 100, 40), 50, 10), Rect::new(25, 15, 50, 10));
    }
}
