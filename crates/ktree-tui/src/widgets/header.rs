use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub fn header_text(context: Option<&str>, namespace: Option<&str>) -> String {
    format!("Context: {} | Namespace: {}", context.unwrap_or("Unknown"), namespace.unwrap_or("All Namespaces"))
}

pub struct HeaderWidget<'a> {
    pub context: Option<&'a str>,
    pub namespace: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> HeaderWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" ktree ", self.theme.title),
            Span::styled(header_text(self.context, self.namespace), self.theme.header),
        ]);
        frame.render_widget(Paragraph::new(line).style(self.theme.header), area);
    }
}
