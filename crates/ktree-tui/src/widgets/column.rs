use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::theme::Theme;

pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const EMPTY_PLACEHOLDER: &str = "No items";

const WIDTH_PADDING: u16 = 4;
const MAX_COLUMN_WIDTH: u16 = 48;

/// One browser column: a bordered list with a placeholder row when there
/// is nothing selectable.
pub struct ColumnWidget<'a> {
    pub title: &'a str,
    pub items: &'a [String],
    pub cursor: Option<usize>,
    pub loading: bool,
    pub filter: Option<&'a str>,
    pub focused: bool,
    pub theme: &'a Theme,
}

pub fn column_title(title: &str, filter: Option<&str>) -> String {
    match filter {
        Some(term) => format!("{title}* [{term}]"),
        None => title.to_string(),
    }
}

/// Width that fits the title and the longest label, clamped to `[min_width, 48]`.
pub fn preferred_width(title: &str, items: &[String], filter: Option<&str>, min_width: u16) -> u16 {
    let title_len = column_title(title, filter).chars().count() + 2;
    let longest = items.iter().map(|item| item.chars().count()).max().unwrap_or(0);
    let content = title_len.max(longest).min(u16::MAX as usize) as u16;
    (content + WIDTH_PADDING).clamp(min_width, MAX_COLUMN_WIDTH.max(min_width))
}

impl<'a> ColumnWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = self.theme;
        let border_style = if self.focused { t.border_active } else { t.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", column_title(self.title, self.filter)))
            .title_style(if self.focused { t.title } else { t.text_dim });

        if self.loading || self.items.is_empty() {
            let placeholder = if self.loading { LOADING_PLACEHOLDER } else { EMPTY_PLACEHOLDER };
            let paragraph = Paragraph::new(Line::styled(placeholder, t.text_dim.italic())).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = self.items.iter().map(|item| ListItem::new(item.as_str()).style(t.text)).collect();
        let highlight = if self.focused { t.selection } else { t.selection_unfocused };
        let list = List::new(items).block(block).highlight_style(highlight).highlight_symbol("▸ ");

        let mut state = ListState::default().with_selected(self.cursor);
        frame.render_stateful_widget(list, area, &mut state);
    }
}
