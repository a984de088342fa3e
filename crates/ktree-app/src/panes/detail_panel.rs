use std::cell::Cell;

use ktree_tui::widgets::detail::max_scroll;

/// The right-hand text view. Holds the unfiltered body and the lines that
/// survive the current filter.
#[derive(Debug, Default)]
pub struct DetailPanel {
    content: String,
    filter: Option<String>,
    lines: Vec<String>,
    scroll: usize,
    stick_to_end: bool,
    /// Whether the current content was set to open at its end; survives filtering.
    anchored_to_end: bool,
    visible_height: Cell<u16>,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// `scroll_to_end` pins the view to the last page once it is laid out.
    pub fn set_content(&mut self, text: impl Into<String>, scroll_to_end: bool) {
        self.content = text.into();
        self.anchored_to_end = scroll_to_end;
        self.rebuild();
    }

    pub fn apply_filter(&mut self, term: &str) {
        let term = term.to_lowercase();
        self.filter = if term.is_empty() { None } else { Some(term) };
        self.rebuild();
    }

    pub fn clear_filter(&mut self) {
        self.apply_filter("");
    }

    pub fn scroll(&mut self, delta: isize) {
        let max = max_scroll(self.lines.len(), self.visible_height.get());
        let from = if self.stick_to_end { max } else { self.scroll.min(max) };
        self.scroll = from.saturating_add_signed(delta).min(max);
        self.stick_to_end = false;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    pub fn stick_to_end(&self) -> bool {
        self.stick_to_end
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn visible_height(&self) -> &Cell<u16> {
        &self.visible_height
    }

    fn rebuild(&mut self) {
        let lines = self.content.lines();
        self.lines = match &self.filter {
            Some(term) => lines.filter(|line| line.to_lowercase().contains(term)).map(str::to_string).collect(),
            None => lines.map(str::to_string).collect(),
        };
        self.scroll = 0;
        self.stick_to_end = self.anchored_to_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_matching_lines_in_order() {
        let mut panel = DetailPanel::new();
        panel.set_content("kind: Pod\nmetadata:\n  name: web\n  namespace: default\nspec: {}", false);
        panel.apply_filter("NAME");
        assert_eq!(panel.lines(), ["  name: web", "  namespace: default"]);
        panel.clear_filter();
        assert_eq!(panel.lines().len(), 5);
    }

    #[test]
    fn filter_is_reapplied_to_new_content() {
        let mut panel = DetailPanel::new();
        panel.apply_filter("error");
        panel.set_content("ok\nerror: one\nfine\nERROR: two", false);
        assert_eq!(panel.lines(), ["error: one", "ERROR: two"]);
        assert_eq!(panel.content(), "ok\nerror: one\nfine\nERROR: two");
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut panel = DetailPanel::new();
        panel.visible_height().set(3);
        panel.set_content((0..10).map(|i| i.to_string()).collect::<Vec<_>>().join("\n"), false);

        panel.scroll(-5);
        assert_eq!(panel.scroll_offset(), 0);
        panel.scroll(4);
        assert_eq!(panel.scroll_offset(), 4);
        panel.scroll(100);
        assert_eq!(panel.scroll_offset(), 7);
    }

    #[test]
    fn scrolling_up_from_the_end_starts_at_the_last_page() {
        let mut panel = DetailPanel::new();
        panel.visible_height().set(4);
        panel.set_content((0..20).map(|i| format!("log {i}")).collect::<Vec<_>>().join("\n"), true);
        assert!(panel.stick_to_end());

        panel.scroll(-1);
        assert!(!panel.stick_to_end());
        assert_eq!(panel.scroll_offset(), 15);
    }

    #[test]
    fn new_content_resets_scroll() {
        let mut panel = DetailPanel::new();
        panel.visible_height().set(2);
        panel.set_content("a\nb\nc\nd", false);
        panel.scroll(2);
        panel.set_content("x\ny", false);
        assert_eq!(panel.scroll_offset(), 0);
    }

    #[test]
    fn filtering_tail_content_stays_pinned_to_end() {
        let mut panel = DetailPanel::new();
        panel.set_content("Logs for pod: web-0\n\nGET /\nerror: a\nGET /health\nerror: b", true);
        panel.scroll(-1);
        assert!(!panel.stick_to_end());

        panel.apply_filter("error");
        assert_eq!(panel.lines(), ["error: a", "error: b"]);
        assert!(panel.stick_to_end());

        panel.set_content("kind: Pod\nmetadata: {}", false);
        panel.apply_filter("kind");
        assert!(!panel.stick_to_end());
    }
}
