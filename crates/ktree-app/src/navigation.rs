use std::cell::Cell;

use crate::panes::{DetailPanel, ListPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Namespaces,
    Kinds,
    Objects,
    Detail,
}

impl PanelId {
    pub const ORDER: [PanelId; 4] = [PanelId::Namespaces, PanelId::Kinds, PanelId::Objects, PanelId::Detail];

    pub fn index(self) -> usize {
        match self {
            Self::Namespaces => 0,
            Self::Kinds => 1,
            Self::Objects => 2,
            Self::Detail => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ORDER[index.min(Self::ORDER.len() - 1)]
    }

    /// Name used in the filter prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::Namespaces => "namespaces",
            Self::Kinds => "object types",
            Self::Objects => "objects",
            Self::Detail => "details",
        }
    }
}

/// A highlighted list item, tagged with the panel generation it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub panel: PanelId,
    pub item: String,
    pub generation: u64,
}

/// Owns the four panels and the focus index over them.
pub struct Navigator {
    namespaces: ListPanel,
    kinds: ListPanel,
    objects: ListPanel,
    detail: DetailPanel,
    focused: usize,
    viewport_start: Cell<usize>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            namespaces: ListPanel::new("Namespaces"),
            kinds: ListPanel::new("Object Types"),
            objects: ListPanel::new("Objects"),
            detail: DetailPanel::new(),
            focused: 0,
            viewport_start: Cell::new(0),
        }
    }

    pub fn focused(&self) -> PanelId {
        PanelId::from_index(self.focused)
    }

    pub fn focus_left(&mut self) -> bool {
        self.set_focus(self.focused.saturating_sub(1))
    }

    pub fn focus_right(&mut self) -> bool {
        self.set_focus(self.focused + 1)
    }

    /// Cursor movement on a list panel yields the new highlight; on the
    /// detail panel it scrolls and yields nothing.
    pub fn focus_vertical(&mut self, delta: isize) -> Option<Highlight> {
        let panel = self.focused();
        if panel == PanelId::Detail {
            self.detail.scroll(delta);
            return None;
        }
        let list = self.list_mut(panel)?;
        let item = list.move_cursor(delta)?;
        Some(Highlight { panel, item, generation: list.generation() })
    }

    pub fn list(&self, panel: PanelId) -> Option<&ListPanel> {
        match panel {
            PanelId::Namespaces => Some(&self.namespaces),
            PanelId::Kinds => Some(&self.kinds),
            PanelId::Objects => Some(&self.objects),
            PanelId::Detail => None,
        }
    }

    pub fn list_mut(&mut self, panel: PanelId) -> Option<&mut ListPanel> {
        match panel {
            PanelId::Namespaces => Some(&mut self.namespaces),
            PanelId::Kinds => Some(&mut self.kinds),
            PanelId::Objects => Some(&mut self.objects),
            PanelId::Detail => None,
        }
    }

    /// Current cursor item of a list panel as a highlight event.
    pub fn highlight_of(&self, panel: PanelId) -> Option<Highlight> {
        let list = self.list(panel)?;
        list.selected().map(|item| Highlight { panel, item: item.to_string(), generation: list.generation() })
    }

    pub fn namespaces(&self) -> &ListPanel {
        &self.namespaces
    }

    pub fn kinds(&self) -> &ListPanel {
        &self.kinds
    }

    pub fn objects(&self) -> &ListPanel {
        &self.objects
    }

    pub fn namespaces_mut(&mut self) -> &mut ListPanel {
        &mut self.namespaces
    }

    pub fn kinds_mut(&mut self) -> &mut ListPanel {
        &mut self.kinds
    }

    pub fn objects_mut(&mut self) -> &mut ListPanel {
        &mut self.objects
    }

    pub fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut DetailPanel {
        &mut self.detail
    }

    pub fn viewport_start(&self) -> &Cell<usize> {
        &self.viewport_start
    }

    fn set_focus(&mut self, index: usize) -> bool {
        let index = index.min(PanelId::ORDER.len() - 1);
        let changed = index != self.focused;
        self.focused = index;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn starts_on_namespaces() {
        assert_eq!(Navigator::new().focused(), PanelId::Namespaces);
    }

    #[test]
    fn focus_is_clamped_without_wrapping() {
        let mut nav = Navigator::new();
        assert!(!nav.focus_left());
        assert_eq!(nav.focused(), PanelId::Namespaces);

        assert!(nav.focus_right());
        assert!(nav.focus_right());
        assert!(nav.focus_right());
        assert_eq!(nav.focused(), PanelId::Detail);
        assert!(!nav.focus_right());
        assert_eq!(nav.focused(), PanelId::Detail);

        assert!(nav.focus_left());
        assert_eq!(nav.focused(), PanelId::Objects);
    }

    #[test]
    fn vertical_movement_on_list_is_a_highlight() {
        let mut nav = Navigator::new();
        nav.namespaces_mut().set_items(items(&["default", "dev"]));
        let generation = nav.namespaces().generation();

        let highlight = nav.focus_vertical(1);
        assert_eq!(
            highlight,
            Some(Highlight { panel: PanelId::Namespaces, item: "dev".into(), generation })
        );
        assert_eq!(nav.focus_vertical(1), None);
    }

    #[test]
    fn vertical_movement_on_detail_scrolls() {
        let mut nav = Navigator::new();
        nav.detail().visible_height().set(2);
        nav.detail_mut().set_content("a\nb\nc\nd\ne", false);
        nav.focus_right();
        nav.focus_right();
        nav.focus_right();

        assert_eq!(nav.focus_vertical(1), None);
        assert_eq!(nav.detail().scroll_offset(), 1);
    }

    #[test]
    fn highlight_of_reads_cursor_item() {
        let mut nav = Navigator::new();
        assert_eq!(nav.highlight_of(PanelId::Kinds), None);
        nav.kinds_mut().set_items(items(&["Pods", "Services"]));
        assert_eq!(nav.highlight_of(PanelId::Kinds).map(|h| h.item), Some("Pods".to_string()));
        assert_eq!(nav.highlight_of(PanelId::Detail), None);
    }

    #[test]
    fn panel_index_round_trips() {
        for panel in PanelId::ORDER {
            assert_eq!(PanelId::from_index(panel.index()), panel);
        }
        assert_eq!(PanelId::from_index(9), PanelId::Detail);
    }
}
