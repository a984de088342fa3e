use ratatui::Frame;

use ktree_tui::layout::{render_root, ColumnView, DetailView, RenderContext};
use ktree_tui::widgets::status_bar::FilterPrompt;

use crate::command::InputMode;
use crate::panes::ListPanel;

use super::App;

fn column_view(list: &ListPanel) -> ColumnView<'_> {
    ColumnView {
        title: list.title(),
        items: list.visible_items(),
        cursor: list.cursor(),
        loading: list.is_loading(),
        filter: list.filter(),
    }
}

impl App {
    pub(super) fn render(&self, frame: &mut Frame) {
        let nav = self.browser.navigator();
        let selection = self.browser.selection();
        let detail = nav.detail();
        let mode = self.dispatcher.mode();

        let ctx = RenderContext {
            context: selection.context_name.as_deref(),
            namespace: selection.namespace.as_deref(),
            columns: [column_view(nav.namespaces()), column_view(nav.kinds()), column_view(nav.objects())],
            detail: DetailView {
                title: self.browser.detail_title(),
                lines: detail.lines(),
                scroll: detail.scroll_offset(),
                stick_to_end: detail.stick_to_end(),
                filter: detail.filter(),
                highlight_yaml: self.browser.detail_is_yaml(),
                visible_height: detail.visible_height(),
            },
            focused: nav.focused().index(),
            viewport_start: nav.viewport_start(),
            min_column_width: self.min_column_width,
            detail_min_width: self.detail_min_width,
            mode_name: mode.name(),
            hints: &self.status_hints,
            filter_prompt: (mode == InputMode::FilterInput)
                .then(|| FilterPrompt { target: self.browser.filter_target().label(), input: &self.filter_input }),
            help: (mode == InputMode::Help).then_some(self.help_sections.as_slice()),
            help_close_hint: &self.help_close_hint,
            toasts: &self.toasts,
            theme: &self.theme,
        };
        render_root(frame, &ctx);
    }
}
