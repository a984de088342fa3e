use std::cell::Cell;
use std::ops::Range;

use ratatui::prelude::*;

use crate::theme::Theme;
use crate::widgets::column::{preferred_width, ColumnWidget};
use crate::widgets::detail::DetailWidget;
use crate::widgets::header::HeaderWidget;
use crate::widgets::help::{HelpOverlay, HelpSection};
use crate::widgets::status_bar::{FilterPrompt, StatusBarWidget};
use crate::widgets::toast::{ToastMessage, ToastWidget};

pub struct ColumnView<'a> {
    pub title: &'a str,
    pub items: &'a [String],
    pub cursor: Option<usize>,
    pub loading: bool,
    pub filter: Option<&'a str>,
}

pub struct DetailView<'a> {
    pub title: String,
    pub lines: &'a [String],
    pub scroll: usize,
    pub stick_to_end: bool,
    pub filter: Option<&'a str>,
    pub highlight_yaml: bool,
    pub visible_height: &'a Cell<u16>,
}

pub struct RenderContext<'a> {
    pub context: Option<&'a str>,
    pub namespace: Option<&'a str>,
    pub columns: [ColumnView<'a>; 3],
    pub detail: DetailView<'a>,
    /// 0..=2 is a list column, 3 is the detail panel.
    pub focused: usize,
    /// First list column on screen; updated while rendering.
    pub viewport_start: &'a Cell<usize>,
    pub min_column_width: u16,
    pub detail_min_width: u16,
    pub mode_name: &'a str,
    pub hints: &'a [(String, String)],
    pub filter_prompt: Option<FilterPrompt<'a>>,
    pub help: Option<&'a [HelpSection]>,
    pub help_close_hint: &'a str,
    pub toasts: &'a [ToastMessage],
    pub theme: &'a Theme,
}

/// Contiguous run of columns that fits `available - reserve` and always
/// contains `anchor`. Starts from `start` and only moves as far as needed.
pub fn column_window(widths: &[u16], available: u16, reserve: u16, start: usize, anchor: usize) -> Range<usize> {
    if widths.is_empty() {
        return 0..0;
    }
    let anchor = anchor.min(widths.len() - 1);
    let budget = u32::from(available.saturating_sub(reserve));
    let span = |from: usize, to: usize| widths[from..to].iter().map(|w| u32::from(*w)).sum::<u32>();

    let mut start = start.min(anchor);
    while start < anchor && span(start, anchor + 1) > budget {
        start += 1;
    }
    let mut end = anchor + 1;
    while end < widths.len() && span(start, end + 1) <= budget {
        end += 1;
    }
    while start > 0 && span(start - 1, end) <= budget {
        start -= 1;
    }
    start..end
}

pub fn render_root(frame: &mut Frame, ctx: &RenderContext) {
    let [header_area, body_area, status_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    HeaderWidget { context: ctx.context, namespace: ctx.namespace, theme: ctx.theme }.render(frame, header_area);

    let widths: Vec<u16> = ctx
        .columns
        .iter()
        .map(|c| preferred_width(c.title, c.items, c.filter, ctx.min_column_width))
        .collect();
    let anchor = ctx.focused.min(ctx.columns.len() - 1);
    let window = column_window(&widths, body_area.width, ctx.detail_min_width, ctx.viewport_start.get(), anchor);
    ctx.viewport_start.set(window.start);

    let mut constraints: Vec<Constraint> = window.clone().map(|i| Constraint::Length(widths[i])).collect();
    constraints.push(Constraint::Min(0));
    let areas = Layout::horizontal(constraints).split(body_area);

    for (slot, idx) in window.clone().enumerate() {
        let view = &ctx.columns[idx];
        ColumnWidget {
            title: view.title,
            items: view.items,
            cursor: view.cursor,
            loading: view.loading,
            filter: view.filter,
            focused: ctx.focused == idx,
            theme: ctx.theme,
        }
        .render(frame, areas[slot]);
    }

    let detail = &ctx.detail;
    DetailWidget {
        title: &detail.title,
        lines: detail.lines,
        scroll: detail.scroll,
        stick_to_end: detail.stick_to_end,
        filter: detail.filter,
        highlight_yaml: detail.highlight_yaml,
        focused: ctx.focused >= ctx.columns.len(),
        visible_height: detail.visible_height,
        theme: ctx.theme,
    }
    .render(frame, areas[window.len()]);

    StatusBarWidget {
        mode: ctx.mode_name,
        hints: ctx.hints,
        prompt: ctx.filter_prompt.as_ref().map(|p| FilterPrompt { target: p.target, input: p.input }),
        theme: ctx.theme,
    }
    .render(frame, status_area);

    if let Some(sections) = ctx.help {
        HelpOverlay { sections, close_hint: ctx.help_close_hint, theme: ctx.theme }.render(frame, body_area);
    }

    ToastWidget { toasts: ctx.toasts, theme: ctx.theme }.render(frame, body_area);
}
