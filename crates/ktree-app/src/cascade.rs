use std::collections::HashMap;

use ktree_core::{ExecMenu, ResourceKind};

use crate::gateway::{FetchCompletion, FetchJob, FetchPayload, FetchPurpose, FetchRequest, FetchSlot};
use crate::navigation::{Highlight, Navigator, PanelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailMode {
    #[default]
    Describe,
    Logs,
    ExecMenu,
}

/// What the user is currently looking at.
#[derive(Debug, Default)]
pub struct SelectionContext {
    pub context_name: Option<String>,
    pub namespace: Option<String>,
    pub object_type: Option<ResourceKind>,
    pub object_name: Option<String>,
    /// Set only when `object_type` is Pods; target of logs and exec.
    pub selected_pod: Option<String>,
    pub detail_mode: DetailMode,
    pub describe_cache: Option<String>,
    pub exec_menu: Option<ExecMenu>,
}

/// Work the browser asks its driver to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchJob),
    /// Re-deliver this highlight later through the event queue.
    Defer(Highlight),
}

/// Key labels quoted in detail-panel texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailKeys {
    pub describe: String,
    pub logs: String,
    pub exec: String,
    /// One label per copy command; `None` when its binding is unusable.
    pub copy: Vec<Option<String>>,
}

impl Default for DetailKeys {
    fn default() -> Self {
        Self {
            describe: "d".into(),
            logs: "g".into(),
            exec: "e".into(),
            copy: (1..=4).map(|n| Some(format!("Ctrl+{n}"))).collect(),
        }
    }
}

/// Pre-selection requested on the command line, consumed by the first
/// population of the matching panel.
#[derive(Debug, Clone, Default)]
pub struct InitialSelection {
    pub namespace: Option<String>,
    pub kind: Option<String>,
}

/// The cascade state machine. All state changes happen through `&mut self`
/// on the UI loop; fetches and deferred selections leave as [`Effect`]s.
pub struct Browser {
    nav: Navigator,
    selection: SelectionContext,
    keys: DetailKeys,
    log_tail_lines: i64,
    initial: InitialSelection,
    effects: Vec<Effect>,
    next_ticket: u64,
    latest_ticket: HashMap<FetchSlot, u64>,
    connection_error: Option<String>,
}

impl Browser {
    pub fn new(context_name: Option<String>, keys: DetailKeys, log_tail_lines: i64, initial: InitialSelection) -> Self {
        Self {
            nav: Navigator::new(),
            selection: SelectionContext { context_name, ..Default::default() },
            keys,
            log_tail_lines,
            initial,
            effects: Vec::new(),
            next_ticket: 0,
            latest_ticket: HashMap::new(),
            connection_error: None,
        }
    }

    pub fn start(&mut self) {
        self.nav.namespaces_mut().set_loading(true);
        self.nav.detail_mut().set_content("Loading namespaces...", false);
        self.issue(FetchRequest::Namespaces, FetchPurpose::Cascade);
    }

    /// Puts the session into its terminal unreachable state.
    pub fn show_connection_error(&mut self, error: &str) {
        tracing::error!("cluster unreachable: {error}");
        self.connection_error = Some(error.to_string());
        self.latest_ticket.clear();
        for panel in [PanelId::Namespaces, PanelId::Kinds, PanelId::Objects] {
            if let Some(list) = self.nav.list_mut(panel) {
                list.set_loading(false);
            }
        }
        self.nav.detail_mut().set_content(format!("✗ Connection Error\n\n{error}\n\nPress 'q' to quit"), false);
    }

    pub fn is_disconnected(&self) -> bool {
        self.connection_error.is_some()
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    pub fn focus_left(&mut self) {
        self.nav.focus_left();
    }

    pub fn focus_right(&mut self) {
        self.nav.focus_right();
    }

    /// Up/down: a selection on list panels, a scroll on the detail panel.
    pub fn move_vertical(&mut self, delta: isize) {
        if let Some(highlight) = self.nav.focus_vertical(delta) {
            self.on_highlight(highlight);
        }
    }

    pub fn on_highlight(&mut self, highlight: Highlight) {
        if self.is_disconnected() {
            return;
        }
        tracing::debug!(panel = ?highlight.panel, item = %highlight.item, "selection");
        match highlight.panel {
            PanelId::Namespaces => self.select_namespace(highlight.item),
            PanelId::Kinds => self.select_kind(highlight.item),
            PanelId::Objects => self.select_object(highlight.item),
            PanelId::Detail => {}
        }
    }

    /// Fires a deferred selection only if the panel still shows the same
    /// content with the cursor on the same item.
    pub fn on_deferred(&mut self, highlight: Highlight) {
        let Some(list) = self.nav.list(highlight.panel) else { return };
        let still_current = !list.is_loading()
            && list.generation() == highlight.generation
            && list.selected() == Some(highlight.item.as_str());
        if !still_current {
            tracing::debug!(panel = ?highlight.panel, item = %highlight.item, "dropping stale deferred selection");
            return;
        }
        self.on_highlight(highlight);
    }

    pub fn on_fetched(&mut self, completion: FetchCompletion) {
        if !self.is_relevant(&completion.job) {
            tracing::debug!(ticket = completion.job.ticket, request = ?completion.job.request, "dropping stale result");
            return;
        }
        let FetchCompletion { job, result } = completion;
        tracing::debug!(ticket = job.ticket, ok = result.is_ok(), "applying result");
        match job.request {
            FetchRequest::Namespaces => self.apply_namespaces(names(result), job.purpose),
            FetchRequest::Kinds { namespace } => self.apply_kinds(namespace, names(result), job.purpose),
            FetchRequest::Resources { namespace, kind } => {
                self.apply_resources(namespace, kind, names(result), job.purpose)
            }
            FetchRequest::Describe { kind, name, .. } => self.apply_describe(kind, name, text(result)),
            FetchRequest::Logs { pod, .. } => self.apply_logs(pod, text(result)),
        }
    }

    /// Re-fetches the deepest selected level, keeping the cursor item if it survives.
    pub fn refresh(&mut self) {
        if self.is_disconnected() {
            return;
        }
        let (panel, request) = match (self.selection.namespace.clone(), self.selection.object_type.clone()) {
            (Some(namespace), Some(kind)) => (PanelId::Objects, FetchRequest::Resources { namespace, kind }),
            (Some(namespace), None) => (PanelId::Kinds, FetchRequest::Kinds { namespace }),
            _ => (PanelId::Namespaces, FetchRequest::Namespaces),
        };
        let Some(list) = self.nav.list_mut(panel) else { return };
        let keep = list.selected().map(str::to_string);
        list.begin_reload();
        tracing::info!(panel = ?panel, keep = ?keep, "refresh");
        self.issue(request, FetchPurpose::Refresh { keep });
    }

    pub fn show_describe(&mut self) {
        if self.is_disconnected() {
            return;
        }
        self.selection.detail_mode = DetailMode::Describe;
        self.selection.exec_menu = None;
        if let Some(text) = self.selection.describe_cache.clone() {
            self.nav.detail_mut().set_content(text, false);
            return;
        }
        let sel = &self.selection;
        if let (Some(ns), Some(kind), Some(name)) = (&sel.namespace, &sel.object_type, &sel.object_name) {
            let (ns, kind, name) = (ns.clone(), kind.clone(), name.clone());
            self.request_describe(ns, kind, name);
        }
    }

    pub fn show_logs(&mut self) {
        if self.is_disconnected() {
            return;
        }
        let Some((namespace, pod)) = self.pod_target() else {
            self.nav
                .detail_mut()
                .set_content("Logs are only available for Pods. Please select a Pod first.", false);
            return;
        };
        self.selection.detail_mode = DetailMode::Logs;
        self.selection.exec_menu = None;
        self.nav.detail_mut().set_content(format!("Loading logs for pod: {pod}..."), false);
        let tail_lines = self.log_tail_lines;
        self.issue(FetchRequest::Logs { namespace, pod, tail_lines }, FetchPurpose::Cascade);
    }

    pub fn show_exec_menu(&mut self) {
        if self.is_disconnected() {
            return;
        }
        let Some((namespace, pod)) = self.pod_target() else {
            self.nav
                .detail_mut()
                .set_content("Exec is only available for Pods. Please select a Pod first.", false);
            return;
        };
        let menu = ExecMenu::new(&pod, &namespace, self.selection.context_name.as_deref());
        self.nav.detail_mut().set_content(menu.render(&self.keys.copy, &self.keys.describe), false);
        self.selection.detail_mode = DetailMode::ExecMenu;
        self.selection.exec_menu = Some(menu);
    }

    /// Command `n` of the exec menu on screen, if any.
    pub fn exec_command(&self, n: usize) -> Option<String> {
        if self.selection.detail_mode != DetailMode::ExecMenu {
            return None;
        }
        self.selection.exec_menu.as_ref()?.command(n).map(str::to_string)
    }

    /// Clears an active filter on the focused panel. Returns `true` when there
    /// was none, meaning the caller should start collecting filter input.
    pub fn toggle_filter(&mut self) -> bool {
        if self.is_disconnected() {
            return false;
        }
        if self.focused_filter().is_some() {
            self.clear_focused_filter();
            false
        } else {
            true
        }
    }

    pub fn filter_target(&self) -> PanelId {
        self.nav.focused()
    }

    /// Live update while typing; only the detail panel filters as you type.
    pub fn preview_filter(&mut self, input: &str) {
        if self.nav.focused() == PanelId::Detail {
            self.nav.detail_mut().apply_filter(input);
        }
    }

    pub fn commit_filter(&mut self, input: &str) {
        let panel = self.nav.focused();
        match self.nav.list_mut(panel) {
            Some(list) => {
                list.apply_filter(input);
                self.after_list_filter(panel);
            }
            None => self.nav.detail_mut().apply_filter(input),
        }
    }

    pub fn cancel_filter(&mut self) {
        if self.focused_filter().is_some() {
            self.clear_focused_filter();
        }
    }

    pub fn detail_title(&self) -> String {
        let mut title = String::from("Details");
        match self.selection.detail_mode {
            DetailMode::Describe => {}
            DetailMode::Logs => title.push_str(" - Logs"),
            DetailMode::ExecMenu => title.push_str(" - Exec"),
        }
        if self.selection.object_type.as_ref().is_some_and(ResourceKind::is_pod) {
            title.push_str(&format!(" [{}: Logs | {}: Exec]", self.keys.logs, self.keys.exec));
        }
        title
    }

    /// Whether the detail body is describe YAML.
    pub fn detail_is_yaml(&self) -> bool {
        !self.is_disconnected()
            && self.selection.detail_mode == DetailMode::Describe
            && self.selection.describe_cache.as_deref() == Some(self.nav.detail().content())
    }

    fn select_namespace(&mut self, namespace: String) {
        self.selection.namespace = Some(namespace.clone());
        self.clear_selection_below(PanelId::Namespaces);
        self.invalidate(&[FetchSlot::Objects, FetchSlot::Detail]);

        self.nav.kinds_mut().set_loading(true);
        self.nav.objects_mut().set_items(Vec::new());
        self.nav.detail_mut().set_content(format!("Loading object types for namespace: {namespace}..."), false);
        self.issue(FetchRequest::Kinds { namespace }, FetchPurpose::Cascade);
    }

    fn select_kind(&mut self, name: String) {
        let Some(namespace) = self.selection.namespace.clone() else { return };
        let kind = ResourceKind::from_name(&name);
        self.selection.object_type = Some(kind.clone());
        self.clear_selection_below(PanelId::Kinds);
        self.invalidate(&[FetchSlot::Detail]);

        self.nav.objects_mut().set_loading(true);
        self.nav.detail_mut().set_content(format!("Loading {kind} in namespace: {namespace}..."), false);
        self.issue(FetchRequest::Resources { namespace, kind }, FetchPurpose::Cascade);
    }

    fn select_object(&mut self, name: String) {
        let (Some(namespace), Some(kind)) = (self.selection.namespace.clone(), self.selection.object_type.clone())
        else {
            return;
        };
        self.selection.object_name = Some(name.clone());
        self.selection.selected_pod = kind.is_pod().then(|| name.clone());
        self.clear_selection_below(PanelId::Objects);
        self.request_describe(namespace, kind, name);
    }

    fn request_describe(&mut self, namespace: String, kind: ResourceKind, name: String) {
        self.nav.detail_mut().set_content(format!("Loading details for {kind}/{name}..."), false);
        self.issue(FetchRequest::Describe { namespace, kind, name }, FetchPurpose::Cascade);
    }

    fn apply_namespaces(&mut self, result: Result<Vec<String>, String>, purpose: FetchPurpose) {
        match result {
            Ok(names) => {
                let wanted = self.initial.namespace.take().or_else(|| kept(purpose));
                let list = self.nav.namespaces_mut();
                list.set_items(names);
                if let Some(wanted) = wanted {
                    list.select_value(&wanted);
                }
                if !self.schedule_current(PanelId::Namespaces) {
                    self.forget_level(PanelId::Namespaces);
                    self.nav.kinds_mut().set_items(Vec::new());
                    self.nav.objects_mut().set_items(Vec::new());
                    self.nav.detail_mut().set_content("No namespaces found", false);
                }
            }
            Err(e) => {
                self.nav.namespaces_mut().set_loading(false);
                self.nav.detail_mut().set_content(format!("Error loading namespaces: {e}"), false);
            }
        }
    }

    fn apply_kinds(&mut self, namespace: String, result: Result<Vec<String>, String>, purpose: FetchPurpose) {
        match result {
            Ok(names) => {
                let wanted = match self.initial.kind.take() {
                    Some(flag) => matching_kind(&names, &flag),
                    None => kept(purpose),
                };
                let list = self.nav.kinds_mut();
                list.set_items(names);
                if let Some(wanted) = wanted {
                    list.select_value(&wanted);
                }
                if !self.schedule_current(PanelId::Kinds) {
                    self.forget_level(PanelId::Kinds);
                    self.nav.objects_mut().set_items(Vec::new());
                    self.nav
                        .detail_mut()
                        .set_content(format!("No object types found in namespace: {namespace}"), false);
                }
            }
            Err(e) => {
                self.nav.kinds_mut().set_loading(false);
                self.nav
                    .detail_mut()
                    .set_content(format!("Error loading object types for namespace: {namespace}: {e}"), false);
            }
        }
    }

    fn apply_resources(
        &mut self,
        namespace: String,
        kind: ResourceKind,
        result: Result<Vec<String>, String>,
        purpose: FetchPurpose,
    ) {
        match result {
            Ok(names) => {
                let fetched_none = names.is_empty();
                let list = self.nav.objects_mut();
                list.set_items(names);
                if let Some(keep) = kept(purpose) {
                    list.select_value(&keep);
                }
                if self.schedule_current(PanelId::Objects) {
                    return;
                }
                self.forget_level(PanelId::Objects);
                let message =
                    if fetched_none { format!("No {kind} found in namespace: {namespace}") } else { String::new() };
                self.nav.detail_mut().set_content(message, false);
            }
            Err(e) => {
                self.nav.objects_mut().set_loading(false);
                self.nav
                    .detail_mut()
                    .set_content(format!("Error loading {kind} in namespace: {namespace}: {e}"), false);
            }
        }
    }

    fn apply_describe(&mut self, kind: ResourceKind, name: String, result: Result<String, String>) {
        let showing_describe = self.selection.detail_mode == DetailMode::Describe;
        match result {
            Ok(text) => {
                self.selection.describe_cache = Some(text.clone());
                if showing_describe {
                    self.nav.detail_mut().set_content(text, false);
                }
            }
            Err(e) if showing_describe => {
                self.nav.detail_mut().set_content(format!("Error loading details for {kind}/{name}: {e}"), false);
            }
            Err(_) => {}
        }
    }

    fn apply_logs(&mut self, pod: String, result: Result<String, String>) {
        let body = match result {
            Ok(logs) => {
                self.nav.detail_mut().set_content(format!("Logs for pod: {pod}\n\n{logs}"), true);
                return;
            }
            Err(e) => format!("Error loading logs for pod: {pod}: {e}"),
        };
        self.nav.detail_mut().set_content(body, false);
    }

    fn is_relevant(&self, job: &FetchJob) -> bool {
        if self.latest_ticket.get(&job.request.slot()) != Some(&job.ticket) {
            return false;
        }
        let sel = &self.selection;
        let in_namespace = |ns: &String| sel.namespace.as_ref() == Some(ns);
        match &job.request {
            FetchRequest::Namespaces => true,
            FetchRequest::Kinds { namespace } => in_namespace(namespace),
            FetchRequest::Resources { namespace, kind } => {
                in_namespace(namespace) && sel.object_type.as_ref() == Some(kind)
            }
            FetchRequest::Describe { namespace, kind, name } => {
                in_namespace(namespace) && sel.object_type.as_ref() == Some(kind) && sel.object_name.as_ref() == Some(name)
            }
            FetchRequest::Logs { namespace, pod, .. } => {
                sel.detail_mode == DetailMode::Logs && in_namespace(namespace) && sel.selected_pod.as_ref() == Some(pod)
            }
        }
    }

    fn issue(&mut self, request: FetchRequest, purpose: FetchPurpose) {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.latest_ticket.insert(request.slot(), ticket);
        self.effects.push(Effect::Fetch(FetchJob { ticket, request, purpose }));
    }

    fn invalidate(&mut self, slots: &[FetchSlot]) {
        for slot in slots {
            self.latest_ticket.remove(slot);
        }
    }

    /// Queues the panel's cursor item for cascading. `false` if there is none.
    fn schedule_current(&mut self, panel: PanelId) -> bool {
        match self.nav.highlight_of(panel) {
            Some(highlight) => {
                self.effects.push(Effect::Defer(highlight));
                true
            }
            None => false,
        }
    }

    fn pod_target(&self) -> Option<(String, String)> {
        let sel = &self.selection;
        if !sel.object_type.as_ref().is_some_and(ResourceKind::is_pod) {
            return None;
        }
        Some((sel.namespace.clone()?, sel.selected_pod.clone()?))
    }

    fn clear_selection_below(&mut self, panel: PanelId) {
        let sel = &mut self.selection;
        if panel == PanelId::Namespaces {
            sel.object_type = None;
        }
        if panel != PanelId::Objects {
            sel.object_name = None;
            sel.selected_pod = None;
        }
        sel.describe_cache = None;
        sel.exec_menu = None;
        sel.detail_mode = DetailMode::Describe;
    }

    /// Drops the panel's own selection and everything under it.
    fn forget_level(&mut self, panel: PanelId) {
        match panel {
            PanelId::Namespaces => self.selection.namespace = None,
            PanelId::Kinds => self.selection.object_type = None,
            PanelId::Objects => {
                self.selection.object_name = None;
                self.selection.selected_pod = None;
            }
            PanelId::Detail => return,
        }
        self.clear_selection_below(panel);
        let below: &[FetchSlot] = match panel {
            PanelId::Namespaces => &[FetchSlot::Kinds, FetchSlot::Objects, FetchSlot::Detail],
            PanelId::Kinds => &[FetchSlot::Objects, FetchSlot::Detail],
            _ => &[FetchSlot::Detail],
        };
        self.invalidate(below);
    }

    fn focused_filter(&self) -> Option<&str> {
        match self.nav.list(self.nav.focused()) {
            Some(list) => list.filter(),
            None => self.nav.detail().filter(),
        }
    }

    fn clear_focused_filter(&mut self) {
        let panel = self.nav.focused();
        match self.nav.list_mut(panel) {
            Some(list) => {
                list.clear_filter();
                self.after_list_filter(panel);
            }
            None => self.nav.detail_mut().clear_filter(),
        }
    }

    /// A list filter moved the cursor to the first visible item: cascade from
    /// it, or empty everything downstream when nothing is left.
    fn after_list_filter(&mut self, panel: PanelId) {
        if let Some(highlight) = self.nav.highlight_of(panel) {
            self.on_highlight(highlight);
            return;
        }
        self.forget_level(panel);
        if panel == PanelId::Namespaces {
            self.nav.kinds_mut().set_items(Vec::new());
        }
        if panel != PanelId::Objects {
            self.nav.objects_mut().set_items(Vec::new());
        }
        self.nav.detail_mut().set_content(String::new(), false);
    }
}

fn kept(purpose: FetchPurpose) -> Option<String> {
    match purpose {
        FetchPurpose::Refresh { keep } => keep,
        FetchPurpose::Cascade => None,
    }
}

/// Kind label in `names` that the `--type` flag refers to.
fn matching_kind(names: &[String], flag: &str) -> Option<String> {
    let wanted = ResourceKind::from_name(flag);
    names.iter().find(|name| name.eq_ignore_ascii_case(flag.trim()) || ResourceKind::from_name(name) == wanted).cloned()
}

fn names(result: Result<FetchPayload, String>) -> Result<Vec<String>, String> {
    match result? {
        FetchPayload::Names(names) => Ok(names),
        FetchPayload::Text(_) => Err("unexpected text response".into()),
    }
}

fn text(result: Result<FetchPayload, String>) -> Result<String, String> {
    match result? {
        FetchPayload::Text(text) => Ok(text),
        FetchPayload::Names(_) => Err("unexpected list response".into()),
    }
}
