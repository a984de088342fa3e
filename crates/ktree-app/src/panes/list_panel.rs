/// One browser column: the last fetched labels, an optional substring
/// filter over them and a cursor into the filtered view.
#[derive(Debug)]
pub struct ListPanel {
    title: &'static str,
    all_items: Vec<String>,
    filter: Option<String>,
    visible: Vec<String>,
    cursor: Option<usize>,
    loading: bool,
    /// Bumped whenever `visible` is rebuilt, so deferred selections can tell
    /// whether the content they were scheduled for is still on screen.
    generation: u64,
}

impl ListPanel {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            all_items: Vec::new(),
            filter: None,
            visible: Vec::new(),
            cursor: None,
            loading: false,
            generation: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Replaces the items, re-applying the active filter, and leaves loading.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.all_items = items;
        self.loading = false;
        self.rebuild();
    }

    pub fn set_loading(&mut self, loading: bool) {
        if loading {
            self.all_items.clear();
            self.rebuild();
        }
        self.loading = loading;
    }

    /// Enters loading but keeps items and cursor, so `set_loading(false)`
    /// after a failed reload puts the previous view back.
    pub fn begin_reload(&mut self) {
        self.loading = true;
    }

    /// Empty term clears the filter.
    pub fn apply_filter(&mut self, term: &str) {
        let term = term.to_lowercase();
        self.filter = if term.is_empty() { None } else { Some(term) };
        self.rebuild();
    }

    pub fn clear_filter(&mut self) {
        self.apply_filter("");
    }

    /// Moves the cursor by one step. Returns the newly highlighted item, or
    /// `None` when the panel is disabled or already at the bound.
    pub fn move_cursor(&mut self, delta: isize) -> Option<String> {
        if !self.is_selectable() {
            return None;
        }
        let current = self.cursor.unwrap_or(0);
        let target = current.checked_add_signed(delta)?;
        if target >= self.visible.len() || target == current {
            return None;
        }
        self.cursor = Some(target);
        self.selected().map(str::to_string)
    }

    /// Puts the cursor on `value` if it is visible.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.visible.iter().position(|item| item == value) {
            Some(idx) if !self.loading => {
                self.cursor = Some(idx);
                true
            }
            _ => false,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        if self.loading {
            return None;
        }
        self.cursor.and_then(|idx| self.visible.get(idx)).map(String::as_str)
    }

    pub fn is_selectable(&self) -> bool {
        !self.loading && !self.visible.is_empty()
    }

    pub fn all_items(&self) -> &[String] {
        &self.all_items
    }

    pub fn visible_items(&self) -> &[String] {
        &self.visible
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn rebuild(&mut self) {
        self.visible = match &self.filter {
            Some(term) => self.all_items.iter().filter(|item| item.to_lowercase().contains(term)).cloned().collect(),
            None => self.all_items.clone(),
        };
        self.cursor = if self.visible.is_empty() { None } else { Some(0) };
        self.generation += 1;
    }
}
