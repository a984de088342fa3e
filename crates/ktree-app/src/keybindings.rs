use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};

use ktree_config::KeybindingsConfig;
use ktree_tui::widgets::help::HelpSection;

use crate::command::Command;

mod commands;
mod parsing;

pub use parsing::parse_key_string;

use commands::{
    browse_command_description, browse_command_from_name, clipboard_command_description, clipboard_command_from_name,
    global_command_description, global_command_from_name, navigation_command_description,
    navigation_command_from_name,
};
use parsing::{format_key_display, normalize_key_event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    FilterInput,
    Help,
}

impl InputMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::FilterInput => "Filter",
            Self::Help => "Help",
        }
    }
}

/// (config name, key string, description)
type Reverse = Vec<(String, String, String)>;

pub struct KeybindingDispatcher {
    mode: InputMode,
    global_bindings: HashMap<KeyEvent, Command>,
    navigation_bindings: HashMap<KeyEvent, Command>,
    browse_bindings: HashMap<KeyEvent, Command>,
    clipboard_bindings: HashMap<KeyEvent, Command>,
    reverse_global: Reverse,
    reverse_navigation: Reverse,
    reverse_browse: Reverse,
    reverse_clipboard: Reverse,
}

fn build_group<'a>(
    group: impl IntoIterator<Item = (&'a String, &'a String)>,
    from_name: fn(&str) -> Option<Command>,
    describe: fn(&str) -> String,
) -> (HashMap<KeyEvent, Command>, Reverse) {
    let mut bindings = HashMap::new();
    let mut reverse = Vec::new();
    for (name, key_str) in group {
        let Some(cmd) = from_name(name) else {
            tracing::warn!("ignoring unknown keybinding '{name}'");
            continue;
        };
        match parse_key_string(key_str) {
            Some(key) => {
                bindings.insert(key, cmd);
                reverse.push((name.clone(), key_str.clone(), describe(name)));
            }
            None => tracing::warn!("ignoring unparsable key '{key_str}' for '{name}'"),
        }
    }
    (bindings, reverse)
}

impl KeybindingDispatcher {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let (global_bindings, reverse_global) =
            build_group(&config.global, global_command_from_name, global_command_description);
        let (navigation_bindings, reverse_navigation) =
            build_group(&config.navigation, navigation_command_from_name, navigation_command_description);
        let (browse_bindings, reverse_browse) =
            build_group(&config.browse, browse_command_from_name, browse_command_description);
        let (clipboard_bindings, reverse_clipboard) =
            build_group(&config.clipboard, clipboard_command_from_name, clipboard_command_description);

        Self {
            mode: InputMode::Normal,
            global_bindings,
            navigation_bindings,
            browse_bindings,
            clipboard_bindings,
            reverse_global,
            reverse_navigation,
            reverse_browse,
            reverse_clipboard,
        }
    }

    pub fn dispatch(&self, key: KeyEvent) -> Option<Command> {
        let key = normalize_key_event(key);

        if self.mode == InputMode::FilterInput {
            return match key.code {
                KeyCode::Esc => Some(Command::FilterCancel),
                KeyCode::Enter => Some(Command::FilterConfirm),
                KeyCode::Backspace => Some(Command::FilterBackspace),
                KeyCode::Char(c) => Some(Command::FilterInput(c)),
                _ => None,
            };
        }

        if let Some(cmd) = self.global_bindings.get(&key) {
            return Some(cmd.clone());
        }

        match self.mode {
            InputMode::Help => (key.code == KeyCode::Esc).then_some(Command::ExitMode),
            InputMode::Normal => self
                .navigation_bindings
                .get(&key)
                .or_else(|| self.browse_bindings.get(&key))
                .or_else(|| self.clipboard_bindings.get(&key))
                .cloned(),
            InputMode::FilterInput => unreachable!("handled above"),
        }
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    fn all_reverse(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.reverse_global
            .iter()
            .chain(&self.reverse_navigation)
            .chain(&self.reverse_browse)
            .chain(&self.reverse_clipboard)
    }

    /// Key string exactly as configured, e.g. `"d"` or `"ctrl+1"`.
    pub fn key_string_for(&self, name: &str) -> Option<String> {
        self.all_reverse().find(|(n, _, _)| n == name).map(|(_, key_str, _)| key_str.clone())
    }

    pub fn key_for(&self, name: &str) -> Option<String> {
        self.key_string_for(name).map(|key_str| format_key_display(&key_str))
    }

    pub fn help_sections(&self) -> Vec<HelpSection> {
        let section = |title: &str, reverse: &Reverse| HelpSection {
            title: title.to_string(),
            entries: reverse.iter().map(|(_, key_str, desc)| (format_key_display(key_str), desc.clone())).collect(),
        };
        vec![
            section("Global", &self.reverse_global),
            section("Navigation", &self.reverse_navigation),
            section("Browse", &self.reverse_browse),
            section("Clipboard", &self.reverse_clipboard),
        ]
    }

    /// Short hint list for the status bar.
    pub fn status_hints(&self) -> Vec<(String, String)> {
        ["quit", "help", "refresh", "filter", "describe", "logs", "exec"]
            .into_iter()
            .filter_map(|name| {
                let (_, key_str, desc) = self.all_reverse().find(|(n, _, _)| n == name)?;
                Some((format_key_display(key_str), desc.clone()))
            })
            .collect()
    }
}
