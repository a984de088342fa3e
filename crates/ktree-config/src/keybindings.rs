use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub global: IndexMap<String, String>,
    #[serde(default)]
    pub navigation: IndexMap<String, String>,
    #[serde(default)]
    pub browse: IndexMap<String, String>,
    #[serde(default)]
    pub clipboard: IndexMap<String, String>,
}

impl KeybindingsConfig {
    fn group_entries(&self) -> [(&str, &IndexMap<String, String>); 4] {
        [("global", &self.global), ("navigation", &self.navigation), ("browse", &self.browse), ("clipboard", &self.clipboard)]
    }

    /// Per-key merge: entries in `other` override, everything else is kept.
    pub fn merge(&mut self, other: KeybindingsConfig) {
        self.global.extend(other.global);
        self.navigation.extend(other.navigation);
        self.browse.extend(other.browse);
        self.clipboard.extend(other.clipboard);
    }
}

/// Returns `(group, name, error)` for every key string that cannot be parsed.
pub fn validate_keybindings(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut errors = Vec::new();
    for (group, map) in config.group_entries() {
        for (name, key_str) in map {
            if let Err(e) = validate_key_string(key_str) {
                errors.push((group.to_string(), name.clone(), e));
            }
        }
    }
    errors
}

/// Returns `(key, first_group, second_group)` for every key bound twice.
pub fn check_collisions(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut collisions = Vec::new();
    for (group, map) in config.group_entries() {
        for key_str in map.values() {
            let normalized = key_str.trim().to_ascii_lowercase();
            if let Some(prev_group) = seen.get(&normalized) {
                collisions.push((key_str.clone(), prev_group.clone(), group.to_string()));
            } else {
                seen.insert(normalized, group.to_string());
            }
        }
    }
    collisions
}

fn validate_key_string(s: &str) -> Result<(), String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("empty key string".to_string());
    }
    if trimmed == "+" {
        return Ok(());
    }
    let parts: Vec<&str> = trimmed.split('+').collect();
    let (key, modifiers) = match parts.split_last() {
        Some((key, modifiers)) => (*key, modifiers),
        None => return Err("empty key string".to_string()),
    };
    for modifier in modifiers {
        match modifier.to_ascii_lowercase().as_str() {
            "alt" | "ctrl" | "shift" => {}
            other => return Err(format!("unknown modifier: {other}")),
        }
    }
    validate_key_part(key)
}

fn validate_key_part(s: &str) -> Result<(), String> {
    let lower = s.to_ascii_lowercase();
    match lower.as_str() {
        "tab" | "enter" | "esc" | "backspace" | "delete" | "up" | "down" | "left" | "right" | "home" | "end"
        | "pageup" | "pagedown" | "space" => Ok(()),
        _ if s.chars().count() == 1 => Ok(()),
        f if f.starts_with('f') => f[1..].parse::<u8>().map(|_| ()).map_err(|_| format!("invalid function key: {s}")),
        _ => Err(format!("unrecognized key: {s}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_catches_bad_key_string() {
        let mut config = KeybindingsConfig::default();
        config.global.insert("quit".into(), "notakey+combo+bad".into());
        config.global.insert("help".into(), "ctrl+b".into());

        let errors = validate_keybindings(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "global");
        assert_eq!(errors[0].1, "quit");
    }

    #[test]
    fn validate_accepts_valid_keys() {
        let mut config = KeybindingsConfig::default();
        config.global.insert("quit".into(), "q".into());
        config.navigation.insert("focus_up".into(), "up".into());
        config.browse.insert("filter".into(), "/".into());
        config.clipboard.insert("copy_command_1".into(), "ctrl+1".into());

        assert!(validate_keybindings(&config).is_empty());
    }

    #[test]
    fn validate_rejects_empty_and_unknown_modifier() {
        let mut config = KeybindingsConfig::default();
        config.browse.insert("refresh".into(), "  ".into());
        config.browse.insert("logs".into(), "meta+g".into());

        let errors = validate_keybindings(&config);
        assert_eq!(errors.len(), 2);
        assert!(errors[1].2.contains("meta"));
    }

    #[test]
    fn check_collisions_detects_duplicates_across_groups() {
        let mut config = KeybindingsConfig::default();
        config.global.insert("quit".into(), "q".into());
        config.browse.insert("refresh".into(), "Q".into());

        let collisions = check_collisions(&config);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].1, "global");
        assert_eq!(collisions[0].2, "browse");
    }

    #[test]
    fn check_collisions_none_when_unique() {
        let mut config = KeybindingsConfig::default();
        config.global.insert("quit".into(), "q".into());
        config.navigation.insert("focus_up".into(), "k".into());

        assert!(check_collisions(&config).is_empty());
    }

    #[test]
    fn merge_overrides_single_keys() {
        let mut base = KeybindingsConfig::default();
        base.browse.insert("refresh".into(), "r".into());
        base.browse.insert("logs".into(), "g".into());

        let mut user = KeybindingsConfig::default();
        user.browse.insert("logs".into(), "L".into());
        base.merge(user);

        assert_eq!(base.browse.get("refresh").map(String::as_str), Some("r"));
        assert_eq!(base.browse.get("logs").map(String::as_str), Some("L"));
    }
}
