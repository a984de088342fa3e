use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Canonical form used as the lookup key: letters carry SHIFT only when
/// uppercase, other characters never carry it (terminals disagree on
/// whether `?` arrives with SHIFT).
pub(super) fn normalize_key_event(key: KeyEvent) -> KeyEvent {
    if key.code == KeyCode::BackTab {
        return KeyEvent::new(KeyCode::BackTab, key.modifiers - KeyModifiers::SHIFT);
    }
    if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
        return KeyEvent::new(KeyCode::BackTab, key.modifiers - KeyModifiers::SHIFT);
    }
    if let KeyCode::Char(c) = key.code {
        if !c.is_ascii_alphabetic() {
            return KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
        }
        // Ctrl+Shift+<letter> is indistinguishable from Ctrl+<letter> in most terminals.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyEvent::new(KeyCode::Char(c.to_ascii_lowercase()), key.modifiers - KeyModifiers::SHIFT);
        }
        if c.is_ascii_lowercase() && key.modifiers.contains(KeyModifiers::SHIFT) {
            return KeyEvent::new(KeyCode::Char(c.to_ascii_uppercase()), key.modifiers);
        }
        if c.is_ascii_uppercase() {
            return KeyEvent::new(key.code, key.modifiers | KeyModifiers::SHIFT);
        }
    }
    KeyEvent::new(key.code, key.modifiers)
}

pub(super) fn format_key_display(key_str: &str) -> String {
    if key_str == "+" {
        return key_str.to_string();
    }
    key_str
        .split('+')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.as_str())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let trimmed = s.trim();
    if trimmed == "+" {
        return Some(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE));
    }
    let parts: Vec<&str> = trimmed.split('+').collect();
    let (key_part, modifier_parts) = parts.split_last()?;

    let mut modifiers = KeyModifiers::NONE;
    for modifier in modifier_parts {
        match modifier.to_ascii_lowercase().as_str() {
            "alt" => modifiers |= KeyModifiers::ALT,
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part.to_ascii_lowercase().as_str() {
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = key_part.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => {
                    if modifiers.contains(KeyModifiers::SHIFT) && ch.is_ascii_lowercase() {
                        KeyCode::Char(ch.to_ascii_uppercase())
                    } else {
                        KeyCode::Char(ch)
                    }
                }
                _ => {
                    let n: u8 = key_part.strip_prefix(['f', 'F'])?.parse().ok()?;
                    KeyCode::F(n)
                }
            }
        }
    };

    Some(normalize_key_event(KeyEvent::new(code, modifiers)))
}
