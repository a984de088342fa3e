use crate::command::Command;

pub(super) fn global_command_from_name(name: &str) -> Option<Command> {
    match name {
        "quit" => Some(Command::Quit),
        "help" => Some(Command::ShowHelp),
        _ => None,
    }
}

pub(super) fn global_command_description(name: &str) -> String {
    match name {
        "quit" => "Quit",
        "help" => "Help",
        _ => "Unknown",
    }
    .into()
}

pub(super) fn navigation_command_from_name(name: &str) -> Option<Command> {
    match name.strip_suffix("_alt").unwrap_or(name) {
        "focus_left" => Some(Command::FocusLeft),
        "focus_right" => Some(Command::FocusRight),
        "focus_up" => Some(Command::FocusUp),
        "focus_down" => Some(Command::FocusDown),
        _ => None,
    }
}

pub(super) fn navigation_command_description(name: &str) -> String {
    match name.strip_suffix("_alt").unwrap_or(name) {
        "focus_left" => "Previous column",
        "focus_right" => "Next column",
        "focus_up" => "Move up / scroll up",
        "focus_down" => "Move down / scroll down",
        _ => "Unknown",
    }
    .into()
}

pub(super) fn browse_command_from_name(name: &str) -> Option<Command> {
    match name.strip_suffix("_alt").unwrap_or(name) {
        "refresh" => Some(Command::Refresh),
        "filter" => Some(Command::ToggleFilter),
        "describe" => Some(Command::ViewDescribe),
        "logs" => Some(Command::ViewLogs),
        "exec" => Some(Command::ShowExecMenu),
        _ => None,
    }
}

pub(super) fn browse_command_description(name: &str) -> String {
    match name.strip_suffix("_alt").unwrap_or(name) {
        "refresh" => "Refresh",
        "filter" => "Filter",
        "describe" => "Describe",
        "logs" => "Logs",
        "exec" => "Exec",
        _ => "Unknown",
    }
    .into()
}

pub(super) fn clipboard_command_from_name(name: &str) -> Option<Command> {
    let n: usize = name.strip_prefix("copy_command_")?.parse().ok()?;
    (1..=4).contains(&n).then_some(Command::CopyCommand(n))
}

pub(super) fn clipboard_command_description(name: &str) -> String {
    match name.strip_prefix("copy_command_") {
        Some(n) => format!("Copy exec command {n}"),
        None => "Unknown".into(),
    }
}
