#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecShell {
    pub path: &'static str,
    pub description: &'static str,
}

pub const EXEC_SHELLS: [ExecShell; 4] = [
    ExecShell { path: "/bin/sh", description: "most common" },
    ExecShell { path: "/bin/bash", description: "full Linux images" },
    ExecShell { path: "/bin/ash", description: "Alpine Linux" },
    ExecShell { path: "/bin/zsh", description: "some images" },
];

const BOX_WIDTH: usize = 70;

/// Ready-to-paste `kubectl exec` command lines for one pod, one per shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecMenu {
    pub pod: String,
    pub commands: Vec<String>,
}

impl ExecMenu {
    pub fn new(pod: &str, namespace: &str, context: Option<&str>) -> Self {
        let context_part = context.map(|ctx| format!(" --context {ctx}")).unwrap_or_default();
        let commands = EXEC_SHELLS
            .iter()
            .map(|shell| format!("kubectl exec -it {pod} -n {namespace}{context_part} -- {}", shell.path))
            .collect();
        Self { pod: pod.to_string(), commands }
    }

    /// 1-based lookup matching the copy key labels.
    pub fn command(&self, n: usize) -> Option<&str> {
        n.checked_sub(1).and_then(|idx| self.commands.get(idx)).map(String::as_str)
    }

    /// Plain-text body for the detail panel. `copy_keys[i]` labels command `i + 1`;
    /// `None` marks a command without a usable binding.
    pub fn render(&self, copy_keys: &[Option<String>], describe_key: &str) -> String {
        let mut lines = vec![format!("Exec commands for pod: {}", self.pod), String::new()];
        let bound: Vec<String> = copy_keys.iter().flatten().cloned().collect();
        if !bound.is_empty() {
            lines.push(format!("Press {} to copy a command to clipboard.", join_with_or(&bound)));
        }
        lines.push(format!("Press '{describe_key}' to return to describe view."));
        lines.push(String::new());

        for (idx, (command, shell)) in self.commands.iter().zip(EXEC_SHELLS.iter()).enumerate() {
            let label = copy_keys.get(idx).cloned().flatten().unwrap_or_else(|| format!("#{}", idx + 1));
            lines.extend(boxed_entry(&label, shell.description, command));
            lines.push(String::new());
        }
        lines.join("\n")
    }
}

fn join_with_or(keys: &[String]) -> String {
    match keys {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

fn boxed_entry(label: &str, description: &str, command: &str) -> Vec<String> {
    let header = format!("┌─ {label} ─");
    let dashes = BOX_WIDTH.saturating_sub(header.chars().count() + 1).max(1);
    let mut lines = vec![format!("{header}{}┐", "─".repeat(dashes)), format!("│ # {description}")];
    for (i, part) in wrap_command(command, BOX_WIDTH - 4).into_iter().enumerate() {
        if i == 0 {
            lines.push(format!("│ {part}"));
        } else {
            lines.push(format!("│   {part}"));
        }
    }
    lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
    lines
}

/// Splits at the last space that fits, hard-breaking words longer than `width`.
fn wrap_command(command: &str, width: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut remaining = command.trim();
    while remaining.chars().count() > width {
        let hard = remaining.char_indices().nth(width).map(|(i, _)| i).unwrap_or(remaining.len());
        let split = if remaining[hard..].starts_with(' ') {
            hard
        } else {
            remaining[..hard].rfind(' ').filter(|&i| i > 0).unwrap_or(hard)
        };
        parts.push(remaining[..split].to_string());
        remaining = remaining[split..].trim_start();
    }
    if !remaining.is_empty() {
        parts.push(remaining.to_string());
    }
    parts
}
