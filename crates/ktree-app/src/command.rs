pub use crate::keybindings::InputMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    ShowHelp,
    ExitMode,
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,
    Refresh,
    ToggleFilter,
    ViewDescribe,
    ViewLogs,
    ShowExecMenu,
    /// 1-based index into the exec menu.
    CopyCommand(usize),
    FilterInput(char),
    FilterBackspace,
    FilterConfirm,
    FilterCancel,
}
