use crossterm::event::{KeyEvent, KeyEventKind};
use ktree_tui::widgets::toast::ToastMessage;

use crate::command::{Command, InputMode};
use crate::event::AppEvent;

use super::App;

impl App {
    pub(super) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => self.toasts.retain(|t| !t.is_expired()),
            AppEvent::Resize(_, _) => {}
            AppEvent::Fetched(completion) => self.browser.on_fetched(completion),
            AppEvent::Deferred(highlight) => self.browser.on_deferred(highlight),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(cmd) = self.dispatcher.dispatch(key) {
            tracing::debug!(?cmd, mode = ?self.dispatcher.mode(), "key");
            self.handle_command(cmd);
        }
    }

    pub(super) fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.running = false,
            Command::ShowHelp => {
                let next = match self.dispatcher.mode() {
                    InputMode::Help => InputMode::Normal,
                    _ => InputMode::Help,
                };
                self.dispatcher.set_mode(next);
            }
            Command::ExitMode => self.dispatcher.set_mode(InputMode::Normal),
            Command::FocusLeft => self.browser.focus_left(),
            Command::FocusRight => self.browser.focus_right(),
            Command::FocusUp => self.browser.move_vertical(-1),
            Command::FocusDown => self.browser.move_vertical(1),
            Command::Refresh => self.browser.refresh(),
            Command::ToggleFilter => {
                if self.browser.toggle_filter() {
                    self.filter_input.clear();
                    self.dispatcher.set_mode(InputMode::FilterInput);
                }
            }
            Command::ViewDescribe => self.browser.show_describe(),
            Command::ViewLogs => self.browser.show_logs(),
            Command::ShowExecMenu => self.browser.show_exec_menu(),
            Command::CopyCommand(n) => self.copy_command(n),
            Command::FilterInput(c) => {
                self.filter_input.push(c);
                self.browser.preview_filter(&self.filter_input);
            }
            Command::FilterBackspace => {
                self.filter_input.pop();
                self.browser.preview_filter(&self.filter_input);
            }
            Command::FilterConfirm => {
                let input = std::mem::take(&mut self.filter_input);
                self.browser.commit_filter(&input);
                self.dispatcher.set_mode(InputMode::Normal);
            }
            Command::FilterCancel => {
                self.filter_input.clear();
                self.browser.cancel_filter();
                self.dispatcher.set_mode(InputMode::Normal);
            }
        }
    }

    fn copy_command(&mut self, n: usize) {
        let Some(command) = self.browser.exec_command(n) else { return };
        match self.clipboard.set_text(&command) {
            Ok(()) => {
                tracing::info!(n, "exec command copied");
                self.toasts.push(ToastMessage::success(format!("Command {n} copied to clipboard!")));
            }
            Err(e) => {
                tracing::warn!(n, "clipboard copy failed: {e:#}");
                self.toasts.push(ToastMessage::error("Failed to copy to clipboard"));
            }
        }
    }
}
