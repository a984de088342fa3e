use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use ktree_config::AppConfig;
use ktree_core::ResourceDirectory;
use ktree_tui::theme::Theme;
use ktree_tui::widgets::help::HelpSection;
use ktree_tui::widgets::toast::ToastMessage;

use crate::cascade::{Browser, DetailKeys, Effect, InitialSelection};
use crate::clipboard::Clipboard;
use crate::event::{AppEvent, EventHandler};
use crate::gateway::FetchGateway;
use crate::keybindings::KeybindingDispatcher;

mod input;
mod render;

/// Outcome of connecting to the cluster before the UI starts.
pub enum Connection {
    Ready(Arc<dyn ResourceDirectory>),
    Failed(String),
}

pub struct App {
    running: bool,
    tick_rate: Duration,
    browser: Browser,
    dispatcher: KeybindingDispatcher,
    directory: Option<Arc<dyn ResourceDirectory>>,
    filter_input: String,
    toasts: Vec<ToastMessage>,
    help_sections: Vec<HelpSection>,
    help_close_hint: String,
    status_hints: Vec<(String, String)>,
    clipboard: Box<dyn Clipboard>,
    theme: Theme,
    min_column_width: u16,
    detail_min_width: u16,
}

impl App {
    pub fn new(
        config: &AppConfig,
        connection: Connection,
        initial: InitialSelection,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let dispatcher = KeybindingDispatcher::from_config(&config.keybindings);
        let keys = detail_keys(&dispatcher);
        let help_key = dispatcher.key_for("help").unwrap_or_else(|| "Esc".into());

        let (directory, context_name, failure) = match connection {
            Connection::Ready(directory) => {
                let context = directory.current_context_name();
                (Some(directory), context, None)
            }
            Connection::Failed(error) => (None, None, Some(error)),
        };

        let mut browser = Browser::new(context_name, keys, config.general.log_tail_lines, initial);
        match failure {
            Some(error) => browser.show_connection_error(&error),
            None => browser.start(),
        }

        Self {
            running: true,
            tick_rate: Duration::from_millis(config.tick_rate_ms()),
            browser,
            help_sections: dispatcher.help_sections(),
            help_close_hint: format!("Press Esc or {help_key} to close"),
            status_hints: dispatcher.status_hints(),
            dispatcher,
            directory,
            filter_input: String::new(),
            toasts: Vec::new(),
            clipboard,
            theme: Theme::from_config(&config.theme),
            min_column_width: config.general.min_column_width,
            detail_min_width: config.general.detail_min_width,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> anyhow::Result<()> {
        let mut events = EventHandler::new(self.tick_rate);
        let app_tx = events.app_tx();
        let gateway = self.directory.clone().map(|directory| FetchGateway::new(directory, app_tx.clone()));

        while self.running {
            self.flush_effects(gateway.as_ref(), &app_tx);
            terminal.draw(|frame| self.render(frame))?;

            let event = events.next().await?;
            self.handle_event(event);
            for event in events.drain_pending() {
                self.handle_event(event);
            }
        }

        Ok(())
    }

    fn flush_effects(&mut self, gateway: Option<&FetchGateway>, app_tx: &mpsc::UnboundedSender<AppEvent>) {
        for effect in self.browser.take_effects() {
            match effect {
                Effect::Fetch(job) => match gateway {
                    Some(gateway) => gateway.fetch(job),
                    None => tracing::warn!(request = ?job.request, "no directory; fetch skipped"),
                },
                Effect::Defer(highlight) => {
                    let _ = app_tx.send(AppEvent::Deferred(highlight));
                }
            }
        }
    }
}

fn detail_keys(dispatcher: &KeybindingDispatcher) -> DetailKeys {
    let defaults = DetailKeys::default();
    let key = |name: &str, fallback: &str| dispatcher.key_string_for(name).unwrap_or_else(|| fallback.to_string());
    DetailKeys {
        describe: key("describe", &defaults.describe),
        logs: key("logs", &defaults.logs),
        exec: key("exec", &defaults.exec),
        copy: (1..=4).map(|n| dispatcher.key_for(&format!("copy_command_{n}"))).collect(),
    }
}

#[cfg(test)]
mod tests;
