use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::executor::block_on;
use ratatui::backend::TestBackend;

use super::*;
use crate::command::InputMode;
use crate::gateway::fake::{strings, FakeDirectory};
use crate::gateway::FetchCompletion;
use crate::navigation::PanelId;

#[derive(Clone, Default)]
struct RecordingClipboard {
    copied: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("no display");
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn cluster() -> Arc<FakeDirectory> {
    let directory = FakeDirectory {
        namespaces: strings(&["default", "kube-system"]),
        kinds: strings(&["Pods", "Services"]),
        context: Some("kind-dev".into()),
        reachable: true,
        ..Default::default()
    }
    .with_resources("default", "Pods", &["web-0", "web-1"])
    .with_resources("kube-system", "Pods", &["coredns"])
    .with_resources("default", "Services", &["web"]);
    Arc::new(directory)
}

fn app_with(directory: &Arc<FakeDirectory>, clipboard: RecordingClipboard) -> App {
    let connection = Connection::Ready(directory.clone());
    App::new(&AppConfig::default(), connection, InitialSelection::default(), Box::new(clipboard))
}

/// Delivers queued effects back through the event path until idle.
fn settle(app: &mut App, directory: &FakeDirectory) {
    for _ in 0..64 {
        let effects = app.browser.take_effects();
        if effects.is_empty() {
            return;
        }
        for effect in effects {
            let event = match effect {
                Effect::Fetch(job) => {
                    let result = block_on(job.request.run(directory)).map_err(|e| e.to_string());
                    AppEvent::Fetched(FetchCompletion { job, result })
                }
                Effect::Defer(highlight) => AppEvent::Deferred(highlight),
            };
            app.handle_event(event);
        }
    }
    panic!("effects did not settle");
}

fn key(app: &mut App, code: KeyCode) {
    app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_event(AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn startup_populates_every_panel() {
    let dir = cluster();
    let mut app = app_with(&dir, RecordingClipboard::default());
    settle(&mut app, &dir);

    let text = screen(&app);
    assert!(text.contains("Context: kind-dev | Namespace: default"));
    assert!(text.contains("Namespaces"));
    assert!(text.contains("Object Types"));
    assert!(text.contains("web-0"));
    assert!(text.contains("name: web-0"));
    assert!(text.contains("[g: Logs | e: Exec]"));
}

#[test]
fn arrow_and_letter_keys_cascade() {
    let dir = cluster();
    let mut app = app_with(&dir, RecordingClipboard::default());
    settle(&mut app, &dir);

    key(&mut app, KeyCode::Char('j'));
    settle(&mut app, &dir);
    assert_eq!(app.browser.selection().namespace.as_deref(), Some("kube-system"));
    assert_eq!(app.browser.selection().object_name.as_deref(), Some("coredns"));

    key(&mut app, KeyCode::Up);
    settle(&mut app, &dir);
    key(&mut app, KeyCode::Right);
    key(&mut app, KeyCode::Char('l'));
    assert_eq!(app.browser.navigator().focused(), PanelId::Objects);
    key(&mut app, KeyCode::Down);
    settle(&mut app, &dir);
    assert_eq!(app.browser.selection().object_name.as_deref(), Some("web-1"));
}

#[test]
fn list_filter_prompt_applies_on_enter() {
    let dir = cluster();
    let mut app = app_with(&dir, RecordingClipboard::default());
    settle(&mut app, &dir);

    key(&mut app, KeyCode::Char('/'));
    assert_eq!(app.dispatcher.mode(), InputMode::FilterInput);
    type_text(&mut app, "kube");
    assert!(screen(&app).contains("Filter namespaces: kube"));
    assert_eq!(app.browser.navigator().namespaces().filter(), None);

    key(&mut app, KeyCode::Enter);
    settle(&mut app, &dir);
    assert_eq!(app.dispatcher.mode(), InputMode::Normal);
    assert_eq!(app.browser.navigator().namespaces().visible_items(), strings(&["kube-system"]).as_slice());
    assert_eq!(app.browser.selection().namespace.as_deref(), Some("kube-system"));
    assert!(screen(&app).contains("Namespaces* [kube]"));

    key(&mut app, KeyCode::Char('?'));
    settle(&mut app, &dir);
    assert_eq!(app.dispatcher.mode(), InputMode::Normal);
    assert_eq!(app.browser.navigator().namespaces().filter(), None);
    assert_eq!(app.browser.selection().namespace.as_deref(), Some("default"));
}

#[test]
fn detail_filter_is_live_and_escape_clears() {
    let dir = cluster();
    let mut app = app_with(&dir, RecordingClipboard::default());
    settle(&mut app, &dir);
    for _ in 0..3 {
        key(&mut app, KeyCode::Right);
    }

    key(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "names");
    assert_eq!(app.browser.navigator().detail().lines(), ["  namespace: default"]);
    key(&mut app, KeyCode::Backspace);
    assert_eq!(app.browser.navigator().detail().lines().len(), 2);

    key(&mut app, KeyCode::Esc);
    assert_eq!(app.dispatcher.mode(), InputMode::Normal);
    assert_eq!(app.browser.navigator().detail().filter(), None);
}

#[test]
fn help_overlay_toggles() {
    let dir = cluster();
    let mut app = app_with(&dir, RecordingClipboard::default());
    settle(&mut app, &dir);

    ctrl(&mut app, 'b');
    assert_eq!(app.dispatcher.mode(), InputMode::Help);
    let text = screen(&app);
    assert!(text.contains("Help"));
    assert!(text.contains("Copy exec command 1"));

    key(&mut app, KeyCode::Char('j'));
    assert_eq!(app.browser.selection().namespace.as_deref(), Some("default"), "help swallows navigation");

    key(&mut app, KeyCode::Esc);
    assert_eq!(app.dispatcher.mode(), InputMode::Normal);
    ctrl(&mut app, 'b');
    ctrl(&mut app, 'b');
    assert_eq!(app.dispatcher.mode(), InputMode::Normal);
}

#[test]
fn exec_copy_puts_command_on_clipboard() {
    let dir = cluster();
    let clipboard = RecordingClipboard::default();
    let mut app = app_with(&dir, clipboard.clone());
    settle(&mut app, &dir);

    ctrl(&mut app, '1');
    assert!(app.toasts.is_empty(), "copy is a no-op without a menu");

    key(&mut app, KeyCode::Char('e'));
    ctrl(&mut app, '4');
    assert_eq!(*clipboard.copied.lock().unwrap(), ["kubectl exec -it web-0 -n default --context kind-dev -- /bin/zsh"]);
    assert_eq!(app.toasts.len(), 1);
    assert_eq!(app.toasts[0].text, "Command 4 copied to clipboard!");
}

#[test]
fn clipboard_failure_shows_error_toast() {
    let dir = cluster();
    let mut app = app_with(&dir, RecordingClipboard { fail: true, ..Default::default() });
    settle(&mut app, &dir);

    key(&mut app, KeyCode::Char('e'));
    ctrl(&mut app, '2');
    assert_eq!(app.toasts.len(), 1);
    assert_eq!(app.toasts[0].text, "Failed to copy to clipboard");
}

#[test]
fn logs_key_shows_pod_logs() {
    let mut directory = FakeDirectory {
        namespaces: strings(&["default"]),
        kinds: strings(&["Pods"]),
        ..Default::default()
    }
    .with_resources("default", "Pods", &["web-0"]);
    directory.logs.insert("web-0".into(), "started".into());
    let dir = Arc::new(directory);
    let mut app = app_with(&dir, RecordingClipboard::default());
    settle(&mut app, &dir);

    key(&mut app, KeyCode::Char('g'));
    settle(&mut app, &dir);
    assert_eq!(app.browser.navigator().detail().content(), "Logs for pod: web-0\n\nstarted");

    key(&mut app, KeyCode::Char('d'));
    assert!(app.browser.navigator().detail().content().contains("name: web-0"));
}

#[test]
fn quit_stops_the_loop() {
    let dir = cluster();
    let mut app = app_with(&dir, RecordingClipboard::default());
    key(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn failed_connection_shows_message_and_still_quits() {
    let connection = Connection::Failed("Failed to connect to Kubernetes cluster".into());
    let mut app = App::new(&AppConfig::default(), connection, InitialSelection::default(), Box::<RecordingClipboard>::default());

    assert!(app.browser.take_effects().is_empty());
    let text = screen(&app);
    assert!(text.contains("Connection Error"));
    assert!(text.contains("Press 'q' to quit"));
    assert!(text.contains("Context: Unknown"));

    key(&mut app, KeyCode::Char('r'));
    assert!(app.browser.take_effects().is_empty());
    key(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn expired_toasts_are_dropped_on_tick() {
    let dir = cluster();
    let mut app = app_with(&dir, RecordingClipboard::default());
    let mut toast = ToastMessage::success("old");
    toast.ttl = std::time::Duration::ZERO;
    app.toasts.push(toast);
    app.toasts.push(ToastMessage::error("fresh"));

    app.handle_event(AppEvent::Tick);
    assert_eq!(app.toasts.len(), 1);
    assert_eq!(app.toasts[0].text, "fresh");
}

#[test]
fn copy_labels_stay_aligned_when_a_binding_is_unusable() {
    let mut config = AppConfig::default();
    config.keybindings.clipboard.insert("copy_command_2".into(), "notakey+combo+bad".into());
    let keys = detail_keys(&KeybindingDispatcher::from_config(&config.keybindings));
    assert_eq!(keys.copy, vec![Some("Ctrl+1".to_string()), None, Some("Ctrl+3".to_string()), Some("Ctrl+4".to_string())]);
}
