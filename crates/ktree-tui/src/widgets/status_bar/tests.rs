use ratatui::backend::TestBackend;
use ratatui::Terminal;

use super::*;

fn render_status_bar(mode: &str, hints: &[(String, String)], prompt: Option<FilterPrompt<'_>>) -> String {
    let theme = Theme::default();
    let backend = TestBackend::new(100, 1);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let widget = StatusBarWidget { mode, hints, prompt, theme: &theme };
            widget.render(frame, frame.area());
        })
        .unwrap();
    terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
}

#[test]
fn shows_hints() {
    let hints = vec![("R".into(), "Refresh".into()), ("Ctrl+B".into(), "Help".into())];
    let text = render_status_bar("Normal", &hints, None);
    assert!(text.contains("NORMAL"));
    assert!(text.contains("R Refresh"));
    assert!(text.contains("Ctrl+B Help"));
}

#[test]
fn prompt_replaces_hints() {
    let hints = vec![("R".into(), "Refresh".into())];
    let text = render_status_bar("Filter", &hints, Some(FilterPrompt { target: "Namespaces", input: "kube" }));
    assert!(text.contains("FILTER"));
    assert!(text.contains("Filter Namespaces: kube"));
    assert!(!text.contains("Refresh"));
}
