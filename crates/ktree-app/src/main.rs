mod app;
mod cascade;
mod cli;
mod clipboard;
mod command;
mod event;
mod gateway;
mod keybindings;
mod navigation;
mod panes;

use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags};
use crossterm::execute;
use crossterm::terminal::{self, supports_keyboard_enhancement, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use ktree_config::{check_collisions, validate_keybindings, AppConfig};
use ktree_core::KubeDirectory;

use crate::app::{App, Connection};
use crate::cascade::InitialSelection;
use crate::cli::CliArgs;
use crate::clipboard::SystemClipboard;

const DEBUG_LOG: &str = "debug.log";
const DEFAULT_LOG_FILTER: &str = "info,ktree=debug,ktree_app=debug,ktree_core=debug,ktree_config=debug,ktree_tui=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    if args.debug {
        init_tracing()?;
    }

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    report_keybinding_problems(&config);

    let connection = connect(&args, &config).await;
    let initial = InitialSelection { namespace: args.namespace.clone(), kind: args.kind.clone() };

    terminal::enable_raw_mode()?;
    // Legacy encoding folds ctrl+digit into plain digits, NUL and Esc.
    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    install_panic_hook(keyboard_enhanced);
    if keyboard_enhanced {
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    } else {
        execute!(io::stdout(), EnterAlternateScreen)?;
    }
    tracing::debug!(keyboard_enhanced, "terminal ready");

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, connection, initial, Box::new(SystemClipboard));
    let result = app.run(&mut terminal).await;

    if keyboard_enhanced {
        execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
    }
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(ok = result.is_ok(), "ktree exiting");
    result
}

fn init_tracing() -> anyhow::Result<()> {
    let file = File::create(DEBUG_LOG).with_context(|| format!("could not create {DEBUG_LOG}"))?;
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    tracing::info!(pid = std::process::id(), "debug logging enabled");
    Ok(())
}

fn report_keybinding_problems(config: &AppConfig) {
    for (group, name, error) in validate_keybindings(&config.keybindings) {
        tracing::warn!(%group, %name, %error, "invalid keybinding");
    }
    for (key, first, second) in check_collisions(&config.keybindings) {
        tracing::warn!(%key, %first, %second, "keybinding collision");
    }
}

async fn connect(args: &CliArgs, config: &AppConfig) -> Connection {
    match KubeDirectory::connect(args.context.as_deref(), config.general.show_managed_fields).await {
        Ok(directory) => {
            let directory: Arc<dyn ktree_core::ResourceDirectory> = Arc::new(directory);
            if directory.check_reachable().await {
                Connection::Ready(directory)
            } else {
                tracing::error!("cluster unreachable");
                Connection::Failed("Failed to connect to Kubernetes cluster".into())
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "could not build kube client");
            Connection::Failed(e.to_string())
        }
    }
}

fn install_panic_hook(keyboard_enhanced: bool) {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if keyboard_enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
