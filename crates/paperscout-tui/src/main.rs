use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use paperscout_core::{Config, RemoteGateway};

mod action;
mod app;
mod input;
mod runner;
mod save;
mod theme;
mod view;

use app::App;
use theme::Theme;

/// Paperscout — explore a research topic, search the paper index and export
/// selected papers from the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the exploration service
    #[arg(long)]
    api_url: Option<String>,

    /// Directory exports are saved into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Timeout in seconds for expansion and search requests
    #[arg(long)]
    timeout: Option<u64>,

    /// Timeout in seconds for export downloads
    #[arg(long)]
    download_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Resolve config from CLI flags > env vars > defaults
    let defaults = Config::default();
    let config = Config {
        base_url: args
            .api_url
            .or_else(|| std::env::var("PAPERSCOUT_API_URL").ok())
            .unwrap_or(defaults.base_url),
        request_timeout_secs: args
            .timeout
            .or_else(|| {
                std::env::var("PAPERSCOUT_TIMEOUT")
                    .ok()
                    .and_then(|v| v.parse().ok())
            })
            .unwrap_or(defaults.request_timeout_secs),
        download_timeout_secs: args
            .download_timeout
            .or_else(|| {
                std::env::var("PAPERSCOUT_DOWNLOAD_TIMEOUT")
                    .ok()
                    .and_then(|v| v.parse().ok())
            })
            .unwrap_or(defaults.download_timeout_secs),
        max_results: defaults.max_results,
    };

    let gateway = Arc::new(RemoteGateway::new(&config)?);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(config.max_results, Theme::ink());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            // Gateway completions (non-blocking drain)
            maybe_event = rx.recv() => {
                if let Some(gateway_event) = maybe_event {
                    app.handle_gateway_event(gateway_event);
                    while let Ok(evt) = rx.try_recv() {
                        app.handle_gateway_event(evt);
                    }
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let action = input::map_event(&evt, app.input_mode);
                        if let Some(command) = app.update(action) {
                            runner::dispatch(
                                command,
                                gateway.clone(),
                                tx.clone(),
                                cancel.clone(),
                            );
                        }
                    }
                }
            } => {}
        }

        let _ = app.update(action::Action::Tick);

        // Persist any export the workflow just completed
        if let Some(payload) = app.explorer.take_export() {
            match save::save_export(&payload, &args.out_dir) {
                Ok(path) => app
                    .explorer
                    .note_export_saved(&path.display().to_string()),
                Err(reason) => app.explorer.note_export_failed(&reason),
            }
        }

        if cancel.is_cancelled() {
            app.should_quit = true;
        }
        if app.should_quit {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
