use std::io;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

mod action;
mod admin;
mod app;
mod catalog;
mod embeds;
mod input;
mod logging;
mod theme;
mod view;

use hothub_core::Route;
use hothub_core::storage::{FileStore, KvStore, MemoryStore, THEME_KEY};

use app::App;
use theme::Theme;

/// HotHub terminal shell — an age-gated content browser.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Theme override: light or dark (persisted for future sessions)
    #[arg(long)]
    theme: Option<String>,

    /// Path to open once the gate admits the visitor (e.g. /video/3)
    #[arg(long)]
    start_path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let _log_guard = logging::init();

    // Theme override: CLI flag > environment. Written through the durable
    // store so bootstrap stays the single reader.
    let theme_override = args
        .theme
        .clone()
        .or_else(|| std::env::var("HOTHUB_THEME").ok());
    if let Some(ref t) = theme_override
        && t != "light"
        && t != "dark"
    {
        anyhow::bail!("unknown theme {t:?} (expected \"light\" or \"dark\")");
    }

    let mut durable = FileStore::open_default();
    if let Some(ref t) = theme_override {
        durable.set(THEME_KEY, t);
    }

    // One-time startup effects: apply the stored theme, initial janitor sweep.
    let mut scope = app::RootScope::default();
    let mut badges = embeds::EmbedSurface::default();
    let (pref, janitor) = hothub_core::bootstrap(&durable, &mut scope, &mut badges);
    let theme = Theme::from_preference(pref);

    // Lazy admin subtree: loaded on first navigation, delivered via channel.
    let (admin_tx, mut admin_rx) = mpsc::unbounded_channel();
    let loader = admin::TokioModuleLoader::new(admin_tx, Duration::from_millis(400));

    let mut app = App::new(
        Box::new(durable),
        Box::new(MemoryStore::default()),
        Box::new(loader),
        theme,
        catalog::demo(),
    );
    app.badges = badges;
    app.janitor = janitor;
    app.gate.hydrate();
    if let Some(ref path) = args.start_path {
        app.start_route = Some(Route::parse(path));
    }

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    // Ctrl+C at the OS level for clean shutdown
    let cancel = CancellationToken::new();
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
            // Deferred admin module delivery
            maybe_module = admin_rx.recv() => {
                if let Some(result) = maybe_module {
                    app.on_admin_loaded(result);
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    let action = input::map_event(&evt, &app.input_mode);
                    app.update(action);
                }
            } => {}
        }

        // Process tick
        app.update(action::Action::Tick);

        if app.should_quit || cancel.is_cancelled() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}
