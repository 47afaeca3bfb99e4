//! `TermFocus` — terminal-native focus dashboard.
//!
//! Launches the TUI: a to-do list beside a 25-minute Pomodoro countdown.
//! Configuration via CLI flags or config file
//! (`~/.config/termfocus/config.toml`).
//!
//! ```bash
//! cargo run --bin termfocus
//!
//! # With verbose logging to a chosen file
//! cargo run --bin termfocus -- --log-level debug --log-file /tmp/tf.log
//! ```

use std::io;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

use termfocus::app::{App, TimerCommand};
use termfocus::config::{CliArgs, ClientConfig};
use termfocus::tick::{self, Tick, Ticker};
use termfocus::ui;
use termfocus_core::TickOutcome;

/// Wall-clock period between countdown ticks.
const TICK_PERIOD: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("termfocus starting");

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("termfocus exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown to
/// ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("termfocus.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
///
/// Owns the single live [`Ticker`]: it is spawned on start, replaced never,
/// and dropped (aborting the background task) on reset, on expiry, and on
/// quit, so no exit path leaves a periodic callback running.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ClientConfig,
) -> io::Result<()> {
    let mut app = App::new().with_show_tips(config.show_tips);
    let mut ticker: Option<(Ticker, mpsc::Receiver<Tick>)> = None;

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Drain all pending ticks (non-blocking).
        if drain_ticks(&mut app, ticker.as_mut()) {
            // Session expired; the countdown no longer needs a clock.
            ticker = None;
        }

        // Step 3: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // handle_key_event returns Some(TimerCommand) when the timer
            // state needs the tick source started or stopped.
            match app.handle_key_event(key) {
                Some(TimerCommand::StartTicking) => {
                    ticker = Some(tick::spawn(TICK_PERIOD));
                }
                Some(TimerCommand::StopTicking) => {
                    ticker = None;
                }
                None => {}
            }
        }

        if app.should_quit {
            // Dropping the ticker aborts the background task.
            return Ok(());
        }
    }
}

/// Drain pending ticks into the app; returns true if the session expired.
fn drain_ticks(app: &mut App, ticker: Option<&mut (Ticker, mpsc::Receiver<Tick>)>) -> bool {
    let Some((_, rx)) = ticker else {
        return false;
    };
    let mut expired = false;
    while rx.try_recv().is_ok() {
        if app.apply_tick() == TickOutcome::Expired {
            expired = true;
        }
    }
    expired
}
