//! Telemedicine supervisory dashboard, interactive Ratatui TUI.
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  远程医疗监管平台  <view>  │  <region>  │  <greeting>  <role>  <time>  │
//!   ├─── condition chips (domain panels only) ────────────────────────────┤
//!   │  已选条件: 遵义市 ✕  时间: 本月                                        │
//!   ├─── body ────────────────────────────────────────────────────────────┤
//!   │  home grid + KPIs + trend + ranking, or one monitoring panel        │
//!   │                                   ┌─ popup / drawer ─┐              │
//!   │                                   └──────────────────┘              │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! Usage:
//!   cargo run -p supervisor-tui -- --region 遵义市 --log-file dashboard.log

mod app;
mod ui;

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use supervisor_config::DashboardConfig;
use supervisor_contracts::error::{SupervisorError, SupervisorResult};
use supervisor_mock::StaticRegions;

use crate::app::App;

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Telemedicine supervisory platform, terminal edition.
#[derive(Parser, Debug)]
#[command(
    name = "supervisor-tui",
    about = "Telemedicine supervisory dashboard (terminal UI)"
)]
struct Args {
    /// Dashboard configuration file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Region selected at startup; overrides the configured one.
    #[arg(long)]
    region: Option<String>,

    /// Write tracing output to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// The terminal belongs to the UI, so logs only ever go to a file.
fn init_logging(path: &Path, filter: &str) -> SupervisorResult<()> {
    let file = File::create(path).map_err(|e| SupervisorError::Terminal {
        reason: format!("failed to create log file '{}': {}", path.display(), e),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::render(f, app))?;

        // The header clock refreshes on every tick even without input.
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}

fn main() -> SupervisorResult<()> {
    let args = Args::parse();

    let mut config = DashboardConfig::load(args.config.as_deref())?;
    if let Some(region) = args.region {
        config.dashboard.default_region = region;
    }
    if let Some(path) = &args.log_file {
        init_logging(path, &config.logging.filter)?;
    }

    let role = config.role()?;
    let region = config.resolved_region(&StaticRegions);
    let mut app = App::new(role, &region);
    info!(region = %region, role = %app.state.role().id, "dashboard starting");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, config.tick_rate());
    let restored = restore_terminal(&mut terminal);

    info!("dashboard closed");
    session_outcome(result, restored)
}

/// A loop error is reported ahead of any teardown error.
fn session_outcome(run: io::Result<()>, restored: io::Result<()>) -> SupervisorResult<()> {
    run?;
    restored.map_err(SupervisorError::from)
}
