//! Folioboard TUI: three-panel strategy dashboard with vim-style navigation.
//!
//! Panels:
//! 1. Control: asset, strategy, date range, Apply
//! 2. Equity Curve: strategy line against the benchmark
//! 3. Analytics: metric cards, portfolio weights, sentiment headlines

use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use folioboard_core::coordinator::{self, Coordinator};
use folioboard_core::DashboardConfig;
use folioboard_tui::app::AppState;
use folioboard_tui::{input, logging, ui};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let app_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folioboard");
    let config_path = app_dir.join("config.toml");
    let log_dir = dirs::cache_dir()
        .map(|d| d.join("folioboard"))
        .unwrap_or_else(|| app_dir.join("logs"));

    let _log_guard = logging::init(&log_dir)?;

    let config = load_config(&config_path)?;
    let today = coordinator::utc_today();
    let coordinator = Coordinator::new(config, Instant::now(), today);
    let mut app = AppState::new(coordinator, today);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn load_config(path: &Path) -> Result<DashboardConfig> {
    if path.exists() {
        tracing::info!(path = %path.display(), "loading config");
        Ok(DashboardConfig::from_file(path)?)
    } else {
        Ok(DashboardConfig::default())
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Advance simulated latencies
        app.today = coordinator::utc_today();
        app.tick(Instant::now());

        // 2. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
