use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::info;

use gridtui::app::Grid;
use gridtui::config::Config;
use gridtui::handlers::keyboard;
use gridtui::prefs::PrefStore;
use gridtui::{data, ui};

/// Terminal data grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config file (default: platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record source: an http(s) URL or a JSON file (overrides the config)
    #[arg(long)]
    source: Option<String>,

    /// Enable debug logging to a file in the temp directory
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }
    // Log to a file so tracing output never fights the alternate screen
    let path = std::env::temp_dir().join("gridtui-debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridtui=debug".into()),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug)?;

    let config = Config::load(args.config.as_deref())?;
    let location = args
        .source
        .clone()
        .or_else(|| config.source.clone())
        .context("no record source given; pass --source or set `source` in the config")?;

    let started = Instant::now();
    let loaded = data::load(&location).await;
    let load_ms = started.elapsed().as_millis() as u64;
    info!(location, load_ms, "source loaded");

    let prefs = PrefStore::open(&config.pref_scope)?;
    let mut grid = Grid::new(config, prefs, loaded);
    grid.model.data.last_load_ms = Some(load_ms);
    grid.init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut grid, &location).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    grid: &mut Grid,
    location: &str,
) -> Result<()> {
    loop {
        if grid.model.ui.should_quit {
            return Ok(());
        }

        if grid.model.ui.reload_requested {
            grid.model.ui.reload_requested = false;
            let started = Instant::now();
            let loaded = data::load(location).await;
            grid.model.data.last_load_ms = Some(started.elapsed().as_millis() as u64);
            grid.set_source(loaded);
            grid.model.ui.show_toast("Reloaded".to_string());
        }

        // Debounced search: run the pipeline once typing has paused
        grid.take_due_search();

        if grid.model.ui.should_dismiss_toast() {
            grid.model.ui.dismiss_toast();
        }

        if grid.model.ui.dirty {
            terminal.draw(|f| ui::render(f, grid))?;
            grid.model.ui.dirty = false;
        }

        // Short poll keeps the debounce timer and toast expiry responsive
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => keyboard::handle_key(grid, key),
                Event::Resize(_, _) => grid.model.ui.dirty = true,
                _ => {}
            }
        }
    }
}
