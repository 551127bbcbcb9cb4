use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{poll as event_poll, read as event_read, Event as CrosstermEvent};
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use termfolio::app::portfolio::Portfolio;
use termfolio::config::Config;
use termfolio::config_io;
use termfolio::model::section::Section;
use termfolio::services::terminal_modes::{self, TerminalModes};
use termfolio::services::time_source::RealTimeSource;
use termfolio::services::{log_dirs, tracing_setup};
use termfolio::view::page_view::render_portfolio;
use termfolio::view::theme::Theme;

/// A terminal portfolio with an interactive shell
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(about = "A terminal portfolio with a simulated shell overlay", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: per-process file in the state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Section to show first (hero, about, stack, projects, lab, contact)
    #[arg(long, value_name = "SECTION")]
    section: Option<String>,

    /// Open the terminal overlay immediately
    #[arg(long)]
    open_terminal: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by termfolio and exit
    #[arg(long)]
    show_paths: bool,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    let (mut config, source) = config_io::load_config(args.config.as_deref())
        .context("Failed to load configuration")?;
    tracing::debug!(?source, "Config resolved");

    if let Some(section) = &args.section {
        if Section::from_id(section).is_none() {
            anyhow::bail!(
                "Unknown section '{}'; expected one of: {}",
                section,
                Section::ALL.map(|s| s.id()).join(", ")
            );
        }
        config.portfolio.start_section = section.clone();
    }
    if args.open_terminal {
        config.portfolio.auto_open_terminal_ms = Some(0);
    }
    Ok(config)
}

fn run_event_loop(
    portfolio: &mut Portfolio,
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    const IDLE_POLL: Duration = Duration::from_millis(250);
    let theme = Theme::neon();
    let mut needs_render = true;

    loop {
        if portfolio.tick() {
            needs_render = true;
        }

        if portfolio.should_quit() {
            break;
        }

        if needs_render {
            terminal.draw(|frame| render_portfolio(frame, portfolio, &theme))?;
            needs_render = false;
        }

        let timeout = portfolio
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .max(Duration::from_millis(1))
            .min(IDLE_POLL);

        if !event_poll(timeout)? {
            continue;
        }

        // Drain whatever else is already queued before redrawing.
        let mut event = Some(event_read()?);
        while let Some(current) = event.take() {
            if let CrosstermEvent::Resize(w, h) = current {
                tracing::debug!("Terminal resized to {}x{}", w, h);
            }
            if portfolio.handle_event(&current) {
                needs_render = true;
            }
            if event_poll(Duration::ZERO)? {
                event = Some(event_read()?);
            }
        }
    }

    Ok(())
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --show-paths early (no terminal setup needed)
    if args.show_paths {
        log_dirs::print_all_paths();
        return Ok(());
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(log_dirs::main_log_path);
    if tracing_setup::init_global(&log_file).is_none() {
        eprintln!("Warning: could not open log file {}", log_file.display());
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!("termfolio starting");

    let config = load_config(&args)?;

    // Handle --dump-config after overrides so the printed config is the effective one
    if args.dump_config {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let terminal_modes = TerminalModes::enable()?;

    let backend = ratatui::backend::CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    tracing::info!("Terminal size: {}x{}", size.width, size.height);

    let mut portfolio = Portfolio::new(config, RealTimeSource::shared());
    let result = run_event_loop(&mut portfolio, &mut terminal);

    drop(portfolio);
    drop(terminal_modes);

    if let Err(e) = &result {
        tracing::error!("Event loop failed: {:#}", e);
    }
    tracing::info!("termfolio exiting");
    result
}
