use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::Engine;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override the number of tokens in a row needed to win
    #[arg(long)]
    match_length: Option<usize>,

    /// Play these zero-based columns without the UI, then print the board
    /// and the result (e.g. --moves 3,3,4,2)
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Write logs to this file (the interactive UI never logs to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print a config file with every default value and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    initialize_logging(cli.log_level, cli.log_file.as_deref(), cli.moves.is_some())?;

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.game.width = width;
    }
    if let Some(height) = cli.height {
        config.game.height = height;
    }
    if let Some(match_length) = cli.match_length {
        config.game.match_length = match_length;
    }
    config.validate().context("invalid game settings")?;

    match cli.moves {
        Some(moves) => replay(&config, &moves),
        None => run_tui(&config),
    }
}

/// Play a fixed list of moves. Rejected moves are logged and skipped, the
/// way the interactive UI ignores them.
fn replay(config: &AppConfig, moves: &[usize]) -> Result<()> {
    let mut engine = Engine::new(config.game)?;
    engine.subscribe_on_finish(|state| {
        if let Some(text) = state.finish_message() {
            println!("{text}");
        }
    });

    for &column in moves {
        if let Err(err) = engine.drop_token(column) {
            warn!(column, "move ignored: {err}");
        }
    }

    print!("{}", engine.grid());
    if !engine.is_terminal() {
        println!("{} to move", engine.current_color());
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app returned an error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}

fn initialize_logging(level: LevelFilter, log_file: Option<&Path>, headless: bool) -> Result<()> {
    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if headless => (BoxMakeWriter::new(io::stderr), true),
        // The UI owns the terminal; without a log file there is nowhere to write.
        None => return Ok(()),
    };

    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(writer)
                .with_ansi(ansi),
        )
        .with(filter)
        .init();
    Ok(())
}
