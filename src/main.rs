use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{LevelFilter, debug, info};
use snake_game::canvas::TerminalCanvas;
use snake_game::config::{DEFAULT_TPS, MAX_TPS, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use snake_game::error::AppError;
use snake_game::font::Fonts;
use snake_game::game::{Flow, GameState, wall_clock_seed};
use snake_game::input::InputHandler;
use snake_game::renderer;
use snake_game::terminal_runtime::{TerminalSession, install_panic_hook};
use snake_game::theme::CLASSIC;
use snake_game::ui::LABELS;

#[derive(Debug, Parser)]
#[command(name = "snake-game", version, about = "Grid Snake in a walled arena")]
struct Cli {
    /// Ticks per second driving the simulation.
    #[arg(long, default_value_t = DEFAULT_TPS,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TPS)))]
    tps: u32,

    /// Seed for food placement; defaults to the wall clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filters from RUST_LOG, default info).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("snake-game: {error}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Without glyphs there is nothing to play; fail before touching the terminal.
    let fonts = Fonts::press_start(&LABELS)?;

    let seed = cli.seed.unwrap_or_else(wall_clock_seed);
    info!("starting at {} tps with seed {seed}", cli.tps);
    let mut state = GameState::new_with_seed(cli.tps, seed);

    install_panic_hook();
    let mut session = TerminalSession::enter(WINDOW_TITLE)?;
    let mut input = InputHandler::new();

    let size = session.terminal_mut().size()?;
    let (width, height) = state.layout(u32::from(size.width), u32::from(size.height));
    debug_assert_eq!((width, height), (SCREEN_WIDTH, SCREEN_HEIGHT));
    debug!("logical resolution {width}x{height} in a {}x{} terminal", size.width, size.height);

    let tick_interval = Duration::from_secs(1) / cli.tps;
    let mut deadline = Instant::now() + tick_interval;

    loop {
        let snapshot = input.collect_until(deadline)?;
        deadline = next_deadline(deadline, tick_interval, Instant::now());

        if state.advance(&snapshot) == Flow::Quit {
            break;
        }

        let mut canvas = TerminalCanvas::new(CLASSIC.background);
        renderer::render(&mut canvas, &state.view(), &fonts, &CLASSIC);
        session
            .terminal_mut()
            .draw(|frame| frame.render_widget(&canvas, frame.area()))?;
    }

    info!("exiting with high score {}", state.high_score());
    Ok(())
}

/// Keeps a fixed cadence, skipping ahead instead of bursting after a stall.
fn next_deadline(previous: Instant, interval: Duration, now: Instant) -> Instant {
    let next = previous + interval;
    if next < now { now + interval } else { next }
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.display().to_string(),
        source,
    })?;

    let mut builder = pretty_env_logger::formatted_builder();
    match env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(LevelFilter::Info);
        }
    }

    builder
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
