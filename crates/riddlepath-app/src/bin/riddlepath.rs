//! Riddlepath console game.
//!
//! This is the main entry point for playing a riddle catalog in a terminal.

use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};

use clap::Parser;
use riddlepath_app::{
    app::RiddlepathApp,
    catalog_source::{self, CatalogLoadError},
    settings::{DEFAULT_ADVANCE_DELAY, DEFAULT_COMPLETION_DELAY, Settings, TransitionSettings},
    version,
};
use riddlepath_game::Game;

#[derive(Debug, Parser)]
#[command(author, version = version::build_version(), about)]
struct Args {
    /// JSON catalog to play instead of the bundled riddles.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Delay before moving to the next stage after a correct answer.
    #[arg(long, value_name = "MS", default_value_t = millis(DEFAULT_ADVANCE_DELAY))]
    advance_delay_ms: u64,

    /// Delay before the completion screen after the last correct answer.
    #[arg(long, value_name = "MS", default_value_t = millis(DEFAULT_COMPLETION_DELAY))]
    completion_delay_ms: u64,

    /// Stay on a solved stage instead of moving on automatically.
    #[arg(long)]
    no_auto_advance: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            transitions: TransitionSettings {
                auto_advance: !self.no_auto_advance,
                advance_delay: Duration::from_millis(self.advance_delay_ms),
                completion_delay: Duration::from_millis(self.completion_delay_ms),
            },
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("{_0}")]
    Catalog(CatalogLoadError),
    #[display("terminal I/O failed: {_0}")]
    Io(io::Error),
}

fn run(args: &Args) -> Result<(), AppError> {
    let catalog = catalog_source::load_catalog(args.catalog.as_deref())?;
    log::info!(
        "starting riddlepath {} with {} stages",
        version::build_version(),
        catalog.len()
    );

    let mut app = RiddlepathApp::new(Game::new(catalog), args.settings());
    let stdin = io::stdin();
    let mut stdout = BufWriter::new(io::stdout());
    app.run(stdin.lock(), &mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("riddlepath: {err}");
            ExitCode::FAILURE
        }
    }
}
