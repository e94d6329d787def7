//! Jetpack Cat entry point
//!
//! Runs a headless autopilot session and logs what happened.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use jetpack_cat::Tuning;
use jetpack_cat::frontend::{Autopilot, GameLoop};
use jetpack_cat::sim::World;

#[derive(Parser, Debug)]
#[command(name = "jetpack-cat", about = "Run a headless Jetpack Cat session")]
struct Cli {
    /// RNG seed for the run
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 1800)]
    frames: u64,

    /// JSON tuning file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final world state as JSON
    #[arg(long)]
    dump_state: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let tuning = match &cli.config {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    log::info!("Jetpack Cat (headless) starting, seed {}", cli.seed);

    let world = World::new(cli.seed, tuning);
    let mut game = GameLoop::new(world, Autopilot::new(Some(cli.frames)));
    game.run(None);

    if cli.dump_state {
        match serde_json::to_string_pretty(game.world()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("Failed to serialize world: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
