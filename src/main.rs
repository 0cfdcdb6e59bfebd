//! Live Voronoi window.
//!
//! Keys: `Space` pause, `R` reseed, `S` snapshot to PNG, `Escape` quit.

use std::process::ExitCode;

use voronoi::config::{Config, USAGE};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::interactive().from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if config.show_help {
        println!("Usage: voronoi [OPTIONS]\n\n{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match voronoi::app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
