//! Offline Voronoi renderer: scatters seeds, rasterizes the diagram on the
//! CPU and writes a single image file.

use std::error::Error;
use std::process::ExitCode;
use std::time::Instant;

use voronoi::config::{Algorithm, Config, USAGE};
use voronoi::prelude::*;

fn render(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut canvas = Canvas::new(config.width, config.height);

    if config.gradient {
        canvas.render_point_gradient()?;
    } else {
        let mut rng = config.rng();
        let field = SeedField::random_grid(config.seed_count, config.width, config.height, &mut rng);
        log::info!(
            "rendering {} seeds at {}x{} ({:?})",
            field.len(),
            config.width,
            config.height,
            config.algorithm
        );

        let start = Instant::now();
        match config.algorithm {
            Algorithm::Naive => canvas.render_voronoi_naive(&field.seeds),
            Algorithm::Depth => canvas.render_voronoi_depth(&field.seeds),
        }
        log::debug!("rasterized in {:?}", start.elapsed());

        canvas.render_seed_markers(&field.seeds, config.marker_radius, Color32::BLACK);
    }

    voronoi::output::save(&canvas, &config.output)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::offline().from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if config.show_help {
        println!("Usage: voronoi-render [OPTIONS]\n\n{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match render(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
