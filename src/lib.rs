//! # Voronoi
//!
//! A handful of seeds drift around under pairwise forces while their Voronoi
//! diagram is drawn, either live on the GPU or offline into an image file.
//!
//! ## Quick Start
//!
//! ```ignore
//! use voronoi::prelude::*;
//!
//! let config = Config::offline().with_seed_count(20).with_rng_seed(1);
//! let mut rng = config.rng();
//! let field = SeedField::random_grid(config.seed_count, config.width, config.height, &mut rng);
//!
//! let mut canvas = Canvas::new(config.width, config.height);
//! canvas.render_voronoi_depth(&field.seeds);
//! canvas.render_seed_markers(&field.seeds, config.marker_radius, Color32::BLACK);
//! voronoi::output::save(&canvas, "output.ppm")?;
//! ```
//!
//! ## Rendering paths
//!
//! | Path | Module | How the nearest seed is found |
//! |------|--------|-------------------------------|
//! | Live window | [`app`], [`gpu`] | one full-screen quad per seed, distance written as depth |
//! | Offline image | [`raster`], [`output`] | brute-force distance comparison per pixel |
//!
//! Both are brute force: O(width · height · seeds) with no spatial index.

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod gpu;
pub mod output;
pub mod physics;
pub mod raster;
pub mod seeds;
pub mod time;

pub use color::{Color32, PALETTE};
pub use config::{Algorithm, Config};
pub use error::{AppError, ColorError, ConfigError, GpuError, OutputError};
pub use glam::Vec2;
pub use physics::ForceParams;
pub use raster::Canvas;
pub use seeds::{Seed, SeedField, SeedInstance};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::color::{palette_color, Color32, PALETTE};
    pub use crate::config::{Algorithm, Config};
    pub use crate::physics::{step, ForceParams};
    pub use crate::raster::Canvas;
    pub use crate::seeds::{Seed, SeedField};
    pub use crate::time::FrameClock;
    pub use crate::Vec2;
}
