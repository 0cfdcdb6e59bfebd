//! Voronoi seeds and their GPU representation.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use rand::Rng;

use crate::color::{palette_color, Color32};

/// Slowest and fastest initial speed, in pixels per second.
const MIN_SPEED: f32 = 100.0;
const MAX_SPEED: f32 = 500.0;

/// A single site of the diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seed {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color32,
}

/// Per-instance vertex data uploaded for every seed.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SeedInstance {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl From<&Seed> for SeedInstance {
    fn from(seed: &Seed) -> Self {
        Self {
            position: seed.position.to_array(),
            color: seed.color.to_linear(),
        }
    }
}

/// All seeds plus the rectangle `[0, bounds]` they live in.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedField {
    pub seeds: Vec<Seed>,
    pub bounds: Vec2,
}

impl SeedField {
    /// Scatter `count` moving seeds over `[0, bounds)` with random colors and
    /// random headings.
    pub fn random<R: Rng + ?Sized>(count: usize, bounds: Vec2, rng: &mut R) -> Self {
        let seeds = (0..count)
            .map(|_| {
                let position = Vec2::new(
                    rng.gen::<f32>() * bounds.x,
                    rng.gen::<f32>() * bounds.y,
                );
                let color = Color32::from_rgba(rng.gen(), rng.gen(), rng.gen(), 255);

                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                let speed = lerp(MIN_SPEED, MAX_SPEED, rng.gen::<f32>());
                let velocity = Vec2::from_angle(angle) * speed;

                Seed {
                    position,
                    velocity,
                    color,
                }
            })
            .collect();

        Self { seeds, bounds }
    }

    /// Place `count` still seeds on whole pixel coordinates, colored from the
    /// palette by index. A zero-sized side puts every seed at coordinate 0.
    pub fn random_grid<R: Rng + ?Sized>(count: usize, width: u32, height: u32, rng: &mut R) -> Self {
        let seeds = (0..count)
            .map(|i| Seed {
                position: Vec2::new(
                    rng.gen_range(0..width.max(1)) as f32,
                    rng.gen_range(0..height.max(1)) as f32,
                ),
                velocity: Vec2::ZERO,
                color: palette_color(i),
            })
            .collect();

        Self {
            seeds,
            bounds: Vec2::new(width as f32, height as f32),
        }
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Snapshot of every seed in upload order.
    pub fn instances(&self) -> Vec<SeedInstance> {
        self.seeds.iter().map(SeedInstance::from).collect()
    }

    /// Change the bounding rectangle, pulling seeds that fell outside back
    /// onto the edge.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        for seed in &mut self.seeds {
            seed.position = seed.position.clamp(Vec2::ZERO, bounds);
        }
    }
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
