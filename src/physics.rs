//! Pairwise seed forces and the per-frame integration step.
//!
//! Every seed pushes on every other seed, and the four corners of the bounds
//! act as heavy fixed bodies. Distances are measured in the Manhattan metric,
//! which gives softer, more wobbly motion than true inverse-square gravity.

use glam::Vec2;

use crate::seeds::SeedField;

/// Tunables for [`step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    /// Mass of each seed. Negative masses repel.
    pub seed_mass: f32,
    /// Mass of each of the four fixed corners.
    pub corner_mass: f32,
    /// Per-axis speed limit in pixels per second.
    pub velocity_cap: f32,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            seed_mass: -2.0,
            corner_mass: -30.0,
            velocity_cap: 300.0,
        }
    }
}

/// Force exerted between two bodies, pointing from `p2` towards `p1`
/// scaled by the combined mass.
///
/// Coincident points exert no force.
pub fn force_between(p1: Vec2, mass1: f32, p2: Vec2, mass2: f32) -> Vec2 {
    let d = p1 - p2;
    let distance = d.x.abs() + d.y.abs();
    if distance == 0.0 {
        return Vec2::ZERO;
    }
    d * ((mass1 + mass2) / distance)
}

/// Corners of `[0, bounds]` in the order they are applied.
fn corners(bounds: Vec2) -> [Vec2; 4] {
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, bounds.y),
        Vec2::new(bounds.x, bounds.y),
        Vec2::new(bounds.x, 0.0),
    ]
}

/// Advance every seed by `dt` seconds.
///
/// Seeds are updated in index order and in place, so seed `i` already sees
/// the new positions of seeds `0..i`. A move that would leave the bounds on
/// an axis is dropped and that velocity component is reflected instead.
pub fn step(field: &mut SeedField, params: &ForceParams, dt: f32) {
    let bounds = field.bounds;
    let corners = corners(bounds);
    let cap = Vec2::splat(params.velocity_cap);

    for i in 0..field.seeds.len() {
        let pos = field.seeds[i].position;
        let mut accel = Vec2::ZERO;

        for (j, other) in field.seeds.iter().enumerate() {
            if i == j {
                continue;
            }
            accel -= force_between(pos, params.seed_mass, other.position, params.seed_mass);
        }

        for corner in corners {
            accel += force_between(pos, params.seed_mass, corner, params.corner_mass);
        }

        let seed = &mut field.seeds[i];
        seed.velocity = (seed.velocity + accel).clamp(-cap, cap);

        let next = seed.position + seed.velocity * dt;
        if (0.0..=bounds.x).contains(&next.x) {
            seed.position.x = next.x;
        } else {
            seed.velocity.x = -seed.velocity.x;
        }
        if (0.0..=bounds.y).contains(&next.y) {
            seed.position.y = next.y;
        } else {
            seed.velocity.y = -seed.velocity.y;
        }
    }

    log::trace!("stepped {} seeds by {:.4}s", field.seeds.len(), dt);
}
