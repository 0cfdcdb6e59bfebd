//! CPU rasterization of Voronoi diagrams.
//!
//! Two equivalent formulations are provided: a per-pixel nearest-seed scan,
//! and a per-seed sweep over a depth buffer that mirrors what the GPU depth
//! test does in the interactive renderer.

use glam::Vec2;

use crate::color::{palette_color, point_to_color, Color32};
use crate::error::ColorError;
use crate::seeds::Seed;

/// A row-major image of packed colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color32>,
}

impl Canvas {
    /// Create a canvas filled with [`Color32::BACKGROUND`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color32::BACKGROUND; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color32> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Write a pixel. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Color32) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    /// Paint every pixel within `radius` of `(cx, cy)`, clipped to the canvas.
    pub fn fill_circle(&mut self, cx: i64, cy: i64, radius: i64, color: Color32) {
        let x0 = (cx - radius).max(0);
        let y0 = (cy - radius).max(0);
        let x1 = (cx + radius).min(self.width as i64 - 1);
        let y1 = (cy + radius).min(self.height as i64 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                if sqr_dist(cx, cy, x, y) <= radius * radius {
                    self.set(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Color every pixel by scanning all seeds for the closest one.
    pub fn render_voronoi_naive(&mut self, seeds: &[Seed]) {
        if seeds.is_empty() {
            return;
        }
        let sites: Vec<(i64, i64)> = seeds.iter().map(pixel_site).collect();

        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(j) = nearest_site(sites.iter().copied(), x as i64, y as i64) {
                    let i = self.index(x, y);
                    self.pixels[i] = palette_color(j);
                }
            }
        }
    }

    /// Color every pixel by sweeping seeds in order over a depth buffer.
    ///
    /// A seed only claims a pixel when it is strictly closer than everything
    /// before it, so ties resolve to the lower index exactly like
    /// [`Canvas::render_voronoi_naive`].
    pub fn render_voronoi_depth(&mut self, seeds: &[Seed]) {
        let mut depth = vec![i64::MAX; self.pixels.len()];

        for (index, (sx, sy)) in seeds.iter().map(pixel_site).enumerate() {
            let color = palette_color(index);
            for y in 0..self.height {
                for x in 0..self.width {
                    let d = sqr_dist(x as i64, y as i64, sx, sy);
                    let i = self.index(x, y);
                    if d < depth[i] {
                        depth[i] = d;
                        self.pixels[i] = color;
                    }
                }
            }
        }
    }

    /// Paint each cell in its seed's own color, the way the interactive
    /// renderer does: distances run from pixel centers to the unrounded seed
    /// positions, and ties still go to the lower index.
    pub fn render_voronoi_seed_colors(&mut self, seeds: &[Seed]) {
        let mut depth = vec![f32::INFINITY; self.pixels.len()];

        for seed in seeds {
            for y in 0..self.height {
                for x in 0..self.width {
                    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let d = center.distance_squared(seed.position);
                    let i = self.index(x, y);
                    if d < depth[i] {
                        depth[i] = d;
                        self.pixels[i] = seed.color;
                    }
                }
            }
        }
    }

    /// Draw a filled dot at every seed.
    pub fn render_seed_markers(&mut self, seeds: &[Seed], radius: u32, color: Color32) {
        for (sx, sy) in seeds.iter().map(pixel_site) {
            self.fill_circle(sx, sy, radius as i64, color);
        }
    }

    /// Replace every pixel by its own coordinates encoded as a color.
    pub fn render_point_gradient(&mut self) -> Result<(), ColorError> {
        for y in 0..self.height {
            for x in 0..self.width {
                let i = self.index(x, y);
                self.pixels[i] = point_to_color(x, y)?;
            }
        }
        Ok(())
    }
}

/// Index of the seed closest to pixel `(x, y)`, lowest index on ties.
pub fn nearest_seed(seeds: &[Seed], x: u32, y: u32) -> Option<usize> {
    nearest_site(seeds.iter().map(pixel_site), x as i64, y as i64)
}

#[inline]
fn sqr_dist(x1: i64, y1: i64, x2: i64, y2: i64) -> i64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

/// Seed position snapped to the pixel grid.
#[inline]
fn pixel_site(seed: &Seed) -> (i64, i64) {
    let p: Vec2 = seed.position.floor();
    (p.x as i64, p.y as i64)
}

fn nearest_site<I>(sites: I, x: i64, y: i64) -> Option<usize>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let mut best: Option<(usize, i64)> = None;
    for (i, (sx, sy)) in sites.into_iter().enumerate() {
        let d = sqr_dist(sx, sy, x, y);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
