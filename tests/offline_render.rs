//! End-to-end tests for the offline path: seeds to canvas to image file.

use std::path::PathBuf;

use voronoi::output;
use voronoi::prelude::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("voronoi-{}-{}", std::process::id(), name))
}

fn render(config: &Config) -> (SeedField, Canvas) {
    let mut rng = config.rng();
    let field = SeedField::random_grid(config.seed_count, config.width, config.height, &mut rng);
    let mut canvas = Canvas::new(config.width, config.height);
    canvas.render_voronoi_depth(&field.seeds);
    canvas.render_seed_markers(&field.seeds, config.marker_radius, Color32::BLACK);
    (field, canvas)
}

#[test]
fn test_ppm_file_roundtrips_through_decoder() {
    let config = Config::offline().with_size(64, 48).with_seed_count(6).with_rng_seed(11);
    let (_, canvas) = render(&config);

    let path = temp_path("roundtrip.ppm");
    output::save(&canvas, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P6"));

    let decoded = image::open(&path).unwrap().into_rgb8();
    assert_eq!(decoded.dimensions(), (64, 48));
    for (x, y, pixel) in decoded.enumerate_pixels() {
        assert_eq!(pixel.0, canvas.get(x, y).unwrap().to_rgb_bytes());
    }

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_png_output() {
    let config = Config::offline().with_size(32, 32).with_seed_count(3).with_rng_seed(3);
    let (_, canvas) = render(&config);

    let path = temp_path("out.png");
    output::save(&canvas, &path).unwrap();

    let decoded = image::open(&path).unwrap().into_rgb8();
    assert_eq!(decoded.get_pixel(0, 0).0, canvas.get(0, 0).unwrap().to_rgb_bytes());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_same_rng_seed_same_image() {
    let config = Config::offline().with_size(80, 60).with_rng_seed(1234);
    let (_, a) = render(&config);
    let (_, b) = render(&config);
    assert_eq!(a, b);
}

#[test]
fn test_only_palette_and_marker_colors_appear() {
    let config = Config::offline().with_size(100, 75).with_rng_seed(77);
    let (_, canvas) = render(&config);

    for color in canvas.pixels() {
        assert!(
            *color == Color32::BLACK || PALETTE.contains(color),
            "unexpected color {:?}",
            color
        );
    }
}

#[test]
fn test_snapshot_after_simulation_matches_nearest_seed() {
    let mut rng = Config::interactive().with_rng_seed(5).rng();
    let mut field = SeedField::random(8, Vec2::new(160.0, 90.0), &mut rng);
    for _ in 0..120 {
        step(&mut field, &ForceParams::default(), 1.0 / 60.0);
    }

    let mut canvas = Canvas::new(160, 90);
    canvas.render_voronoi_seed_colors(&field.seeds);

    // Same measure as the shader: pixel center to the exact seed position.
    for &(x, y) in &[(0, 0), (159, 89), (80, 45), (10, 70)] {
        let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
        let nearest = field
            .seeds
            .iter()
            .min_by(|a, b| {
                center
                    .distance_squared(a.position)
                    .total_cmp(&center.distance_squared(b.position))
            })
            .unwrap();
        assert_eq!(canvas.get(x, y), Some(nearest.color));
    }

    assert!(field.seeds.iter().all(|s| s.position.x <= 160.0 && s.position.y <= 90.0));
}
