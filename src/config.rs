//! Run configuration shared by the window and the offline renderer.
//!
//! Both binaries start from their own defaults ([`Config::interactive`],
//! [`Config::offline`]) and layer command-line flags on top with
//! [`Config::from_args`].

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ConfigError;
use crate::physics::ForceParams;

/// How the offline renderer assigns pixels to seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Scan all seeds for every pixel.
    Naive,
    /// Sweep each seed over a depth buffer.
    #[default]
    Depth,
}

pub const USAGE: &str = "\
Options:
  --seeds N             number of seeds
  --size WxH            canvas or window size in pixels
  --rng-seed N          seed the random generator for reproducible layouts
  --output PATH         output image (.ppm or .png); the window adds the frame number
  --marker-radius R     radius of the seed dots in pixels
  --naive               use the per-pixel nearest-seed scan [voronoi-render]
  --gradient            write the point-encoding debug image [voronoi-render]
  -h, --help            print this help";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub seed_count: usize,
    /// Fixed RNG seed; `None` draws from the OS.
    pub rng_seed: Option<u64>,
    pub output: PathBuf,
    pub marker_radius: u32,
    pub algorithm: Algorithm,
    pub gradient: bool,
    pub forces: ForceParams,
    pub show_help: bool,
}

impl Config {
    /// Defaults for the interactive window.
    pub fn interactive() -> Self {
        Self {
            width: 1600,
            height: 900,
            seed_count: 10,
            rng_seed: None,
            output: PathBuf::from("snapshot.png"),
            marker_radius: 5,
            algorithm: Algorithm::Depth,
            gradient: false,
            forces: ForceParams::default(),
            show_help: false,
        }
    }

    /// Defaults for the offline image writer.
    pub fn offline() -> Self {
        Self {
            width: 800,
            height: 600,
            seed_count: 20,
            output: PathBuf::from("output.ppm"),
            ..Self::interactive()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed_count(mut self, count: usize) -> Self {
        self.seed_count = count;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = path.into();
        self
    }

    pub fn with_marker_radius(mut self, radius: u32) -> Self {
        self.marker_radius = radius;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_forces(mut self, forces: ForceParams) -> Self {
        self.forces = forces;
        self
    }

    /// Apply command-line flags (without the program name) over `self`.
    pub fn from_args<I, S>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seeds" => self.seed_count = parse_number("--seeds", args.next())?,
                "--rng-seed" => self.rng_seed = Some(parse_number("--rng-seed", args.next())?),
                "--marker-radius" => {
                    self.marker_radius = parse_number("--marker-radius", args.next())?
                }
                "--size" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--size"))?;
                    let (w, h) = parse_size(&value)?;
                    self.width = w;
                    self.height = h;
                }
                "--output" => {
                    self.output = args.next().ok_or(ConfigError::MissingValue("--output"))?.into()
                }
                "--naive" => self.algorithm = Algorithm::Naive,
                "--gradient" => self.gradient = true,
                "-h" | "--help" => self.show_help = true,
                _ => return Err(ConfigError::UnknownFlag(arg)),
            }
        }

        Ok(self)
    }

    /// Random generator honoring `rng_seed`.
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    flag: &'static str,
    value: Option<String>,
) -> Result<T, ConfigError> {
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { flag, value })
}

/// Parse `WIDTHxHEIGHT`, both sides non-zero.
fn parse_size(value: &str) -> Result<(u32, u32), ConfigError> {
    let invalid = || ConfigError::InvalidSize(value.to_string());
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let w: u32 = w.trim().parse().map_err(|_| invalid())?;
    let h: u32 = h.trim().parse().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let live = Config::interactive();
        assert_eq!((live.width, live.height, live.seed_count), (1600, 900, 10));

        let offline = Config::offline();
        assert_eq!((offline.width, offline.height, offline.seed_count), (800, 600, 20));
        assert_eq!(offline.output, PathBuf::from("output.ppm"));
        assert_eq!(offline.marker_radius, 5);
    }

    #[test]
    fn test_from_args_overrides() {
        let config = Config::offline()
            .from_args([
                "--seeds", "7", "--size", "320x200", "--rng-seed", "42", "--output", "out.png",
                "--naive",
            ])
            .unwrap();

        assert_eq!(config.seed_count, 7);
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.output, PathBuf::from("out.png"));
        assert_eq!(config.algorithm, Algorithm::Naive);
        assert!(!config.show_help);
    }

    #[test]
    fn test_from_args_empty_keeps_defaults() {
        let config = Config::interactive().from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::interactive());
    }

    #[test]
    fn test_from_args_errors() {
        assert_eq!(
            Config::offline().from_args(["--bogus"]),
            Err(ConfigError::UnknownFlag("--bogus".into()))
        );
        assert_eq!(
            Config::offline().from_args(["--seeds"]),
            Err(ConfigError::MissingValue("--seeds"))
        );
        assert_eq!(
            Config::offline().from_args(["--seeds", "-3"]),
            Err(ConfigError::InvalidNumber {
                flag: "--seeds",
                value: "-3".into()
            })
        );
        assert_eq!(
            Config::offline().from_args(["--size", "0x10"]),
            Err(ConfigError::InvalidSize("0x10".into()))
        );
        assert_eq!(
            Config::offline().from_args(["--size", "800"]),
            Err(ConfigError::InvalidSize("800".into()))
        );
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let config = Config::offline().with_rng_seed(9);
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
