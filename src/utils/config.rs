use super::ConfigError;
use clap::Parser;
use std::time::Duration;

/// Startup parameters of a simulation session.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Side length of the square world in cells.
    #[arg(short = 'n', long, default_value_t = Config::WORLD_SIZE)]
    pub world_size: usize,

    /// Screen pixels per cell side.
    #[arg(short, long, default_value_t = Config::SCALE)]
    pub scale: usize,

    /// Probability of a cell being alive after a reset.
    #[arg(short, long, default_value_t = Config::FILL_FACTOR)]
    pub fill_factor: f64,

    /// Frame rate cap.
    #[arg(long, default_value_t = Config::MAX_FPS)]
    pub max_fps: f64,

    /// Random seed (if absent, the generator is seeded from entropy).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with the simulation paused.
    #[arg(long)]
    pub paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_size: Self::WORLD_SIZE,
            scale: Self::SCALE,
            fill_factor: Self::FILL_FACTOR,
            max_fps: Self::MAX_FPS,
            seed: None,
            paused: false,
        }
    }
}

impl Config {
    pub const WORLD_SIZE: usize = 150;
    pub const SCALE: usize = 4;
    pub const FILL_FACTOR: f64 = 0.5;
    pub const MAX_FPS: f64 = 60.;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_size == 0 {
            return Err(ConfigError::WorldSize);
        }
        if self.scale == 0 {
            return Err(ConfigError::Scale);
        }
        if !(0.0..=1.0).contains(&self.fill_factor) {
            return Err(ConfigError::FillFactor(self.fill_factor));
        }
        if self.max_fps.is_nan()
            || self.max_fps <= 0.
            || Duration::try_from_secs_f64(1. / self.max_fps).is_err()
        {
            return Err(ConfigError::MaxFps(self.max_fps));
        }
        self.window_size()?;
        Ok(())
    }

    /// Side of the window in pixels.
    pub fn window_size(&self) -> Result<f32, ConfigError> {
        self.world_size
            .checked_mul(self.scale)
            .map(|side| side as f32)
            .ok_or(ConfigError::WindowSize {
                world_size: self.world_size,
                scale: self.scale,
            })
    }

    /// Generator for seeding and reseeding the world.
    pub fn rng(&self) -> rand_chacha::ChaCha8Rng {
        use rand::SeedableRng;
        if let Some(x) = self.seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.window_size(), Ok(600.));
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::parse_from(["torus_life", "-n", "64", "--fill-factor", "0.25"]);
        assert_eq!(config.world_size, 64);
        assert_eq!(config.fill_factor, 0.25);
        assert_eq!(config.scale, Config::SCALE);
        assert_eq!(config.seed, None);
        assert!(!config.paused);
    }

    #[test]
    fn test_rejected_values() {
        let base = Config::default();
        let cases = [
            (Config { world_size: 0, ..base.clone() }, ConfigError::WorldSize),
            (Config { scale: 0, ..base.clone() }, ConfigError::Scale),
            (
                Config { fill_factor: 1.5, ..base.clone() },
                ConfigError::FillFactor(1.5),
            ),
            (Config { max_fps: 0., ..base.clone() }, ConfigError::MaxFps(0.)),
            // frame time of 1e20 seconds does not fit in a Duration
            (
                Config { max_fps: 1e-20, ..base.clone() },
                ConfigError::MaxFps(1e-20),
            ),
            (
                Config { scale: usize::MAX, ..base.clone() },
                ConfigError::WindowSize {
                    world_size: Config::WORLD_SIZE,
                    scale: usize::MAX,
                },
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let config = Config {
            seed: Some(42),
            ..Config::default()
        };
        let (mut a, mut b) = (config.rng(), config.rng());
        for _ in 0..8 {
            assert_eq!(a.gen::<f64>(), b.gen::<f64>());
        }
    }
}
