use thiserror::Error;

/// Errors reported by [`crate::Automaton`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The world must be at least 1x1 and its cell count must fit in memory.
    #[error("invalid world size {size}")]
    InvalidSize { size: usize },
    /// Cell address outside of `0..size`.
    #[error("cell ({x}, {y}) is outside of the {size}x{size} world")]
    OutOfBounds { x: usize, y: usize, size: usize },
}

/// Errors reported by [`crate::Config::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("world size must be positive")]
    WorldSize,
    #[error("scale must be positive")]
    Scale,
    #[error("fill factor {0} is outside of [0, 1]")]
    FillFactor(f64),
    #[error("max fps {0} must be positive and give a representable frame time")]
    MaxFps(f64),
    #[error("window side {world_size} * {scale} pixels overflows")]
    WindowSize { world_size: usize, scale: usize },
}
