mod config;
mod error;
mod fps_limit;

pub use config::Config;
pub use error::{ConfigError, EngineError};
pub use fps_limit::FpsLimiter;
