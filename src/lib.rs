#![warn(clippy::all)]

mod engine;
mod gui;
mod utils;

pub use engine::{Automaton, CellState, Grid, Snapshot};
pub use gui::{
    cell_under_pointer, collect_actions, pointer_action, render, Action, App, Session, Style,
};
pub use utils::{Config, ConfigError, EngineError, FpsLimiter};
