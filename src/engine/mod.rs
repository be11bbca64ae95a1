mod automaton;
mod grid;
mod snapshot;

pub use automaton::Automaton;
pub use grid::Grid;
pub use snapshot::{CellState, Snapshot};
