use super::Grid;

/// Render hint of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Dead,
    /// Alive now, but not in the previous generation (or edited since).
    Fresh,
    /// Alive now and in the previous generation.
    Established,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self != Self::Dead
    }
}

/// Read-only view of the world, valid until the next mutating call on the engine.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    current: &'a Grid,
    previous: &'a Grid,
}

impl<'a> Snapshot<'a> {
    pub(super) fn new(current: &'a Grid, previous: &'a Grid) -> Self {
        Self { current, previous }
    }

    pub fn world_size(&self) -> usize {
        self.current.size()
    }

    /// Panics if the cell is outside of the world.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.current.get(x, y)
    }

    /// Panics if the cell is outside of the world.
    pub fn state(&self, x: usize, y: usize) -> CellState {
        match (self.current.get(x, y), self.previous.get(x, y)) {
            (false, _) => CellState::Dead,
            (true, false) => CellState::Fresh,
            (true, true) => CellState::Established,
        }
    }

    /// Alive cells with their render hints, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + 'a {
        let (current, previous) = (self.current, self.previous);
        current.alive().map(move |(x, y)| {
            let state = if previous.get(x, y) {
                CellState::Established
            } else {
                CellState::Fresh
            };
            (x, y, state)
        })
    }

    pub fn grid(&self) -> &'a Grid {
        self.current
    }
}
