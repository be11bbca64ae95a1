use crate::EngineError;

/// Dense square field of cells stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    size: usize,
}

impl Grid {
    /// Create a dead `size x size` field.
    pub fn blank(size: usize) -> Result<Self, EngineError> {
        let len = size
            .checked_mul(size)
            .filter(|&len| len > 0)
            .ok_or(EngineError::InvalidSize { size })?;
        Ok(Self {
            cells: vec![false; len],
            size,
        })
    }

    /// Create a field where exactly the listed cells are alive.
    pub fn with_alive(
        size: usize,
        alive: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, EngineError> {
        let mut grid = Self::blank(size)?;
        for (x, y) in alive {
            grid.check(x, y)?;
            grid.set(x, y, true);
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell state at (x, y).
    ///
    /// Panics if the cell is outside of the field.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Panics if the cell is outside of the field.
    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    pub fn fill(&mut self, state: bool) {
        self.cells.fill(state);
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of alive cells, row by row.
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(i, _)| (i % self.size, i / self.size))
    }

    pub(crate) fn check(&self, x: usize, y: usize) -> Result<(), EngineError> {
        if x < self.size && y < self.size {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// Alive cells among the 8 neighbors of (x, y), edges stitched together.
    pub(crate) fn count_neibs(&self, x: usize, y: usize) -> usize {
        let n = self.size;
        let x1 = if x == 0 { n - 1 } else { x - 1 };
        let x2 = if x == n - 1 { 0 } else { x + 1 };
        let y1 = if y == 0 { n - 1 } else { y - 1 };
        let y2 = if y == n - 1 { 0 } else { y + 1 };
        self.get(x1, y1) as usize
            + self.get(x, y1) as usize
            + self.get(x2, y1) as usize
            + self.get(x1, y) as usize
            + self.get(x2, y) as usize
            + self.get(x1, y2) as usize
            + self.get(x, y2) as usize
            + self.get(x2, y2) as usize
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) is outside of the {0}x{0} field",
            self.size
        );
        x + y * self.size
    }
}

impl std::fmt::Display for Grid {
    /// One text line per row, `#` for alive cells and `.` for dead ones.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_sizes() {
        assert_eq!(Grid::blank(0), Err(EngineError::InvalidSize { size: 0 }));
        assert_eq!(
            Grid::blank(usize::MAX),
            Err(EngineError::InvalidSize { size: usize::MAX })
        );
        let grid = Grid::blank(3).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_with_alive() {
        let grid = Grid::with_alive(4, [(1, 0), (3, 2)]).unwrap();
        assert!(grid.get(1, 0));
        assert!(grid.get(3, 2));
        assert!(!grid.get(0, 1));
        assert_eq!(grid.alive().collect::<Vec<_>>(), vec![(1, 0), (3, 2)]);
        assert_eq!(
            Grid::with_alive(4, [(4, 0)]),
            Err(EngineError::OutOfBounds { x: 4, y: 0, size: 4 })
        );
    }

    #[test]
    fn test_count_neibs_wraps_corners() {
        let grid = Grid::with_alive(5, [(4, 4), (0, 4), (4, 0)]).unwrap();
        assert_eq!(grid.count_neibs(0, 0), 3);
        assert_eq!(grid.count_neibs(2, 2), 0);
    }

    #[test]
    fn test_single_cell_world_sees_itself() {
        let grid = Grid::with_alive(1, [(0, 0)]).unwrap();
        assert_eq!(grid.count_neibs(0, 0), 8);
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_alive(3, [(0, 0), (2, 1)]).unwrap();
        assert_eq!(grid.to_string(), "#..\n..#\n...\n");
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        Grid::blank(2).unwrap().get(0, 2);
    }
}
