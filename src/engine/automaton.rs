use super::{Grid, Snapshot};
use crate::EngineError;
use rand::Rng;
use std::ops::Range;
use tracing::{debug, trace};

/// Game of Life on a square field with edges stitched together (torus).
///
/// Holds two equally sized buffers: `current` is the visible world and
/// `scratch` is where the next generation is computed. After a generation
/// `scratch` keeps the previous world until it is overwritten by the next one,
/// which is what [`Snapshot::state`] uses to tell newly alive cells apart.
/// Manual edits clear the corresponding `scratch` cells.
#[derive(Clone, Debug)]
pub struct Automaton {
    current: Grid,
    scratch: Grid,
    generation: u64,
}

impl Automaton {
    /// Probability of a cell being alive after [`Automaton::reinitialize_region`].
    pub const REGION_FILL_FACTOR: f64 = 0.5;

    /// Create a dead `size x size` world.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        let current = Grid::blank(size)?;
        debug!(size, "allocated world");
        Ok(Self::from_grid(current))
    }

    /// Start from a saved world. Every alive cell is reported as fresh.
    pub fn from_grid(grid: Grid) -> Self {
        let mut scratch = grid.clone();
        scratch.fill(false);
        Self {
            current: grid,
            scratch,
            generation: 0,
        }
    }

    /// Copy of the visible world.
    pub fn to_grid(&self) -> Grid {
        self.current.clone()
    }

    pub fn world_size(&self) -> usize {
        self.current.size()
    }

    /// Generations advanced since the world was last seeded or cleared.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, EngineError> {
        self.current.check(x, y)?;
        Ok(self.current.get(x, y))
    }

    /// Make every cell alive independently with probability `density`.
    ///
    /// The previous-generation buffer is left as is.
    pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let n = self.world_size();
        // same draw order as `reinitialize_region`
        for x in 0..n {
            for y in 0..n {
                self.current.set(x, y, rng.gen::<f64>() < density);
            }
        }
        self.generation = 0;
        debug!(density, population = self.population(), "seeded world");
    }

    /// Alive cells among the 8 neighbors of (x, y), wrapping around the edges.
    ///
    /// In worlds smaller than 3x3 some of the 8 positions coincide; each is counted.
    pub fn neighbor_count(&self, x: usize, y: usize) -> Result<usize, EngineError> {
        self.current.check(x, y)?;
        Ok(self.current.count_neibs(x, y))
    }

    /// Compute the next generation.
    pub fn advance(&mut self) {
        let n = self.world_size();
        for y in 0..n {
            for x in 0..n {
                let neibs = self.current.count_neibs(x, y);
                let next = if self.current.get(x, y) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                self.scratch.set(x, y, next);
            }
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(generation = self.generation, "advanced");
    }

    /// Set a single cell and forget its previous state.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), EngineError> {
        self.current.check(x, y)?;
        self.current.set(x, y, alive);
        self.scratch.set(x, y, false);
        trace!(x, y, alive, "set cell");
        Ok(())
    }

    /// Randomize the square `[cx - hw, cx + hw) x [cy - hw, cy + hw)` clipped to the world.
    ///
    /// Cells are alive with probability [`Automaton::REGION_FILL_FACTOR`].
    /// Nothing wraps around the edges.
    pub fn reinitialize_region<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        center_x: isize,
        center_y: isize,
        half_width: usize,
    ) {
        let n = self.world_size();
        let (xs, ys) = (
            clip(center_x, half_width, n),
            clip(center_y, half_width, n),
        );
        for x in xs.clone() {
            for y in ys.clone() {
                self.scratch.set(x, y, false);
                self.current
                    .set(x, y, rng.gen::<f64>() < Self::REGION_FILL_FACTOR);
            }
        }
        debug!(?xs, ?ys, "reinitialized region");
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.current.fill(false);
        self.scratch.fill(false);
        self.generation = 0;
        debug!("cleared world");
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.current, &self.scratch)
    }
}

/// `[center - half_width, center + half_width)` intersected with `[0, size)`.
fn clip(center: isize, half_width: usize, size: usize) -> Range<usize> {
    let half_width = isize::try_from(half_width).unwrap_or(isize::MAX);
    let size = isize::try_from(size).unwrap_or(isize::MAX);
    let start = center.saturating_sub(half_width).clamp(0, size);
    let end = center.saturating_add(half_width).clamp(start, size);
    start as usize..end as usize
}
