use crate::{Automaton, Config, EngineError};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// User request forwarded to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Make the cell alive.
    Paint { x: usize, y: usize },
    /// Kill the cell.
    Erase { x: usize, y: usize },
    /// Randomize the square around the cell.
    Reinitialize { x: usize, y: usize },
    /// Randomize the whole world.
    Reset,
    TogglePause,
    Clear,
}

/// Simulation state driven once per frame by the window.
pub struct Session {
    life: Automaton,
    rng: ChaCha8Rng,
    fill_factor: f64,
    is_paused: bool,
}

impl Session {
    /// Half of the side of the square randomized by [`Action::Reinitialize`].
    pub const REGION_HALF_WIDTH: usize = 5;

    /// Allocate the world and fill it randomly.
    pub fn new(config: &Config) -> Result<Self, EngineError> {
        let mut rng = config.rng();
        let mut life = Automaton::new(config.world_size)?;
        life.seed(&mut rng, config.fill_factor);
        info!(
            world_size = config.world_size,
            population = life.population(),
            "session started"
        );
        Ok(Self {
            life,
            rng,
            fill_factor: config.fill_factor,
            is_paused: config.paused,
        })
    }

    pub fn life(&self) -> &Automaton {
        &self.life
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn apply(&mut self, action: Action) -> Result<(), EngineError> {
        match action {
            Action::Paint { x, y } => self.life.set_cell(x, y, true)?,
            Action::Erase { x, y } => self.life.set_cell(x, y, false)?,
            Action::Reinitialize { x, y } => {
                // grid sides fit in isize since the grid itself is allocated
                self.life.reinitialize_region(
                    &mut self.rng,
                    x as isize,
                    y as isize,
                    Self::REGION_HALF_WIDTH,
                )
            }
            Action::Reset => self.life.seed(&mut self.rng, self.fill_factor),
            Action::TogglePause => {
                self.is_paused = !self.is_paused;
                info!(paused = self.is_paused, "toggled pause");
            }
            Action::Clear => self.life.clear(),
        }
        Ok(())
    }

    /// Advance one generation unless paused.
    pub fn step(&mut self) {
        if !self.is_paused {
            self.life.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellState;

    fn session(paused: bool) -> Session {
        let config = Config {
            world_size: 32,
            seed: Some(42),
            paused,
            ..Config::default()
        };
        Session::new(&config).unwrap()
    }

    #[test]
    fn test_starts_seeded() {
        let session = session(false);
        assert_eq!(session.life().world_size(), 32);
        assert!(session.life().population() > 0);
        assert_eq!(session.life().generation(), 0);
    }

    #[test]
    fn test_rejects_empty_world() {
        let config = Config {
            world_size: 0,
            ..Config::default()
        };
        assert!(Session::new(&config).is_err());
    }

    #[test]
    fn test_pause_stops_stepping() {
        let mut session = session(true);
        session.step();
        assert_eq!(session.life().generation(), 0);

        session.apply(Action::TogglePause).unwrap();
        assert!(!session.is_paused());
        session.step();
        session.step();
        assert_eq!(session.life().generation(), 2);
    }

    #[test]
    fn test_paint_and_erase() {
        let mut session = session(true);
        session.apply(Action::Clear).unwrap();
        session.apply(Action::Paint { x: 3, y: 4 }).unwrap();
        assert_eq!(session.life().snapshot().state(3, 4), CellState::Fresh);

        session.apply(Action::Erase { x: 3, y: 4 }).unwrap();
        assert_eq!(session.life().population(), 0);

        assert!(session.apply(Action::Paint { x: 32, y: 0 }).is_err());
    }

    #[test]
    fn test_reinitialize_stays_near_pointer() {
        let mut session = session(true);
        session.apply(Action::Clear).unwrap();
        session.apply(Action::Reinitialize { x: 0, y: 31 }).unwrap();
        let half = Session::REGION_HALF_WIDTH;
        for (x, y) in session.life().to_grid().alive() {
            assert!(x < half && y >= 31 - half, "({x}, {y})");
        }
    }

    #[test]
    fn test_reset_reseeds() {
        let mut session = session(false);
        session.step();
        session.apply(Action::Clear).unwrap();
        assert_eq!(session.life().population(), 0);

        session.apply(Action::Reset).unwrap();
        assert!(session.life().population() > 0);
        assert_eq!(session.life().generation(), 0);
    }
}
