mod depth_first_search;

use std::fmt;

use log::debug;
use rand::{thread_rng, Rng as _, SeedableRng as _};

pub use depth_first_search::DepthFirstSearch;

use crate::{
    dims::Dims,
    maze::{Grid, MazeError},
    tracer::Tracer,
};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves passages into a fully walled grid.
///
/// Implementations may use the cells' `visited` flag as scratch space, the
/// [`Generator`] clears it afterwards.
pub trait MazeAlgorithm: fmt::Debug + Sync + Send {
    fn carve(&self, grid: &mut Grid, rng: &mut Random, tracer: &mut dyn Tracer);
}

#[derive(Debug)]
pub struct Generator {
    algorithm: Box<dyn MazeAlgorithm>,
}

impl Generator {
    pub fn new(algorithm: Box<dyn MazeAlgorithm>) -> Self {
        Self { algorithm }
    }

    /// `seed` itself, or a fresh one from the thread rng for `None`.
    pub fn seed(seed: Option<u64>) -> u64 {
        seed.unwrap_or_else(|| thread_rng().gen())
    }

    /// Seeded generator, or a randomly seeded one for `None`.
    pub fn rng(seed: Option<u64>) -> Random {
        Random::seed_from_u64(Self::seed(seed))
    }

    /// Builds a complete maze: allocates the grid, opens the entrance and the
    /// exit, carves, and finally clears the `visited` flags so the grid is
    /// ready to be solved.
    pub fn generate(
        &self,
        size: Dims,
        rng: &mut Random,
        tracer: &mut dyn Tracer,
    ) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(size)?;
        debug!("generating {}x{} maze with {:?}", size.0, size.1, self.algorithm);

        grid.break_entrance_and_exit();
        tracer.on_cell_ready(grid.start());
        tracer.on_cell_ready(grid.goal());

        self.algorithm.carve(&mut grid, rng, tracer);
        grid.reset_visited();

        debug_assert!(grid.check_symmetry().is_ok());
        debug!("carved {} passages", grid.passage_count());

        Ok(grid)
    }

    /// Shorthand for [`Generator::generate`] with a fresh rng.
    pub fn generate_seeded(
        &self,
        size: Dims,
        seed: Option<u64>,
        tracer: &mut dyn Tracer,
    ) -> Result<Grid, MazeError> {
        let seed = Self::seed(seed);
        debug!("seed {}", seed);
        self.generate(size, &mut Random::seed_from_u64(seed), tracer)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(Box::new(DepthFirstSearch))
    }
}
