mod backtracking;
mod best_first;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use backtracking::Backtracking;
pub use best_first::BestFirst;

use crate::{
    dims::Dims,
    maze::{CellWall, Grid},
    tracer::Tracer,
};

#[cfg(feature = "hashbrown")]
pub(crate) use hashbrown::HashSet;
#[cfg(not(feature = "hashbrown"))]
pub(crate) use std::collections::HashSet;

/// Cells from the entrance to the exit, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Dims>);

impl Path {
    pub fn new(cells: Vec<Dims>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Dims] {
        &self.0
    }

    /// Number of moves, one less than the number of cells.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<Dims> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Dims> {
        self.0.last().copied()
    }

    /// Whether every consecutive pair of cells is joined by an open passage.
    pub fn is_walkable(&self, grid: &Grid) -> bool {
        self.0.windows(2).all(|pair| {
            CellWall::between(pair[0], pair[1]).is_some_and(|wall| grid.is_passable(pair[0], wall))
        })
    }
}

/// Path search from [`Grid::start`] to [`Grid::goal`].
///
/// Each search keeps its own visited bookkeeping, the cells' `visited` flags
/// are only written as a record of what was explored. Running a solver twice
/// on the same grid gives the same answer, with or without
/// [`Grid::reset_visited`] in between.
pub trait Solver: fmt::Debug {
    /// Returns the path found, `None` if the exit can't be reached.
    fn search(&self, grid: &mut Grid, tracer: &mut dyn Tracer) -> Option<Path>;

    fn solve(&self, grid: &mut Grid, tracer: &mut dyn Tracer) -> bool {
        self.search(grid, tracer).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SolverKind {
    Backtracking,
    #[default]
    BestFirst,
}

impl SolverKind {
    pub fn solver(self) -> Box<dyn Solver> {
        match self {
            SolverKind::Backtracking => Box::new(Backtracking),
            SolverKind::BestFirst => Box::new(BestFirst),
        }
    }

    pub fn all() -> [SolverKind; 2] {
        [SolverKind::Backtracking, SolverKind::BestFirst]
    }
}
