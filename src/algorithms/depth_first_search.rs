use rand::seq::SliceRandom;

use super::{MazeAlgorithm, Random};
use crate::{
    maze::{CellWall, Grid},
    tracer::Tracer,
};

/// Randomized depth-first backtracker, starting at the entrance.
///
/// Every carve connects an unvisited cell to the already visited tree, so the
/// result is always a spanning tree over the whole grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirstSearch;

impl MazeAlgorithm for DepthFirstSearch {
    fn carve(&self, grid: &mut Grid, rng: &mut Random, tracer: &mut dyn Tracer) {
        let mut stack = Vec::with_capacity(grid.cell_count());

        let start = grid.start();
        grid.set_visited(start);
        stack.push(start);

        while let Some(&current) = stack.last() {
            let unvisited_neighbors = grid.unvisited_neighbors(current);

            let Some(&chosen) = unvisited_neighbors.choose(rng) else {
                // dead end, nothing about this cell will change anymore
                stack.pop();
                tracer.on_cell_ready(current);
                continue;
            };

            if let Some(wall) = CellWall::between(current, chosen) {
                grid.remove_wall(current, wall);
            }
            grid.set_visited(chosen);
            stack.push(chosen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dims::Dims, tracer::NoopTracer};
    use rand::SeedableRng as _;

    fn carve(size: Dims, seed: u64) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        DepthFirstSearch.carve(&mut grid, &mut Random::seed_from_u64(seed), &mut NoopTracer);
        grid
    }

    #[test]
    fn visits_every_cell() {
        let grid = carve(Dims(9, 6), 1);
        assert_eq!(grid.visited_count(), grid.cell_count());
    }

    #[test]
    fn carves_spanning_tree() {
        for (size, seed) in [(Dims(1, 1), 0), (Dims(1, 8), 1), (Dims(8, 1), 2), (Dims(12, 9), 3)] {
            let grid = carve(size, seed);
            assert!(grid.is_perfect(), "{:?} seed {}", size, seed);
            assert_eq!(grid.check_symmetry(), Ok(()));
        }
    }

    #[test]
    fn deterministic_for_seed() {
        assert_eq!(carve(Dims(10, 10), 77), carve(Dims(10, 10), 77));
    }

    #[test]
    fn deep_corridor_does_not_overflow() {
        // a single row forces the stack to hold every cell at once
        let grid = carve(Dims(200_000, 1), 5);
        assert!(grid.is_perfect());
    }
}
