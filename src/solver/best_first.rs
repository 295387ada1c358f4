use std::{cmp::Reverse, collections::BinaryHeap};

use log::{debug, warn};

use super::{HashSet, Path, Solver};
use crate::{array::Array2D, dims::Dims, maze::Grid, tracer::Tracer};

/// A* search with the Manhattan distance to the exit as heuristic.
///
/// Every move costs one, so the heuristic is consistent and the first time the
/// exit is popped its path is a shortest one.
#[derive(Debug, Default, Clone, Copy)]
pub struct BestFirst;

impl BestFirst {
    fn reconstruct(came_from: &Array2D<Option<Dims>>, goal: Dims) -> Path {
        let mut cells = vec![goal];
        let mut current = goal;
        while let Some(prev) = came_from[current] {
            cells.push(prev);
            current = prev;
        }
        cells.reverse();
        Path::new(cells)
    }
}

impl Solver for BestFirst {
    fn search(&self, grid: &mut Grid, tracer: &mut dyn Tracer) -> Option<Path> {
        let (start, goal) = (grid.start(), grid.goal());
        let heuristic = |pos: Dims| pos.manhattan(goal);

        let mut g_score = Array2D::new(usize::MAX, grid.cols(), grid.rows());
        let mut came_from = Array2D::new(None, grid.cols(), grid.rows());
        let mut closed = HashSet::with_capacity(grid.cell_count());

        // min-heap on (f_score, position), ties go to the smaller coordinate
        let mut open_set = BinaryHeap::new();

        g_score[start] = 0;
        open_set.push(Reverse((heuristic(start), start)));

        while let Some(Reverse((_, current))) = open_set.pop() {
            if current == goal {
                let path = Self::reconstruct(&came_from, goal);
                debug!(
                    "best-first reached the exit in {} hops, closed {} cells",
                    path.hops(),
                    closed.len()
                );
                return Some(path);
            }

            // stale entry, pushed again later with a better score
            if !closed.insert(current) {
                continue;
            }

            grid.set_visited(current);
            tracer.on_step();

            let tentative_g_score = g_score[current] + 1;
            for neighbor in grid.passable_neighbors(current) {
                if closed.contains(&neighbor) || tentative_g_score >= g_score[neighbor] {
                    continue;
                }

                g_score[neighbor] = tentative_g_score;
                came_from[neighbor] = Some(current);
                open_set.push(Reverse((tentative_g_score + heuristic(neighbor), neighbor)));

                tracer.on_move(current, neighbor, false);
            }
        }

        warn!("best-first closed {} cells without reaching the exit", closed.len());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        maze::CellWall::*,
        tracer::{NoopTracer, Recorder, TraceEvent},
    };

    #[test]
    fn single_cell_is_solved_without_moving() {
        let mut grid = Grid::new(Dims(1, 1)).unwrap();
        let mut rec = Recorder::new();
        let path = BestFirst.search(&mut grid, &mut rec).unwrap();
        assert_eq!(path.cells(), &[Dims(0, 0)]);
        assert!(rec.events.is_empty());
    }

    #[test]
    fn takes_shorter_of_two_routes() {
        // S . .
        // .   .     long: right, down, back left, down, right (6 hops)
        // . . E     short: down the left column, then right (4 hops)
        let mut grid = Grid::new(Dims(3, 3)).unwrap();
        grid.remove_wall(Dims(0, 0), Right);
        grid.remove_wall(Dims(1, 0), Right);
        grid.remove_wall(Dims(2, 0), Bottom);
        grid.remove_wall(Dims(1, 1), Right);
        grid.remove_wall(Dims(1, 1), Bottom);
        grid.remove_wall(Dims(0, 0), Bottom);
        grid.remove_wall(Dims(0, 1), Bottom);
        grid.remove_wall(Dims(0, 2), Right);
        grid.remove_wall(Dims(1, 2), Right);

        let path = BestFirst.search(&mut grid, &mut NoopTracer).unwrap();
        assert_eq!(path.hops(), 4);
        assert_eq!(
            path.cells(),
            &[Dims(0, 0), Dims(0, 1), Dims(0, 2), Dims(1, 2), Dims(2, 2)]
        );
        assert!(path.is_walkable(&grid));
        assert_eq!(path.first(), Some(Dims(0, 0)));
        assert_eq!(path.last(), Some(Dims(2, 2)));
    }

    #[test]
    fn only_reports_forward_moves() {
        let mut grid = Grid::new(Dims(2, 2)).unwrap();
        grid.remove_wall(Dims(0, 0), Right);
        grid.remove_wall(Dims(0, 0), Bottom);
        grid.remove_wall(Dims(0, 1), Right);

        let mut rec = Recorder::new();
        assert!(BestFirst.solve(&mut grid, &mut rec));
        assert_eq!(rec.moves(true).count(), 0);
        assert!(rec
            .events
            .iter()
            .all(|e| !matches!(e, TraceEvent::Move { undo: true, .. })));
    }

    #[test]
    fn unreachable_exit_empties_frontier() {
        let mut grid = Grid::new(Dims(3, 1)).unwrap();
        grid.remove_wall(Dims(0, 0), Right);

        let mut rec = Recorder::new();
        assert!(BestFirst.search(&mut grid, &mut rec).is_none());
        assert_eq!(rec.steps(), 2);
        assert_eq!(grid.visited_count(), 2);
    }
}
