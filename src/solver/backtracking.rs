use log::{debug, warn};

use super::{Path, Solver};
use crate::{
    array::Array2D,
    dims::Dims,
    maze::{CellWall, Grid},
    tracer::Tracer,
};

/// Exhaustive depth-first search, undoing moves out of dead ends.
///
/// Directions are tried left, right, up, down. On a perfect maze the first
/// path found is the only one.
#[derive(Debug, Default, Clone, Copy)]
pub struct Backtracking;

struct Frame {
    pos: Dims,
    // index into `CellWall::get_in_order()` of the next direction to try
    next: usize,
}

impl Backtracking {
    fn enter(grid: &mut Grid, visited: &mut Array2D<bool>, tracer: &mut dyn Tracer, pos: Dims) {
        tracer.on_step();
        visited[pos] = true;
        grid.set_visited(pos);
    }
}

impl Solver for Backtracking {
    fn search(&self, grid: &mut Grid, tracer: &mut dyn Tracer) -> Option<Path> {
        let (start, goal) = (grid.start(), grid.goal());
        let directions = CellWall::get_in_order();

        let mut visited = Array2D::new(false, grid.cols(), grid.rows());
        let mut stack = Vec::with_capacity(grid.cell_count());
        let mut explored = 1;

        Self::enter(grid, &mut visited, tracer, start);
        stack.push(Frame { pos: start, next: 0 });

        if start == goal {
            return Some(Path::new(vec![start]));
        }

        while let Some(frame) = stack.last_mut() {
            let pos = frame.pos;
            let next = (frame.next..directions.len()).find(|&i| {
                let wall = directions[i];
                grid.is_passable(pos, wall) && !visited[pos + wall.to_coord()]
            });

            let Some(i) = next else {
                // dead end, the cell stays visited so it's never tried again
                stack.pop();
                if let Some(parent) = stack.last() {
                    tracer.on_move(parent.pos, pos, true);
                }
                continue;
            };

            frame.next = i + 1;
            let to = pos + directions[i].to_coord();

            tracer.on_move(pos, to, false);
            Self::enter(grid, &mut visited, tracer, to);
            explored += 1;
            stack.push(Frame { pos: to, next: 0 });

            if to == goal {
                let path = Path::new(stack.iter().map(|f| f.pos).collect());
                debug!(
                    "backtracking reached the exit in {} hops, explored {} cells",
                    path.hops(),
                    explored
                );
                return Some(path);
            }
        }

        warn!("backtracking exhausted {} cells without reaching the exit", explored);
        None
    }
}
