use smallvec::SmallVec;

use super::{Cell, CellWall, MazeError};
use crate::{array::Array2D, dims::Dims};

use CellWall::*;

/// Rectangular collection of [`Cell`]s addressed by `Dims(column, row)`.
///
/// Walls can only be removed through [`Grid::remove_wall`] and
/// [`Grid::break_entrance_and_exit`], both of which keep the two sides of a
/// shared edge in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Allocates a fully walled, unvisited grid.
    pub fn new(size: Dims) -> Result<Self, MazeError> {
        if !size.all_positive() {
            return Err(MazeError::InvalidSize(size));
        }

        let cells = Array2D::new_dims(Cell::new(), size).ok_or(MazeError::InvalidSize(size))?;
        Ok(Grid { cells })
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cols(&self) -> usize {
        self.size().0 as usize
    }

    pub fn rows(&self) -> usize {
        self.size().1 as usize
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The entrance, always `(0, 0)`.
    pub fn start(&self) -> Dims {
        Dims::ZERO
    }

    /// The exit, bottom right corner.
    pub fn goal(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let size = self.size();
        0 <= pos.0 && pos.0 < size.0 && 0 <= pos.1 && pos.1 < size.1
    }

    /// Whether both sides of `wall` lie inside the grid.
    pub fn is_valid_wall(&self, cell: Dims, wall: CellWall) -> bool {
        self.is_in_bounds(cell) && self.is_in_bounds(cell + wall.to_coord())
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    /// Carves the wall between `cell` and its neighbor in direction `wall`,
    /// on both sides.
    ///
    /// Returns `false` and leaves the grid untouched when the neighbor is out
    /// of bounds.
    pub fn remove_wall(&mut self, cell: Dims, wall: CellWall) -> bool {
        if !self.is_valid_wall(cell, wall) {
            return false;
        }

        self.cells[cell].remove_wall(wall);
        self.cells[cell + wall.to_coord()].remove_wall(wall.reverse_wall());
        true
    }

    /// Opens the top of the entrance and the bottom of the exit.
    pub fn break_entrance_and_exit(&mut self) {
        let (start, goal) = (self.start(), self.goal());
        self.cells[start].remove_wall(Top);
        self.cells[goal].remove_wall(Bottom);
    }

    /// In-bounds neighbors of `pos`, in left, right, up, down order, for which
    /// `pred(neighbor, wall_towards_neighbor)` holds.
    pub fn neighbors_by(
        &self,
        pos: Dims,
        pred: impl Fn(Dims, CellWall) -> bool,
    ) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_valid_wall(pos, wall))
            .map(|wall| (pos + wall.to_coord(), wall))
            .filter(|&(neighbor, wall)| pred(neighbor, wall))
            .map(|(neighbor, _)| neighbor)
            .collect()
    }

    /// Neighbors whose `visited` flag is clear, walls are ignored.
    pub fn unvisited_neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        self.neighbors_by(pos, |neighbor, _| !self.cells[neighbor].visited)
    }

    /// Neighbors reachable without crossing a wall, `visited` is ignored.
    pub fn passable_neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        self.neighbors_by(pos, |_, wall| self.cells[pos].is_open(wall))
    }

    /// Whether one can step from `pos` through `wall` and stay inside the grid.
    pub fn is_passable(&self, pos: Dims, wall: CellWall) -> bool {
        self.is_valid_wall(pos, wall) && self.cells[pos].is_open(wall)
    }

    pub fn is_visited(&self, pos: Dims) -> bool {
        self.cells.get(pos).is_some_and(|c| c.visited)
    }

    /// Panics if `pos` is out of bounds.
    pub(crate) fn set_visited(&mut self, pos: Dims) {
        self.cells[pos].visited = true;
    }

    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    /// Number of carved internal walls. The entrance and exit are not counted.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                [Right, Bottom]
                    .into_iter()
                    .filter(|&wall| self.is_passable(pos, wall))
                    .count()
            })
            .sum()
    }

    /// Whether every cell can be reached from the entrance.
    pub fn is_connected(&self) -> bool {
        let mut seen = Array2D::new(false, self.cols(), self.rows());
        let mut stack = vec![self.start()];
        seen[self.start()] = true;
        let mut reached = 1;

        while let Some(pos) = stack.pop() {
            for next in self.passable_neighbors(pos) {
                if !seen[next] {
                    seen[next] = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }

        reached == self.cell_count()
    }

    /// Connected with exactly `cells - 1` passages, i.e. a spanning tree.
    pub fn is_perfect(&self) -> bool {
        self.passage_count() == self.cell_count() - 1 && self.is_connected()
    }

    /// Verifies that every shared edge agrees on both sides and that the outer
    /// border is closed everywhere except the entrance and exit.
    pub fn check_symmetry(&self) -> Result<(), MazeError> {
        let (start, goal) = (self.start(), self.goal());

        for pos in self.cells.iter_pos() {
            let cell = &self.cells[pos];
            for wall in CellWall::get_in_order() {
                let consistent = if self.is_valid_wall(pos, wall) {
                    let other = &self.cells[pos + wall.to_coord()];
                    cell.get_wall(wall) == other.get_wall(wall.reverse_wall())
                } else {
                    let is_gate = (pos == start && wall == Top) || (pos == goal && wall == Bottom);
                    is_gate || cell.get_wall(wall)
                };

                if !consistent {
                    return Err(MazeError::AsymmetricWall { pos, wall });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_sizes() {
        assert_eq!(Grid::new(Dims(0, 4)), Err(MazeError::InvalidSize(Dims(0, 4))));
        assert_eq!(Grid::new(Dims(4, 0)), Err(MazeError::InvalidSize(Dims(4, 0))));
        assert_eq!(Grid::new(Dims(-2, 3)), Err(MazeError::InvalidSize(Dims(-2, 3))));
        assert!(Grid::new(Dims(1, 1)).is_ok());
    }

    #[test]
    fn new_grid_is_walled_and_unvisited() {
        let grid = Grid::new(Dims(3, 2)).unwrap();
        assert_eq!(grid.cell_count(), 6);
        assert!(grid.cells().all(|c| c.wall_count() == 4 && !c.is_visited()));
        assert_eq!(grid.passage_count(), 0);
        assert!(!grid.is_connected());
        assert_eq!(grid.check_symmetry(), Ok(()));
    }

    #[test]
    fn remove_wall_is_symmetric() {
        let mut grid = Grid::new(Dims(3, 3)).unwrap();
        assert!(grid.remove_wall(Dims(1, 1), Right));
        assert!(grid.get_cell(Dims(2, 1)).unwrap().is_open(Left));
        assert!(grid.remove_wall(Dims(1, 1), Top));
        assert!(grid.get_cell(Dims(1, 0)).unwrap().is_open(Bottom));
        assert_eq!(grid.passage_count(), 2);
        assert_eq!(grid.check_symmetry(), Ok(()));
    }

    #[test]
    fn remove_wall_out_of_bounds_is_noop() {
        let mut grid = Grid::new(Dims(2, 2)).unwrap();
        let before = grid.clone();
        assert!(!grid.remove_wall(Dims(0, 0), Left));
        assert!(!grid.remove_wall(Dims(1, 1), Bottom));
        assert!(!grid.remove_wall(Dims(5, 5), Right));
        assert_eq!(grid, before);
    }

    #[test]
    fn entrance_and_exit() {
        let mut grid = Grid::new(Dims(4, 3)).unwrap();
        grid.break_entrance_and_exit();
        assert!(grid.get_cell(Dims(0, 0)).unwrap().is_open(Top));
        assert!(grid.get_cell(Dims(3, 2)).unwrap().is_open(Bottom));
        assert_eq!(grid.passage_count(), 0);
        assert_eq!(grid.check_symmetry(), Ok(()));
        // leaving through the border is never a valid move
        assert!(!grid.is_passable(Dims(0, 0), Top));
    }

    #[test]
    fn entrance_and_exit_on_single_cell() {
        let mut grid = Grid::new(Dims(1, 1)).unwrap();
        grid.break_entrance_and_exit();
        let cell = grid.get_cell(Dims::ZERO).unwrap();
        assert!(cell.is_open(Top) && cell.is_open(Bottom));
        assert!(cell.get_wall(Left) && cell.get_wall(Right));
        assert!(grid.is_perfect());
    }

    #[test]
    fn neighbor_queries() {
        let mut grid = Grid::new(Dims(3, 3)).unwrap();
        let center = Dims(1, 1);
        assert_eq!(
            grid.unvisited_neighbors(center).as_slice(),
            &[Dims(0, 1), Dims(2, 1), Dims(1, 0), Dims(1, 2)]
        );
        assert!(grid.passable_neighbors(center).is_empty());

        grid.set_visited(Dims(0, 1));
        grid.remove_wall(center, Left);
        grid.remove_wall(center, Bottom);
        assert_eq!(
            grid.unvisited_neighbors(center).as_slice(),
            &[Dims(2, 1), Dims(1, 0), Dims(1, 2)]
        );
        assert_eq!(
            grid.passable_neighbors(center).as_slice(),
            &[Dims(0, 1), Dims(1, 2)]
        );
        assert_eq!(grid.unvisited_neighbors(Dims(0, 0)).as_slice(), &[Dims(1, 0)]);
    }

    #[test]
    fn reset_visited_clears_everything() {
        let mut grid = Grid::new(Dims(2, 2)).unwrap();
        grid.set_visited(Dims(0, 0));
        grid.set_visited(Dims(1, 1));
        assert_eq!(grid.visited_count(), 2);
        grid.reset_visited();
        assert_eq!(grid.visited_count(), 0);
    }

    #[test]
    fn cycle_is_connected_but_not_perfect() {
        let mut grid = Grid::new(Dims(2, 2)).unwrap();
        grid.remove_wall(Dims(0, 0), Right);
        grid.remove_wall(Dims(0, 0), Bottom);
        grid.remove_wall(Dims(1, 0), Bottom);
        assert!(grid.is_perfect());
        grid.remove_wall(Dims(0, 1), Right);
        assert!(grid.is_connected());
        assert!(!grid.is_perfect());
    }
}
