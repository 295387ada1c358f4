use crate::dims::Dims;

use self::CellWall::*;

/// One grid unit. A wall flag set to `true` means the wall is present and the
/// passage in that direction is blocked.
///
/// The cell doesn't know its own position, that's implied by its slot in the
/// [`Grid`](super::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
    pub(crate) visited: bool,
}

impl Cell {
    /// Fully walled, unvisited cell.
    pub fn new() -> Cell {
        Cell {
            left: true,
            top: true,
            right: true,
            bottom: true,
            visited: false,
        }
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Left => self.left = false,
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
        }
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        match wall {
            Left => self.left,
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Number of walls still standing.
    pub fn wall_count(&self) -> usize {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&w| self.get_wall(w))
            .count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    /// Left, right, up, down.
    ///
    /// Both carving and solving walk the neighbors in this order, which keeps
    /// seeded runs reproducible.
    pub fn get_in_order() -> [CellWall; 4] {
        [Left, Right, Top, Bottom]
    }

    pub fn to_coord(&self) -> Dims {
        match self {
            Self::Left => Dims(-1, 0),
            Self::Right => Dims(1, 0),
            Self::Top => Dims(0, -1),
            Self::Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        }
    }

    /// Returns the wall of `cell` that faces `cell2`, if they are adjacent.
    pub fn between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (-1, 0) => Some(Left),
            (1, 0) => Some(Right),
            (0, -1) => Some(Top),
            (0, 1) => Some(Bottom),
            _ => None,
        }
    }
}
