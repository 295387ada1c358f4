pub mod cell;
pub mod grid;

pub use cell::{Cell, CellWall};
pub use grid::Grid;

use thiserror::Error;

use crate::dims::Dims;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze size {0:?}, both dimensions must be at least 1")]
    InvalidSize(Dims),
    #[error("Wall {wall:?} of cell {pos:?} doesn't match the other side")]
    AsymmetricWall { pos: Dims, wall: CellWall },
}
