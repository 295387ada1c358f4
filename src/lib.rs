//! Perfect maze generation and solving.
//!
//! A [`Generator`](algorithms::Generator) carves a spanning tree over a
//! rectangular [`Grid`](maze::Grid), then either [`Solver`](solver::Solver)
//! walks it from the entrance in the top left corner to the exit in the
//! bottom right one.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod logging;
pub mod maze;
pub mod settings;
pub mod solver;
pub mod tracer;
