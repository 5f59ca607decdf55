//! Perfect maze generation and solving on a rectangular grid.
//!
//! Mazes are carved by a randomized backtracking walk which uses disjoint sets to never open a
//! wall between two already connected cells, so the result is always a spanning tree. The same
//! size, seed and smoothness always give the same maze, and the solver always picks the same
//! shortest path for the same endpoints.
//!
//! ```
//! use mazing::{algorithms::generate, dims::Dims, solver::solve};
//!
//! let board = generate(Dims(8, 8), 1234, 10).unwrap();
//! let path = solve(&board, Dims(0, 0), Dims(7, 7)).unwrap().unwrap();
//! assert_eq!(path.destination(), Dims(7, 7));
//! assert_eq!(path.source(), Dims(0, 0));
//! ```

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
pub mod solver;

pub use algorithms::{generate, GenerationError, Generator, MazeSpec};
pub use dims::Dims;
pub use gameboard::{Maze, MazeBoard};
pub use solver::{solve, Path, SolveError};
