pub mod board;
pub mod cell;
pub mod maze;

pub use board::MazeBoard;
pub use cell::{Cell, Direction, DirectionSet};
pub use maze::Maze;
