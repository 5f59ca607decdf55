use crate::{
    algorithms::{GenerationError, Generator},
    dims::Dims,
    solver::{self, Path, SolveError},
};

use super::MazeBoard;

/// A maze that may or may not be generated yet.
///
/// Generating replaces the previous board, a failed generation leaves it untouched. Solving
/// before the first successful generation is reported as [`SolveError::NotGenerated`].
#[derive(Debug, Clone, Default)]
pub struct Maze {
    board: Option<MazeBoard>,
}

impl Maze {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(
        &mut self,
        size: Dims,
        seed: u64,
        smoothness: u8,
    ) -> Result<&MazeBoard, GenerationError> {
        self.generate_from(&Generator::new(size, Some(seed), smoothness)?)
    }

    pub fn generate_from(&mut self, generator: &Generator) -> Result<&MazeBoard, GenerationError> {
        let board = generator.generate()?;
        Ok(&*self.board.insert(board))
    }

    /// See [`solver::solve`].
    pub fn solve(&self, source: Dims, dest: Dims) -> Result<Option<Path>, SolveError> {
        let board = self.board.as_ref().ok_or(SolveError::NotGenerated)?;
        solver::solve(board, source, dest)
    }

    pub fn board(&self) -> Option<&MazeBoard> {
        self.board.as_ref()
    }

    pub fn into_board(self) -> Option<MazeBoard> {
        self.board
    }

    pub fn is_generated(&self) -> bool {
        self.board.is_some()
    }
}

impl From<MazeBoard> for Maze {
    fn from(board: MazeBoard) -> Self {
        Self { board: Some(board) }
    }
}
