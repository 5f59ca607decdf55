pub mod backtracker;
pub mod spec;
pub mod union_find;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use crate::{dims::Dims, gameboard::MazeBoard};

pub use backtracker::Backtracker;
pub use spec::{MazeSpec, SpecError};
pub use union_find::UnionFind;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Smoothness is a probability in 1/32 steps, valid values are `0..SMOOTHNESS_SCALE`.
pub const SMOOTHNESS_SCALE: u32 = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid maze size {0:?}, both dimensions must be positive")]
    InvalidDimensions(Dims),
    #[error("invalid smoothness {0}, must be lower than 32")]
    InvalidSmoothness(u8),
}

/// Validated generation parameters.
///
/// Build it either directly with [`Generator::new`] or from a [`MazeSpec`]. When no seed is
/// given, a random one is drawn on every [`Generator::generate`] and stored in the resulting
/// board, so the maze can always be reproduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    size: Dims,
    seed: Option<u64>,
    smoothness: u8,
}

impl Generator {
    pub fn new(size: Dims, seed: Option<u64>, smoothness: u8) -> Result<Self, GenerationError> {
        if size.area().is_none() {
            return Err(GenerationError::InvalidDimensions(size));
        }

        if smoothness as u32 >= SMOOTHNESS_SCALE {
            return Err(GenerationError::InvalidSmoothness(smoothness));
        }

        Ok(Self {
            size,
            seed,
            smoothness,
        })
    }

    pub fn from_spec(spec: &MazeSpec) -> Result<Self, GenerationError> {
        Self::new(spec.size, spec.seed, spec.smoothness)
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn smoothness(&self) -> u8 {
        self.smoothness
    }

    pub fn generate(&self) -> Result<MazeBoard, GenerationError> {
        let seed = self.seed.unwrap_or_else(|| {
            let seed = thread_rng().gen();
            log::debug!("no seed given, using {}", seed);
            seed
        });

        let mut board =
            MazeBoard::new(self.size).ok_or(GenerationError::InvalidDimensions(self.size))?;
        let mut rng = Random::seed_from_u64(seed);

        log::debug!(
            "generating {}x{} maze, seed {}, smoothness {}",
            self.size.0,
            self.size.1,
            seed,
            self.smoothness
        );

        let carved = Backtracker::new(self.smoothness).carve(&mut board, &mut rng);
        board.seed = Some(seed);

        log::debug!("maze done, {} passages carved", carved);

        Ok(board)
    }
}

/// Generates a perfect maze, the result depends only on the arguments.
pub fn generate(size: Dims, seed: u64, smoothness: u8) -> Result<MazeBoard, GenerationError> {
    Generator::new(size, Some(seed), smoothness)?.generate()
}
