use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dims::Dims;

use super::{GenerationError, Generator};

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("cannot parse maze spec: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid maze spec: {0}")]
    Invalid(#[from] GenerationError),
}

/// Description of a maze to generate, usually loaded from a config file.
///
/// ```text
/// (
///     size: (40, 25),
///     seed: Some(1234),
///     smoothness: 20,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeSpec {
    /// Width and height of the maze.
    pub size: Dims,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation, a random one is picked when omitted.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Bias towards straight corridors, in 1/32 steps, must be lower than 32.
    #[serde(default)]
    pub smoothness: u8,
}

impl MazeSpec {
    pub fn new(size: Dims) -> Self {
        Self {
            size,
            seed: None,
            smoothness: 0,
        }
    }

    pub fn from_ron(text: &str) -> Result<Self, SpecError> {
        Ok(ron::from_str(text)?)
    }

    /// Parses and validates the spec in one go.
    pub fn load_generator(text: &str) -> Result<Generator, SpecError> {
        let spec = Self::from_ron(text)?;
        if spec.seed.is_none() {
            log::warn!("maze spec has no seed, the maze won't be reproducible from the spec alone");
        }

        Ok(Generator::from_spec(&spec)?)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        Generator::from_spec(self).map(|_| ())
    }
}
