use std::ops::Add;

use serde::{Deserialize, Serialize};

/// 2D integer vector, used both for cell positions `(x, y)` and grid sizes `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Iterates over all positions in the rectangle `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    /// Number of cells of a grid of this size, `None` on overflow or for non-positive sizes.
    pub fn area(self) -> Option<usize> {
        if !self.all_positive() {
            return None;
        }

        (self.0 as usize).checked_mul(self.1 as usize)
    }

    pub fn linear_index(&self, size: Dims) -> usize {
        assert!(self.all_non_negative());
        (self.1 as usize) * (size.0 as usize) + self.0 as usize
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}
