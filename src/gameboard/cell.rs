use crate::dims::Dims;

/// One of the four grid directions.
///
/// The discriminants are the one-hot bits used by the generator to track which directions were
/// already attempted from a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    West = 1,
    East = 2,
    North = 4,
    South = 8,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// Maps a number in `0..4` to a direction, `None` otherwise.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn bit(self) -> u8 {
        self as u8
    }

    pub fn offset(self) -> Dims {
        match self {
            Self::West => Dims(-1, 0),
            Self::East => Dims(1, 0),
            Self::North => Dims(0, -1),
            Self::South => Dims(0, 1),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::West => Self::East,
            Self::East => Self::West,
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }
}

/// Set of directions, stored as the one-hot bits of [`Direction`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: Self = DirectionSet(0);
    pub const FULL: Self = DirectionSet(0b1111);

    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn is_full(self) -> bool {
        self == Self::FULL
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

/// Persistent wall record of a single cell.
///
/// Only the north and the west walls are stored, south and east walls belong to the neighboring
/// cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    pub const NORTH: u8 = 0b01;
    pub const WEST: u8 = 0b10;

    pub fn new() -> Cell {
        Cell(0)
    }

    /// Builds a cell from its raw bits, unknown bits are dropped.
    pub fn from_bits(bits: u8) -> Cell {
        Cell(bits & (Self::NORTH | Self::WEST))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_north_open(self) -> bool {
        self.0 & Self::NORTH != 0
    }

    pub fn is_west_open(self) -> bool {
        self.0 & Self::WEST != 0
    }

    pub(crate) fn open_north(&mut self) {
        self.0 |= Self::NORTH;
    }

    pub(crate) fn open_west(&mut self) {
        self.0 |= Self::WEST;
    }

    pub fn open_count(self) -> usize {
        self.0.count_ones() as usize
    }
}
