use crate::{array::Array2D, dims::Dims};

use super::cell::{Cell, Direction};

/// The wall graph of a maze.
///
/// Every cell knows only whether its north and west walls are open, the south and east walls are
/// answered by the neighbor below and the neighbor to the right. All walls start closed and can
/// only ever be opened, so a board never loses connectivity once a passage is carved.
///
/// Queries about walls on the border of the grid always report a closed wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeBoard {
    pub(crate) cells: Array2D<Cell>,
    pub(crate) seed: Option<u64>,
}

impl MazeBoard {
    /// Order in which the solver looks at the neighbors of a cell.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// Creates a board with all walls closed.
    ///
    /// Returns `None` if any of the dimensions is not positive or the cell count doesn't fit into
    /// memory indices.
    pub fn new(size: Dims) -> Option<Self> {
        size.area()?;
        Some(MazeBoard {
            cells: Array2D::new_dims(Cell::new(), size)?,
            seed: None,
        })
    }

    /// Creates a board from raw cell bits in row-major order, see [`Cell::from_bits`].
    pub fn from_raw(size: Dims, raw: &[u8]) -> Option<Self> {
        if size.area()? != raw.len() {
            return None;
        }

        let mut board = Self::new(size)?;
        for (pos, &bits) in Dims::iter_fill(Dims::ZERO, size).zip(raw) {
            let cell = Cell::from_bits(bits);
            // Bits pointing out of the grid are dropped, they would never be read anyway.
            if cell.is_north_open() {
                board.remove_wall(pos, Direction::North);
            }
            if cell.is_west_open() {
                board.remove_wall(pos, Direction::West);
            }
        }

        Some(board)
    }

    /// Raw cell bits in row-major order.
    pub fn to_raw(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.bits()).collect()
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> i32 {
        self.size().0
    }

    pub fn height(&self) -> i32 {
        self.size().1
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Seed this board was generated from, `None` for boards built by hand.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn cell(&self, pos: Dims) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    pub fn is_north_open(&self, x: i32, y: i32) -> bool {
        self.is_open(Dims(x, y), Direction::North)
    }

    pub fn is_west_open(&self, x: i32, y: i32) -> bool {
        self.is_open(Dims(x, y), Direction::West)
    }

    pub fn is_south_open(&self, x: i32, y: i32) -> bool {
        self.is_open(Dims(x, y), Direction::South)
    }

    pub fn is_east_open(&self, x: i32, y: i32) -> bool {
        self.is_open(Dims(x, y), Direction::East)
    }

    /// Returns the neighbor of `pos` in the given direction, if both of them are in the grid.
    pub fn neighbor(&self, pos: Dims, dir: Direction) -> Option<Dims> {
        let next = pos + dir.offset();
        (self.is_in_bounds(pos) && self.is_in_bounds(next)).then_some(next)
    }

    /// Whether one can walk from `pos` in the given direction.
    pub fn is_open(&self, pos: Dims, dir: Direction) -> bool {
        let Some(next) = self.neighbor(pos, dir) else {
            return false;
        };

        match dir {
            Direction::North => self.cells[pos].is_north_open(),
            Direction::West => self.cells[pos].is_west_open(),
            Direction::South => self.cells[next].is_north_open(),
            Direction::East => self.cells[next].is_west_open(),
        }
    }

    /// Neighbors reachable from `pos` through an open wall, in [`Self::SCAN_ORDER`].
    pub fn open_neighbors(&self, pos: Dims) -> impl Iterator<Item = Dims> + '_ {
        Self::SCAN_ORDER
            .into_iter()
            .filter(move |&dir| self.is_open(pos, dir))
            .map(move |dir| pos + dir.offset())
    }

    /// Opens the wall between `pos` and its neighbor in the given direction.
    ///
    /// Returns `false` and does nothing if the neighbor is out of the grid.
    pub fn remove_wall(&mut self, pos: Dims, dir: Direction) -> bool {
        let Some(next) = self.neighbor(pos, dir) else {
            return false;
        };

        match dir {
            Direction::North => self.cells[pos].open_north(),
            Direction::West => self.cells[pos].open_west(),
            Direction::South => self.cells[next].open_north(),
            Direction::East => self.cells[next].open_west(),
        }

        true
    }

    /// Number of open walls inside the grid. A perfect maze has exactly `cell_count() - 1`.
    pub fn open_wall_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.open_count()).sum()
    }

    /// Returns the direction leading from `cell` to `cell2`, if they are adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<Direction> {
        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (-1, 0) => Some(Direction::West),
            (1, 0) => Some(Direction::East),
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            _ => None,
        }
    }
}
