use rand::RngCore as _;

use crate::{
    dims::Dims,
    gameboard::{Direction, DirectionSet, MazeBoard},
};

use super::{union_find::UnionFind, Random, SMOOTHNESS_SCALE};

/// Position of the walk together with the directions already attempted from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WalkState {
    pos: Dims,
    tried: DirectionSet,
}

impl WalkState {
    fn new(pos: Dims) -> Self {
        Self {
            pos,
            tried: DirectionSet::EMPTY,
        }
    }
}

/// Randomized backtracking walk carving a spanning tree into a closed board.
///
/// The walk picks a random untried direction at every step and opens the wall only if the cell
/// behind it belongs to a different component, so no cycle can ever appear. Exhausted cells are
/// left by popping the explicit stack, which holds every cell the walk came through together
/// with its tried directions.
///
/// With `smoothness` above zero, the walk prefers to repeat the previously drawn direction,
/// which makes the corridors straighter.
#[derive(Debug, Clone, Copy)]
pub struct Backtracker {
    smoothness: u32,
}

impl Backtracker {
    /// `smoothness` must be in `0..32`, it is validated by [`super::Generator`].
    pub fn new(smoothness: u8) -> Self {
        Self {
            smoothness: smoothness as u32,
        }
    }

    /// Carves passages into `board`, returns how many walls were opened.
    ///
    /// The board is expected to be fully closed, otherwise the result is not a perfect maze.
    pub fn carve(&self, board: &mut MazeBoard, rng: &mut Random) -> usize {
        let size = board.size();
        let mut sets = UnionFind::new(board.cell_count());
        let mut stack: Vec<WalkState> = Vec::with_capacity(board.cell_count());

        let start = Dims(
            (rng.next_u32() % size.0 as u32) as i32,
            (rng.next_u32() % size.1 as u32) as i32,
        );
        log::trace!("walk starts at {:?}", start);

        let mut state = WalkState::new(start);
        // Nothing to repeat before the first draw, so the first pick is never biased.
        let mut last_drawn: Option<Direction> = None;
        let mut carved = 0;

        loop {
            if state.tried.is_full() {
                match stack.pop() {
                    Some(prev) => {
                        state = prev;
                        continue;
                    }
                    None => break,
                }
            }

            let dir = self.pick_direction(rng, state.tried, &mut last_drawn);
            state.tried.insert(dir);

            let Some(next) = board.neighbor(state.pos, dir) else {
                continue;
            };

            if !sets.union(state.pos.linear_index(size), next.linear_index(size)) {
                continue;
            }

            board.remove_wall(state.pos, dir);
            carved += 1;

            stack.push(state);
            state = WalkState::new(next);
        }

        carved
    }

    /// Draws directions until one not in `tried` comes up.
    ///
    /// `last_drawn` is the previous candidate of the whole walk, it survives both moves and
    /// backtracking.
    fn pick_direction(
        &self,
        rng: &mut Random,
        tried: DirectionSet,
        last_drawn: &mut Option<Direction>,
    ) -> Direction {
        debug_assert!(!tried.is_full());

        loop {
            let mut candidate = Direction::ALL[(rng.next_u32() % 4) as usize];

            let roll = rng.next_u32() % SMOOTHNESS_SCALE;
            if roll < self.smoothness {
                if let Some(prev) = *last_drawn {
                    if !tried.contains(prev) {
                        candidate = prev;
                    }
                }
            }

            *last_drawn = Some(candidate);
            if !tried.contains(candidate) {
                return candidate;
            }
        }
    }
}
