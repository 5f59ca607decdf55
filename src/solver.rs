use thiserror::Error;

use crate::{array::Array2D, dims::Dims, gameboard::MazeBoard};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("the maze has not been generated yet")]
    NotGenerated,
    #[error("position {0:?} is outside of the maze")]
    OutOfBounds(Dims),
    #[error("no step back found at {at:?}, the maze was modified or is corrupted")]
    InternalInconsistency { at: Dims },
}

/// Number of steps from the source to every cell the flood fill reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    source: Dims,
    steps: Array2D<Option<usize>>,
}

impl DistanceMap {
    fn new(size: Dims, source: Dims) -> Self {
        let mut steps = Array2D::new(None, size.0 as usize, size.1 as usize);
        steps[source] = Some(0);

        Self { source, steps }
    }

    pub fn source(&self) -> Dims {
        self.source
    }

    /// `None` for unreached cells and positions outside of the maze.
    pub fn get(&self, pos: Dims) -> Option<usize> {
        self.steps.get(pos).copied().flatten()
    }

    pub fn is_reached(&self, pos: Dims) -> bool {
        self.get(pos).is_some()
    }

    pub fn reached_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_some()).count()
    }

    /// The largest distance and one of the cells where it occurs, the first one in row-major
    /// order.
    pub fn farthest(&self) -> (Dims, usize) {
        self.steps
            .iter_pos()
            .filter_map(|pos| self.get(pos).map(|d| (pos, d)))
            .fold((self.source, 0), |best, cur| if cur.1 > best.1 { cur } else { best })
    }
}

/// Shortest path through the maze, stored from the destination back to the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<Dims>);

impl Path {
    /// Cells from the destination to the source, both included.
    pub fn cells(&self) -> &[Dims] {
        &self.0
    }

    /// Number of cells, never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    pub fn destination(&self) -> Dims {
        self.0[0]
    }

    pub fn source(&self) -> Dims {
        self.0[self.0.len() - 1]
    }

    /// Cells in the travel order, from the source to the destination.
    pub fn forward(&self) -> impl Iterator<Item = Dims> + '_ {
        self.0.iter().rev().copied()
    }

    pub fn into_forward(mut self) -> Vec<Dims> {
        self.0.reverse();
        self.0
    }
}

impl From<Path> for Vec<Dims> {
    fn from(path: Path) -> Self {
        path.0
    }
}

/// Finds the shortest path from `source` to `dest`.
///
/// Returns `Ok(None)` when `dest` can't be reached, which never happens in a generated maze.
/// When multiple shortest paths exist, the one stepping back north, west, south, east (in this
/// order of preference) from the destination is returned.
pub fn solve(board: &MazeBoard, source: Dims, dest: Dims) -> Result<Option<Path>, SolveError> {
    check_bounds(board, source)?;
    check_bounds(board, dest)?;

    if source == dest {
        return Ok(Some(Path(vec![source])));
    }

    let distances = spread(board, source, Some(dest));
    if !distances.is_reached(dest) {
        log::debug!("{:?} is not reachable from {:?}", dest, source);
        return Ok(None);
    }

    let path = trace_back(board, &distances, dest)?;
    log::debug!(
        "solved {:?} -> {:?} in {} steps",
        source,
        dest,
        path.steps()
    );

    Ok(Some(path))
}

/// Distances from `source` to every reachable cell.
pub fn flood(board: &MazeBoard, source: Dims) -> Result<DistanceMap, SolveError> {
    check_bounds(board, source)?;
    Ok(spread(board, source, None))
}

fn check_bounds(board: &MazeBoard, pos: Dims) -> Result<(), SolveError> {
    if board.is_in_bounds(pos) {
        Ok(())
    } else {
        Err(SolveError::OutOfBounds(pos))
    }
}

/// Breadth first flood fill, one frontier layer at a time.
///
/// Stops after the layer in which `dest` was found, or when the frontier runs dry.
fn spread(board: &MazeBoard, source: Dims, dest: Option<Dims>) -> DistanceMap {
    let mut distances = DistanceMap::new(board.size(), source);
    let mut frontier = vec![source];
    let mut step = 0;
    let mut reached = false;

    while !reached && !frontier.is_empty() {
        step += 1;
        let mut next_frontier = Vec::new();

        for &cell in &frontier {
            for next in board.open_neighbors(cell) {
                if distances.steps[next].is_some() {
                    continue;
                }

                distances.steps[next] = Some(step);
                next_frontier.push(next);
                reached |= Some(next) == dest;
            }
        }

        frontier = next_frontier;
    }

    distances
}

/// Walks from `dest` back to the source of `distances`, always to a neighbor one step closer.
pub(crate) fn trace_back(
    board: &MazeBoard,
    distances: &DistanceMap,
    dest: Dims,
) -> Result<Path, SolveError> {
    let source = distances.source();
    let mut path = vec![dest];
    let mut current = dest;

    while current != source {
        let prev = distances
            .get(current)
            .and_then(|step| step.checked_sub(1))
            .and_then(|wanted| {
                board
                    .open_neighbors(current)
                    .find(|&n| distances.get(n) == Some(wanted))
            });

        let Some(prev) = prev else {
            log::warn!(
                "path reconstruction got stuck at {:?} on the way to {:?}",
                current,
                source
            );
            return Err(SolveError::InternalInconsistency { at: current });
        };

        path.push(prev);
        current = prev;
    }

    Ok(Path(path))
}
