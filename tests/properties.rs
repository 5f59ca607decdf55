use mazing::{
    algorithms::generate,
    dims::Dims,
    gameboard::{Direction, MazeBoard},
    solver::{flood, solve},
};

const SIZES: [Dims; 7] = [
    Dims(1, 1),
    Dims(1, 2),
    Dims(2, 1),
    Dims(3, 3),
    Dims(7, 4),
    Dims(4, 13),
    Dims(25, 25),
];

fn cases() -> impl Iterator<Item = (Dims, u64, u8)> {
    SIZES.into_iter().flat_map(|size| {
        [0u64, 1, 42, u64::MAX]
            .into_iter()
            .flat_map(move |seed| [0u8, 7, 16, 31].into_iter().map(move |s| (size, seed, s)))
    })
}

#[test]
fn every_maze_is_a_spanning_tree() {
    for (size, seed, smoothness) in cases() {
        let board = generate(size, seed, smoothness).unwrap();
        let cells = board.cell_count();

        assert_eq!(board.open_wall_count(), cells - 1, "{size:?} {seed} {smoothness}");

        let distances = flood(&board, Dims(0, 0)).unwrap();
        assert_eq!(distances.reached_count(), cells, "{size:?} {seed} {smoothness}");
    }
}

#[test]
fn border_is_never_open() {
    for (size, seed, smoothness) in cases() {
        let board = generate(size, seed, smoothness).unwrap();
        for y in 0..size.1 {
            let cell = board.cell(Dims(0, y)).unwrap();
            assert!(!cell.is_west_open());
            assert!(!board.is_east_open(size.0 - 1, y));
        }
        for x in 0..size.0 {
            let cell = board.cell(Dims(x, 0)).unwrap();
            assert!(!cell.is_north_open());
            assert!(!board.is_south_open(x, size.1 - 1));
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for (size, seed, smoothness) in cases() {
        assert_eq!(
            generate(size, seed, smoothness).unwrap().to_raw(),
            generate(size, seed, smoothness).unwrap().to_raw()
        );
    }
}

#[test]
fn corner_to_corner_paths_are_valid() {
    for (size, seed, smoothness) in cases() {
        let board = generate(size, seed, smoothness).unwrap();
        let (source, dest) = (Dims(0, 0), Dims(size.0 - 1, size.1 - 1));

        let path = solve(&board, source, dest).unwrap().unwrap();
        assert_eq!(path, solve(&board, source, dest).unwrap().unwrap());
        assert_eq!(path.destination(), dest);
        assert_eq!(path.source(), source);

        let distances = flood(&board, source).unwrap();
        assert_eq!(Some(path.len() - 1), distances.get(dest));

        for pair in path.cells().windows(2) {
            let dir = MazeBoard::which_wall_between(pair[0], pair[1]).unwrap();
            assert!(board.is_open(pair[0], dir));
            assert!(board.is_open(pair[1], dir.reverse()));
        }

        // In a tree the path is simple.
        let mut seen = path.cells().to_vec();
        seen.sort_by_key(|d| (d.1, d.0));
        seen.dedup();
        assert_eq!(seen.len(), path.len());
    }
}

#[test]
fn smoothness_makes_corridors_straighter() {
    fn straight_runs(board: &MazeBoard) -> usize {
        Dims::iter_fill(Dims::ZERO, board.size())
            .filter(|&pos| {
                (board.is_open(pos, Direction::West) && board.is_open(pos, Direction::East))
                    || (board.is_open(pos, Direction::North)
                        && board.is_open(pos, Direction::South))
            })
            .count()
    }

    let size = Dims(60, 60);
    let (mut rough, mut smooth) = (0, 0);
    for seed in 0..4 {
        rough += straight_runs(&generate(size, seed, 0).unwrap());
        smooth += straight_runs(&generate(size, seed, 28).unwrap());
    }

    assert!(smooth > rough, "smooth {smooth}, rough {rough}");
}

#[test]
fn board_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MazeBoard>();

    let board = generate(Dims(20, 20), 11, 3).unwrap();
    let paths: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let board = &board;
                scope.spawn(move || solve(board, Dims(i, 0), Dims(19, 19 - i)).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, path) in paths.into_iter().enumerate() {
        let i = i as i32;
        assert_eq!(path, solve(&board, Dims(i, 0), Dims(19, 19 - i)).unwrap());
    }
}
