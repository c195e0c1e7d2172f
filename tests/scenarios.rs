use cellscape::{Builder, Color, Direction, Error, IdMode};

#[derive(Clone, Default, PartialEq, Debug)]
struct LifeState {
    alive: bool,
}

/// B3/S23 applied through the cell context.
fn life_rule(cell: &mut cellscape::Cell<LifeState>) -> LifeState {
    let live = Direction::ALL
        .into_iter()
        .filter_map(|dir| cell.neighbor(dir))
        .filter(|n| n.alive)
        .count();
    LifeState {
        alive: matches!((cell.state().alive, live), (true, 2 | 3) | (false, 3)),
    }
}

#[test]
fn addressing_forms_agree_everywhere() {
    let mut grid = Builder::new().size(5, 4).build::<u32>().unwrap();
    grid.construct(|cell| (cell.x() + cell.y() * 5) as u32);

    grid.step(|cell| {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            assert_eq!(
                cell.neighbor(dir),
                cell.neighbor_at(dx, dy).unwrap(),
                "cell ({}, {}), {:?}",
                cell.x(),
                cell.y(),
                dir
            );
        }
        *cell.state()
    });
}

#[test]
fn neighbors_absent_exactly_past_the_edge() {
    let mut grid = Builder::new().size(4, 4).build::<u8>().unwrap();
    grid.construct(|_| 0);

    grid.step(|cell| {
        let (x, y) = (cell.x() as i32, cell.y() as i32);
        let interior = x > 0 && x < 3 && y > 0 && y < 3;
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let inside = (0..4).contains(&(x + dx)) && (0..4).contains(&(y + dy));
            assert_eq!(cell.neighbor(dir).is_some(), inside);
        }
        if interior {
            assert!(Direction::ALL.iter().all(|&d| cell.neighbor(d).is_some()));
        }
        0
    });
}

#[test]
fn bad_neighbor_offsets_are_rejected() {
    let mut grid = Builder::new().size(2, 2).build::<u8>().unwrap();
    grid.construct(|cell| {
        assert_eq!(
            cell.neighbor_at(0, 0).unwrap_err(),
            Error::BadNeighborOffset { dx: 0, dy: 0 }
        );
        assert_eq!(
            cell.neighbor_at(2, 1).unwrap_err(),
            Error::BadNeighborOffset { dx: 2, dy: 1 }
        );
        0
    });
}

#[test]
fn scan_reads_only_the_previous_generation() {
    // Every cell starts as its own index; the transition returns index + 100.
    // While scanning, already-visited neighbors (e.g. the left one) must still
    // read as their previous-generation value.
    let mut grid = Builder::new().size(4, 3).build::<usize>().unwrap();
    grid.construct(|cell| cell.id());

    grid.step(|cell| {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let nx = cell.x() as i32 + dx;
            let ny = cell.y() as i32 + dy;
            if let Some(&n) = cell.neighbor(dir) {
                assert_eq!(n, (nx + ny * 4) as usize);
            }
        }
        cell.id() + 100
    });

    grid.step(|cell| {
        assert_eq!(*cell.state(), cell.id() + 100);
        for dir in Direction::ALL {
            if let Some(&n) = cell.neighbor(dir) {
                assert!(n >= 100, "stale pre-step value leaked into generation 1");
            }
        }
        *cell.state()
    });
}

#[test]
fn repeated_state_reads_are_identical() {
    let mut grid = Builder::new().size(3, 3).build::<u32>().unwrap();
    grid.construct(|cell| cell.id() as u32 * 7);
    grid.step(|cell| {
        assert_eq!(cell.state(), cell.state());
        assert_eq!(cell.clone_state(), *cell.state());
        *cell.state()
    });
}

#[test]
fn buffer_roles_alternate_every_tick() {
    let mut grid = Builder::new().size(2, 2).build::<u8>().unwrap();
    grid.construct(|_| 0);
    assert_eq!(grid.current_buffer(), 0);
    assert_eq!(grid.generation(), 0);

    for tick in 1..=5 {
        let before = grid.current_buffer();
        grid.step(|cell| *cell.state());
        assert_ne!(grid.current_buffer(), before);
        assert_eq!(grid.generation(), tick);
    }
}

#[test]
fn lone_live_cell_dies() {
    // Scenario: 3x3 grid, only the center constructed alive. One tick kills
    // everything (the center is isolated, its neighbors see one live cell).
    let mut grid = Builder::new().size(3, 3).build::<LifeState>().unwrap();
    grid.construct(|cell| LifeState {
        alive: cell.x() == 1 && cell.y() == 1,
    });
    assert!(grid.get(1, 1).alive);

    grid.step(life_rule);

    for y in 0..3 {
        for x in 0..3 {
            assert!(!grid.get(x, y).alive, "cell ({x}, {y}) should be dead");
        }
    }
}

#[test]
fn single_cell_grid_has_no_neighbors_ever() {
    let mut grid = Builder::new().size(1, 1).build::<u8>().unwrap();
    grid.construct(|_| 1);
    for _ in 0..3 {
        grid.step(|cell| {
            for k in 0..8 {
                let dir = Direction::from_index(k).unwrap();
                assert_eq!(cell.neighbor(dir), None);
            }
            *cell.state()
        });
    }
}

#[test]
fn blinker_oscillates() {
    let mut grid = Builder::new().size(5, 5).build::<LifeState>().unwrap();
    // horizontal blinker in the middle row
    grid.construct(|cell| LifeState {
        alive: cell.y() == 2 && (1..=3).contains(&cell.x()),
    });

    grid.step(life_rule);
    for y in 1..=3 {
        assert!(grid.get(2, y).alive, "vertical phase expected at (2, {y})");
    }
    assert!(!grid.get(1, 2).alive);
    assert!(!grid.get(3, 2).alive);

    grid.step(life_rule);
    for x in 1..=3 {
        assert!(grid.get(x, 2).alive, "horizontal phase expected at ({x}, 2)");
    }
}

#[test]
fn background_fills_exactly_one_cell_block() {
    // Scenario: 2x2 cells at cell_size 2; painting cell (0, 0) red touches
    // the 2x2 pixel block at the raster origin and nothing else.
    let mut grid = Builder::new()
        .size(2, 2)
        .cell_size(2)
        .build::<u8>()
        .unwrap();
    grid.construct(|cell| {
        if cell.x() == 0 && cell.y() == 0 {
            cell.background(Color::rgb(255, 0, 0));
        }
        0
    });

    let raster = grid.raster();
    assert_eq!(raster.width(), 4);
    assert_eq!(raster.height(), 4);
    for y in 0..4 {
        for x in 0..4 {
            let expected = if x < 2 && y < 2 {
                [255, 0, 0, 255]
            } else {
                [0, 0, 0, 0]
            };
            assert_eq!(raster.pixel(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn point_draws_at_cell_local_offset() {
    let mut grid = Builder::new()
        .size(2, 1)
        .cell_size(3)
        .build::<u8>()
        .unwrap();
    grid.construct(|cell| {
        if cell.x() == 1 {
            cell.point(1, 2, Color::rgb(0, 200, 0)).unwrap();
            assert_eq!(
                cell.point(3, 0, Color::BLACK).unwrap_err(),
                Error::PointOutOfCell {
                    x: 3,
                    y: 0,
                    cell_size: 3
                }
            );
        }
        0
    });
    assert_eq!(grid.raster().pixel(4, 2), [0, 200, 0, 255]);
    assert_eq!(grid.raster().pixel(4, 1), [0, 0, 0, 0]);
}

#[test]
fn raster_persists_across_ticks() {
    let mut grid = Builder::new().size(1, 1).build::<u8>().unwrap();
    grid.construct(|cell| {
        cell.background(Color::WHITE);
        0
    });
    // a tick that draws nothing leaves the raster untouched
    grid.step(|cell| *cell.state());
    assert_eq!(grid.raster().pixel(0, 0), [255; 4]);
}

#[test]
fn ordered_ids_are_the_scan_order() {
    let grid = Builder::new().size(4, 3).build::<u8>().unwrap();
    for i in 0..12 {
        assert_eq!(grid.cell_id(i), i);
    }
}

#[test]
fn shuffled_ids_are_a_fixed_permutation() {
    let grid = Builder::new()
        .size(6, 5)
        .id_mode(IdMode::Shuffled)
        .seed(42)
        .build::<u8>()
        .unwrap();

    let mut seen: Vec<usize> = (0..30).map(|i| grid.cell_id(i)).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..30).collect::<Vec<_>>());

    // same seed, same permutation
    let again = Builder::new()
        .size(6, 5)
        .id_mode(IdMode::Shuffled)
        .seed(42)
        .build::<u8>()
        .unwrap();
    assert!((0..30).all(|i| grid.cell_id(i) == again.cell_id(i)));
}

#[test]
fn builder_rejects_degenerate_grids() {
    assert_eq!(
        Builder::new().size(0, 5).build::<u8>().err().unwrap(),
        Error::EmptyGrid { width: 0, height: 5 }
    );
    assert_eq!(
        Builder::new().size(3, 0).build::<u8>().err().unwrap(),
        Error::EmptyGrid { width: 3, height: 0 }
    );
    assert_eq!(
        Builder::new().cell_size(0).build::<u8>().err().unwrap(),
        Error::ZeroCellSize
    );
}
