use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use seabattle::{Board, Cell, ShotResult, BOARD_SIZE, TOTAL_SHIP_CELLS};

fn ship_cell_count(board: &Board) -> usize {
    let mut count = 0;
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if board.get(x, y) == Cell::Ship {
                count += 1;
            }
        }
    }
    count
}

fn all_cells() -> Vec<(u8, u8)> {
    (0..BOARD_SIZE)
        .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_conserves_fleet(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::generate_random(&mut rng);
        prop_assert_eq!(ship_cell_count(&board), TOTAL_SHIP_CELLS as usize);
        prop_assert_eq!(board.remaining_weight(), TOTAL_SHIP_CELLS);
        prop_assert!(!board.is_destroyed());
    }

    #[test]
    fn generation_keeps_ships_apart(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::generate_random(&mut rng);
        // diagonal neighbors of a segment always belong to the same ship,
        // and ships are straight lines, so none may exist at all
        for y in 0..BOARD_SIZE as i8 {
            for x in 0..BOARD_SIZE as i8 {
                if board.get(x as u8, y as u8) != Cell::Ship {
                    continue;
                }
                for (dx, dy) in [(-1i8, -1i8), (1, -1), (-1, 1), (1, 1)] {
                    let (nx, ny) = (x + dx, y + dy);
                    if (0..BOARD_SIZE as i8).contains(&nx) && (0..BOARD_SIZE as i8).contains(&ny) {
                        prop_assert_ne!(board.get(nx as u8, ny as u8), Cell::Ship);
                    }
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic(seed in any::<u64>()) {
        let mut rng1 = SmallRng::seed_from_u64(seed);
        let mut rng2 = SmallRng::seed_from_u64(seed);
        prop_assert_eq!(
            Board::generate_random(&mut rng1),
            Board::generate_random(&mut rng2)
        );
    }

    #[test]
    fn marks_are_idempotent(x in 0..BOARD_SIZE, y in 0..BOARD_SIZE, op in 0..3u8) {
        let mut once = Board::unknown();
        match op {
            0 => once.mark_miss(x, y),
            1 => once.mark_hit(x, y),
            _ => once.mark_kill(x, y),
        }
        let mut twice = once.clone();
        match op {
            0 => twice.mark_miss(x, y),
            1 => twice.mark_hit(x, y),
            _ => twice.mark_kill(x, y),
        }
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn shooting_never_increases_weight(seed in any::<u64>(), shots in proptest::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..128)) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::generate_random(&mut rng);
        for (x, y) in shots {
            let before = board.remaining_weight();
            let was_ship = board.get(x, y) == Cell::Ship;
            let res = board.shoot(x, y);
            match res {
                ShotResult::Miss => {
                    prop_assert!(!was_ship);
                    prop_assert_eq!(board.remaining_weight(), before);
                }
                ShotResult::Hit | ShotResult::Kill => {
                    prop_assert!(was_ship);
                    prop_assert_eq!(board.remaining_weight(), before - 1);
                    prop_assert_eq!(board.get(x, y), Cell::Killed);
                }
            }
        }
    }

    #[test]
    fn full_shootout_sinks_ten_ships(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::generate_random(&mut rng);
        let mut order = all_cells();
        order.shuffle(&mut rng);

        let mut kills = 0u32;
        let mut hits = 0u32;
        for (x, y) in order {
            match board.shoot(x, y) {
                ShotResult::Kill => kills += 1,
                ShotResult::Hit => hits += 1,
                ShotResult::Miss => {}
            }
        }
        prop_assert_eq!(kills, 10);
        prop_assert_eq!(hits + kills, TOTAL_SHIP_CELLS as u32);
        prop_assert!(board.is_destroyed());
    }

    #[test]
    fn honest_reports_rebuild_the_opponent_board(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut own = Board::generate_random(&mut rng);
        let pristine = own.clone();
        let mut tracking = Board::unknown();

        let mut order = all_cells();
        order.shuffle(&mut rng);
        for (x, y) in order {
            match own.shoot(x, y) {
                ShotResult::Miss => tracking.mark_miss(x, y),
                ShotResult::Hit => tracking.mark_hit(x, y),
                ShotResult::Kill => tracking.mark_kill(x, y),
            }
        }

        prop_assert!(tracking.is_destroyed());
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                match tracking.get(x, y) {
                    // every deduction must agree with the true layout
                    Cell::Killed => prop_assert_eq!(pristine.get(x, y), Cell::Ship),
                    Cell::Empty => prop_assert_ne!(pristine.get(x, y), Cell::Ship),
                    Cell::Ship => prop_assert!(false, "tracking board may not hold ship cells"),
                    Cell::Unknown => {}
                }
            }
        }
    }
}
