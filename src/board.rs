//! Game board state: randomized fleet placement, shot resolution and the
//! deduced opponent view.

use core::fmt;
use std::collections::BTreeSet;

use rand::Rng;

use crate::common::ShotResult;
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, TOTAL_SHIP_CELLS};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// No information yet. Initial state of every tracking-board cell.
    Unknown,
    /// Confirmed to hold no ship segment.
    Empty,
    /// An intact ship segment. Only ever present on a player's own board.
    Ship,
    /// A destroyed ship segment.
    Killed,
}

impl Cell {
    /// Single-character rendering of the cell.
    pub fn to_char(self) -> char {
        match self {
            Cell::Unknown => '?',
            Cell::Empty => '.',
            Cell::Ship => 'o',
            Cell::Killed => 'x',
        }
    }
}

/// The four axis direction vectors used by the sunk scan, the perimeter walk
/// and random placement.
const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// One player's grid plus the count of not-yet-destroyed ship segments.
///
/// The same structure serves two roles: the *own board* carries the true
/// fleet layout and resolves incoming shots, while the *tracking board*
/// starts all-[`Cell::Unknown`] and accumulates facts deduced from the shot
/// results the opponent reports.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE as usize * BOARD_SIZE as usize],
    weight: u8,
}

impl Board {
    /// An all-unknown tracking board.
    pub fn unknown() -> Self {
        Self::filled(Cell::Unknown)
    }

    fn filled(cell: Cell) -> Self {
        Board {
            cells: [cell; BOARD_SIZE as usize * BOARD_SIZE as usize],
            weight: TOTAL_SHIP_CELLS,
        }
    }

    /// Generate a board with the full fleet placed at random.
    ///
    /// Ships never touch, not even diagonally. Placement is attempted ship
    /// by ship with a bounded number of tries each; a dead end throws the
    /// whole layout away and starts over, so the returned board is always
    /// valid. Deterministic for a seeded `rng`.
    pub fn generate_random<R: Rng>(rng: &mut R) -> Self {
        loop {
            if let Some(board) = Self::try_generate(rng) {
                return board;
            }
        }
    }

    fn try_generate<R: Rng>(rng: &mut R) -> Option<Self> {
        let mut board = Self::filled(Cell::Empty);
        let mut available: BTreeSet<(u8, u8)> = (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
            .collect();

        for &length in FLEET.iter() {
            let mut attempt = 0;
            let (x, y, dx, dy) = loop {
                if attempt >= MAX_PLACEMENT_ATTEMPTS || available.is_empty() {
                    return None;
                }
                attempt += 1;

                let index = rng.random_range(0..available.len());
                let &(x, y) = available.iter().nth(index)?;
                let (dx, dy) = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];
                if ship_fits(&available, x, y, dx, dy, length) {
                    break (x, y, dx, dy);
                }
            };

            for i in 0..length {
                let (cx, cy) = step(x, y, dx, dy, i)?;
                board.set(cx, cy, Cell::Ship);
                // Reserving the full Chebyshev-1 neighborhood keeps every
                // later ship from touching this one, diagonals included.
                for &(ox, oy) in NEIGHBORHOOD.iter() {
                    if let Some(n) = step(cx, cy, ox, oy, 1) {
                        available.remove(&n);
                    }
                }
                available.remove(&(cx, cy));
            }
        }

        Some(board)
    }

    /// Resolve a shot against this board's own fleet.
    ///
    /// Anything other than an intact segment is an idempotent miss, so
    /// re-shooting a killed or empty cell changes nothing.
    pub fn shoot(&mut self, x: u8, y: u8) -> ShotResult {
        if self.get(x, y) != Cell::Ship {
            return ShotResult::Miss;
        }

        self.set(x, y, Cell::Killed);
        self.weight -= 1;

        if self.is_killed(x, y) {
            ShotResult::Kill
        } else {
            ShotResult::Hit
        }
    }

    /// Record a reported miss on the tracking board.
    pub fn mark_miss(&mut self, x: u8, y: u8) {
        if self.get(x, y) != Cell::Unknown {
            return;
        }
        self.set(x, y, Cell::Empty);
    }

    /// Record a reported hit on the tracking board.
    pub fn mark_hit(&mut self, x: u8, y: u8) {
        if self.get(x, y) != Cell::Unknown {
            return;
        }
        self.weight = self.weight.saturating_sub(1);
        self.set(x, y, Cell::Killed);
    }

    /// Record a reported kill on the tracking board and deduce the empty
    /// perimeter of the sunk ship.
    ///
    /// The ship's length and orientation were never observed, so the walk
    /// recovers them from the cells this board has already marked killed:
    /// it extends from `(x, y)` along each axis while the straight-ahead
    /// cell is killed, clearing the flanking cells and the first cell past
    /// the end in every direction.
    pub fn mark_kill(&mut self, x: u8, y: u8) {
        if self.get(x, y) != Cell::Unknown {
            return;
        }
        self.mark_hit(x, y);
        for &(dx, dy) in DIRECTIONS.iter() {
            self.mark_kill_in_direction(x, y, dx, dy);
        }
    }

    fn mark_kill_in_direction(&mut self, x: u8, y: u8, dx: i8, dy: i8) {
        let (mut cx, mut cy) = (x as i8, y as i8);
        while in_bounds(cx, cy) {
            // Swapping the direction's components yields the two cells
            // flanking the walk perpendicular to its axis.
            self.mark_empty_if_unknown(cx + dy, cy + dx);
            self.mark_empty_if_unknown(cx - dy, cy - dx);
            self.mark_empty_if_unknown(cx, cy);
            if self.get(cx as u8, cy as u8) != Cell::Killed {
                return;
            }
            cx += dx;
            cy += dy;
        }
    }

    fn mark_empty_if_unknown(&mut self, x: i8, y: i8) {
        if !in_bounds(x, y) {
            return;
        }
        if self.get(x as u8, y as u8) != Cell::Unknown {
            return;
        }
        self.set(x as u8, y as u8, Cell::Empty);
    }

    fn is_killed(&self, x: u8, y: u8) -> bool {
        DIRECTIONS
            .iter()
            .all(|&(dx, dy)| self.killed_in_direction(x, y, dx, dy))
    }

    /// A direction counts as satisfied once the scan leaves the grid or
    /// reaches a confirmed-empty cell; an intact or unknown cell means the
    /// ship still has segments that way.
    fn killed_in_direction(&self, x: u8, y: u8, dx: i8, dy: i8) -> bool {
        let (mut cx, mut cy) = (x as i8, y as i8);
        while in_bounds(cx, cy) {
            match self.get(cx as u8, cy as u8) {
                Cell::Empty => return true,
                Cell::Killed => {}
                Cell::Ship | Cell::Unknown => return false,
            }
            cx += dx;
            cy += dy;
        }
        true
    }

    /// `true` once every ship segment has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.weight == 0
    }

    /// Count of ship segments not yet destroyed.
    pub fn remaining_weight(&self) -> u8 {
        self.weight
    }

    /// State of the cell at (`x`, `y`). Coordinates must be in range.
    pub fn get(&self, x: u8, y: u8) -> Cell {
        self.cells[Self::index(x, y)]
    }

    fn set(&mut self, x: u8, y: u8, cell: Cell) {
        self.cells[Self::index(x, y)] = cell;
    }

    fn index(x: u8, y: u8) -> usize {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        y as usize * BOARD_SIZE as usize + x as usize
    }

    /// Space-separated characters of row `y`, left to right.
    pub fn render_row(&self, y: u8) -> String {
        let mut out = String::with_capacity(BOARD_SIZE as usize * 2 - 1);
        for x in 0..BOARD_SIZE {
            if x > 0 {
                out.push(' ');
            }
            out.push(self.get(x, y).to_char());
        }
        out
    }
}

/// Offsets of the eight cells surrounding a cell.
const NEIGHBORHOOD: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn in_bounds(x: i8, y: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&x) && (0..BOARD_SIZE as i8).contains(&y)
}

/// The `i`-th cell from (`x`, `y`) along (`dx`, `dy`), if it is on the grid.
fn step(x: u8, y: u8, dx: i8, dy: i8, i: u8) -> Option<(u8, u8)> {
    let nx = x as i16 + dx as i16 * i as i16;
    let ny = y as i16 + dy as i16 * i as i16;
    if (0..BOARD_SIZE as i16).contains(&nx) && (0..BOARD_SIZE as i16).contains(&ny) {
        Some((nx as u8, ny as u8))
    } else {
        None
    }
}

fn ship_fits(available: &BTreeSet<(u8, u8)>, x: u8, y: u8, dx: i8, dy: i8, length: u8) -> bool {
    (0..length).all(|i| match step(x, y, dx, dy, i) {
        Some(cell) => available.contains(&cell),
        None => false,
    })
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ weight: {}", self.weight)?;
        for y in 0..BOARD_SIZE {
            writeln!(f, "  {}", self.render_row(y))?;
        }
        write!(f, "}}")
    }
}
