use std::ops::Index;

use arrayvec::ArrayVec;

mod error;
mod fmt;
mod heuristic;
mod parity;
mod parse;
pub mod solve;

pub use error::{Error, Result};
pub use heuristic::manhattan;
pub use parity::{count_inversions, is_solvable};
pub use solve::{solve, Solution, SolverConfig, Step, DEFAULT_MAX_DEPTH};

/// Largest supported side length. Tiles are stored as `u8`.
pub const MAX_SIDE: usize = 15;

/// Tile value of the movable empty cell.
pub const BLANK: u8 = 0;

/// An immutable `side × side` sliding-tile configuration, stored row-major.
///
/// Construction checks that the grid holds every value of `0..side²` exactly
/// once, `0` being the blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board {
    side: u8,
    tiles: Box<[u8]>,
}

impl Index<(usize, usize)> for Board {
    type Output = u8;
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.tiles[row * self.side() + col]
    }
}

impl Board {
    pub fn new<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let side = rows.len();
        let mut tiles = Vec::with_capacity(side * side);
        for (row, i) in rows.iter().zip(1..) {
            let row = row.as_ref();
            if row.len() != side {
                return Err(Error::InvariantViolation(format!(
                    "row {i} has {} tiles, expecting {side}",
                    row.len()
                )));
            }
            tiles.extend_from_slice(row);
        }
        Self::from_tiles(side, tiles)
    }

    pub fn from_tiles(side: usize, tiles: Vec<u8>) -> Result<Self> {
        if !(2..=MAX_SIDE).contains(&side) {
            return Err(Error::InvariantViolation(format!(
                "side {side} is outside the supported range 2..={MAX_SIDE}"
            )));
        }
        if tiles.len() != side * side {
            return Err(Error::InvariantViolation(format!(
                "{} tiles do not fill a {side}x{side} grid",
                tiles.len()
            )));
        }

        let mut seen = vec![false; tiles.len()];
        for &tile in &tiles {
            match seen.get_mut(tile as usize) {
                None => {
                    return Err(Error::InvariantViolation(format!(
                        "tile {tile} is out of range for a {side}x{side} grid"
                    )))
                }
                Some(true) => {
                    return Err(Error::InvariantViolation(format!(
                        "tile {tile} appears more than once"
                    )))
                }
                Some(slot) => *slot = true,
            }
        }

        Ok(Self {
            side: side as u8,
            tiles: tiles.into(),
        })
    }

    /// The goal configuration: `1, 2, …, side²−1` followed by the blank.
    ///
    /// # Panics
    /// If `side` is outside `2..=MAX_SIDE`.
    pub fn solved(side: usize) -> Self {
        assert!(
            (2..=MAX_SIDE).contains(&side),
            "unsupported board side {side}"
        );
        let len = side * side;
        let tiles = (1..len as u8).chain([BLANK]).collect();
        Self {
            side: side as u8,
            tiles,
        }
    }

    pub fn side(&self) -> usize {
        self.side as usize
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.tiles.chunks(self.side())
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = ((usize, usize), u8)> + '_ {
        let side = self.side();
        self.tiles
            .iter()
            .enumerate()
            .map(move |(idx, &tile)| ((idx / side, idx % side), tile))
    }

    /// Row-major tile bytes. Two boards share a key iff their grids match.
    pub fn canonical_key(&self) -> &[u8] {
        &self.tiles
    }

    pub fn locate_blank(&self) -> Result<(usize, usize)> {
        self.cells()
            .find_map(|(pos, tile)| (tile == BLANK).then_some(pos))
            .ok_or_else(|| Error::InvariantViolation("board has no blank tile".into()))
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles
            .iter()
            .enumerate()
            .all(|(idx, &tile)| tile as usize == if idx == last { 0 } else { idx + 1 })
    }

    fn sibling_pos(&self, (row, col): (usize, usize), dir: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = dir.offset();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        if self.side() <= row || self.side() <= col {
            return None;
        }
        Some((row, col))
    }

    /// Directions the blank can move in, in the fixed order up, down, left, right.
    pub fn legal_moves(&self) -> ArrayVec<Direction, 4> {
        let Ok(blank) = self.locate_blank() else {
            return ArrayVec::new();
        };
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.sibling_pos(blank, dir).is_some())
            .collect()
    }

    /// Slide the blank at `blank` one cell towards `dir`, if that stays on the grid.
    pub(crate) fn move_blank(&self, blank: (usize, usize), dir: Direction) -> Option<Self> {
        let target = self.sibling_pos(blank, dir)?;
        let side = self.side();
        let mut tiles = self.tiles.clone();
        tiles.swap(blank.0 * side + blank.1, target.0 * side + target.1);
        Some(Self {
            side: self.side,
            tiles,
        })
    }

    pub fn try_move(&self, dir: Direction) -> Option<Self> {
        self.move_blank(self.locate_blank().ok()?, dir)
    }

    /// Swap the blank with its neighbour towards `dir`.
    ///
    /// # Panics
    /// If that neighbour is off the grid. Filter with [`Board::legal_moves`] first.
    pub fn apply_move(&self, dir: Direction) -> Self {
        self.try_move(dir)
            .unwrap_or_else(|| panic!("blank cannot move {dir:?} on\n{self}"))
    }
}

/// Direction the blank travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up = 0,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order of the search.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn offset(self) -> (isize, isize) {
        const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        OFFSETS[self as usize]
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
