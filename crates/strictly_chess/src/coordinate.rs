//! Board coordinates with permissive construction.
//!
//! A coordinate never fails to construct. Out-of-range input collapses to a
//! single invalid sentinel which callers test with [`Coordinate::is_valid`].

use serde::{Deserialize, Serialize};

/// Lowest row/column index in engine addressing.
pub const MIN_INDEX: i32 = 1;
/// Highest row/column index in engine addressing.
pub const MAX_INDEX: i32 = 8;

/// A square on the board, addressed as `(row, col)` with both in `1..=8`.
///
/// Row 1 is White's back rank, column 1 is the a-file. If either component
/// is out of range the coordinate is invalid as a whole; there is no
/// partially valid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coordinate {
    // 0 in both fields marks the invalid sentinel.
    row: u8,
    col: u8,
}

impl Coordinate {
    /// The invalid sentinel.
    pub const INVALID: Coordinate = Coordinate { row: 0, col: 0 };

    /// Creates a coordinate, collapsing out-of-range input to [`Coordinate::INVALID`].
    pub fn new(row: i32, col: i32) -> Self {
        if (MIN_INDEX..=MAX_INDEX).contains(&row) && (MIN_INDEX..=MAX_INDEX).contains(&col) {
            Self {
                row: row as u8,
                col: col as u8,
            }
        } else {
            Self::INVALID
        }
    }

    /// Returns true if both components are on the board.
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// Row in `1..=8`, or `None` for the invalid sentinel.
    pub fn row(self) -> Option<u8> {
        self.is_valid().then_some(self.row)
    }

    /// Column in `1..=8`, or `None` for the invalid sentinel.
    pub fn col(self) -> Option<u8> {
        self.is_valid().then_some(self.col)
    }

    /// Shifts the coordinate. Invalid in, invalid out.
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        if !self.is_valid() {
            return Self::INVALID;
        }
        Self::new(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// Zero-based index into a row-major 8x8 array.
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        self.is_valid()
            .then(|| (self.row as usize - 1, self.col as usize - 1))
    }

    /// All 64 valid coordinates, row-major from (1,1) to (8,8).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (MIN_INDEX..=MAX_INDEX)
            .flat_map(|row| (MIN_INDEX..=MAX_INDEX).map(move |col| Coordinate::new(row, col)))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coord: Coordinate) -> Self {
        (coord.row as i32, coord.col as i32)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "({},{})", self.row, self.col)
        } else {
            write!(f, "invalid")
        }
    }
}
