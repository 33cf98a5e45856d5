//! Square letter-tile board
//!
//! Cells are numbered in row-major order: `index = y * size + x`.
//! Tiles may hold more than one character (e.g. "QU").

use super::error::GameError;
use super::lexicon::normalize;
use super::path::Path;
use std::fmt;

/// Tiles of the built-in 4x4 board, row-major
pub const DEFAULT_TILES: [&str; 16] = [
    "E", "E", "C", "A", //
    "A", "L", "E", "P", //
    "H", "N", "B", "O", //
    "Q", "T", "T", "Y",
];

/// A board cell, derived from its index and the board size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub index: usize,
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Position of a row-major index on a board of side `size`
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            index,
            x: index % size,
            y: index / size,
        }
    }

    /// Position of column `x`, row `y` on a board of side `size`
    #[inline]
    #[must_use]
    pub const fn from_xy(x: usize, y: usize, size: usize) -> Self {
        Self {
            index: y * size + x,
            x,
            y,
        }
    }

    /// True if `other` is one of the eight cells surrounding this one
    #[must_use]
    pub const fn is_adjacent(&self, other: &Self) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx <= 1 && dy <= 1 && !(dx == 0 && dy == 0)
    }
}

/// Immutable N x N grid of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<String>,
    size: usize,
}

impl Board {
    /// Build a board from row-major tiles
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` if no tiles are given, the tile
    /// count is not a perfect square, or any tile is empty.
    ///
    /// # Examples
    /// ```
    /// use word_games::core::Board;
    ///
    /// let board = Board::new(&["a", "b", "c", "d"]).unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert!(Board::new(&["a", "b", "c"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(tiles: &[S]) -> Result<Self, GameError> {
        let size = tiles.len().isqrt();
        if tiles.is_empty() || size * size != tiles.len() {
            return Err(GameError::invalid(format!(
                "board needs a non-zero perfect square number of tiles, got {}",
                tiles.len()
            )));
        }

        let tiles: Vec<String> = tiles.iter().map(|t| normalize(t.as_ref())).collect();
        if let Some(index) = tiles.iter().position(String::is_empty) {
            return Err(GameError::invalid(format!("tile {index} is empty")));
        }

        Ok(Self { tiles, size })
    }

    /// Side length N
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (N squared)
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Position of a row-major index, if it lies on the board
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Position> {
        (index < self.tiles.len()).then(|| Position::from_index(index, self.size))
    }

    /// Position of column `x`, row `y`, if it lies on the board
    #[must_use]
    pub const fn position_xy(&self, x: usize, y: usize) -> Option<Position> {
        if x < self.size && y < self.size {
            Some(Position::from_xy(x, y, self.size))
        } else {
            None
        }
    }

    /// Tile at a position
    ///
    /// # Panics
    /// Panics if the position does not belong to this board.
    #[inline]
    #[must_use]
    pub fn tile(&self, position: Position) -> &str {
        &self.tiles[position.index]
    }

    /// Tile at a row-major index
    #[inline]
    #[must_use]
    pub fn tile_at(&self, index: usize) -> Option<&str> {
        self.tiles.get(index).map(String::as_str)
    }

    /// All tiles in row-major order
    #[must_use]
    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Neighbors of `position` that are not on `visited`
    ///
    /// Neighbors come back in row-major order (row above first, left to right).
    #[must_use]
    pub fn adjacent(&self, position: Position, visited: &Path) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(8);
        let y_range = position.y.saturating_sub(1)..=(position.y + 1).min(self.size - 1);

        for y in y_range {
            for x in position.x.saturating_sub(1)..=(position.x + 1).min(self.size - 1) {
                if x == position.x && y == position.y {
                    continue;
                }
                let neighbor = Position::from_xy(x, y, self.size);
                if !visited.contains(neighbor.index) {
                    neighbors.push(neighbor);
                }
            }
        }

        neighbors
    }

    /// Concatenate tiles along a sequence of indices
    ///
    /// Returns `None` if any index is off the board.
    #[must_use]
    pub fn word_for(&self, indices: &[usize]) -> Option<String> {
        indices.iter().map(|&i| self.tile_at(i)).collect()
    }

    /// Text rendering with every row, tiles padded to the widest tile
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Iterate over rows of tiles
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.tiles.chunks(self.size)
    }

    fn tile_width(&self) -> usize {
        self.tiles
            .iter()
            .map(|t| t.chars().count())
            .max()
            .unwrap_or(1)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            tiles: DEFAULT_TILES.iter().map(|&t| t.to_string()).collect(),
            size: 4,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.tile_width();
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|t| format!("{t:<width$}")).collect();
            write!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}
