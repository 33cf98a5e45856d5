//! Simple paths over board cells
//!
//! A `Path` is an ordered list of distinct board indices with constant-time
//! membership, used as the visited set during board search.

/// Ordered sequence of distinct board indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    indices: Vec<usize>,
    visited: Vec<bool>,
}

impl Path {
    /// Create an empty path over a board with `cells` cells
    #[must_use]
    pub fn new(cells: usize) -> Self {
        Self {
            indices: Vec::new(),
            visited: vec![false; cells],
        }
    }

    /// Append a cell
    ///
    /// Returns `false` (and leaves the path unchanged) if the cell is out of
    /// range or already on the path.
    pub fn push(&mut self, index: usize) -> bool {
        match self.visited.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                self.indices.push(index);
                true
            }
            _ => false,
        }
    }

    /// Remove and return the last cell
    pub fn pop(&mut self) -> Option<usize> {
        let index = self.indices.pop()?;
        self.visited[index] = false;
        Some(index)
    }

    /// True if the cell is already on the path
    #[inline]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Cells in visiting order
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Consume the path, keeping only the ordered indices
    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}
