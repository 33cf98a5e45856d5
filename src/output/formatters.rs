//! Formatting utilities for terminal output

use crate::core::Board;

/// Render the board with cells off `path` replaced by dots
///
/// Tiles keep their column alignment so the path stays readable.
#[must_use]
pub fn path_grid(board: &Board, path: &[usize]) -> String {
    let width = board
        .tiles()
        .iter()
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(1);

    board
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(x, tile)| {
                    let index = y * board.size() + x;
                    let shown = if path.contains(&index) { tile.as_str() } else { "." };
                    format!("{shown:<width$}")
                })
                .collect();
            cells.join(" ").trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join ladder words with arrows
#[must_use]
pub fn ladder_chain(ladder: &[String]) -> String {
    ladder.join(" → ")
}

/// Lay words out in fixed-width columns
#[must_use]
pub fn columns(words: &[String], per_row: usize) -> String {
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
    words
        .chunks(per_row.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_grid_hides_unused_cells() {
        let board = Board::new(&["A", "B", "C", "D"]).unwrap();
        assert_eq!(path_grid(&board, &[0, 3]), "A .\n. D");
    }

    #[test]
    fn path_grid_empty_path() {
        let board = Board::new(&["A", "B", "C", "D"]).unwrap();
        assert_eq!(path_grid(&board, &[]), ". .\n. .");
    }

    #[test]
    fn path_grid_wide_tiles() {
        let board = Board::new(&["qu", "i", "s", "t"]).unwrap();
        assert_eq!(path_grid(&board, &[0, 1, 3]), "QU I\n.  T");
    }

    #[test]
    fn ladder_chain_arrows() {
        let ladder = vec!["CAT".to_string(), "COT".to_string()];
        assert_eq!(ladder_chain(&ladder), "CAT → COT");
        assert_eq!(ladder_chain(&[]), "");
    }

    #[test]
    fn columns_wraps_rows() {
        let words: Vec<String> = ["AB", "ABCD", "AC"].iter().map(|s| s.to_string()).collect();
        assert_eq!(columns(&words, 2), "AB    ABCD\nAC");
    }
}
