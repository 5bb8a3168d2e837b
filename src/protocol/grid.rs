//! Human-readable board grids.

use crate::board::{occupant_symbol, Position, Square};

/// Returns the board as 8 rows of symbols, rank 8 first, files a..h.
/// Empty squares are `.`.
pub fn to_symbol_grid<P: Position>(position: &P) -> [[char; 8]; 8] {
    let mut grid = [['.'; 8]; 8];
    for (row, cells) in grid.iter_mut().enumerate() {
        for (file, cell) in cells.iter_mut().enumerate() {
            if let Some(square) = Square::from_coords(file, 7 - row) {
                *cell = occupant_symbol(position.piece_at(square));
            }
        }
    }
    grid
}

/// Renders the grid as text: one rank per line, cells separated by a space.
pub fn render_grid<P: Position>(position: &P) -> String {
    to_symbol_grid(position)
        .iter()
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn starting_grid() {
        let grid = to_symbol_grid(&Board::starting());
        assert_eq!(grid[0], ['r', 'n', 'b', 'q', 'k', 'b', 'n', 'r']);
        assert_eq!(grid[1], ['p'; 8]);
        assert_eq!(grid[4], ['.'; 8]);
        assert_eq!(grid[6], ['P'; 8]);
        assert_eq!(grid[7], ['R', 'N', 'B', 'Q', 'K', 'B', 'N', 'R']);
    }

    #[test]
    fn render_empty_board() {
        let text = render_grid(&Board::empty());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| *l == ". . . . . . . ."));
    }
}
