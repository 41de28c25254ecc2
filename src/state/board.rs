//! Board state management.
//!
//! Tracks cell occupancy for a Connect Four grid, computes where a dropped
//! piece lands, and detects four-in-a-row lines.
//!
//! Row 0 is the top of the board; pieces fall toward row `height - 1`.

/// Number of consecutive pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Standard board height.
pub const DEFAULT_HEIGHT: usize = 6;

/// Standard board width.
pub const DEFAULT_WIDTH: usize = 7;

/// Line directions as (dy, dx) steps: horizontal, vertical, diagonal down-right,
/// diagonal down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Board errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {height}x{width}: both must be at least {min}", min = WIN_LENGTH)]
    InvalidDimension { height: usize, width: usize },

    #[error("column {column} is out of range (board has {width} columns)")]
    OutOfRange { column: usize, width: usize },
}

/// Connect Four grid.
///
/// Each cell is either empty or holds the index of the player who placed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    /// Row-major cells
    cells: Vec<Option<u8>>,
}

impl Board {
    /// Create an empty board.
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        if height < WIN_LENGTH || width < WIN_LENGTH {
            return Err(BoardError::InvalidDimension { height, width });
        }

        Ok(Self {
            height,
            width,
            cells: vec![None; height * width],
        })
    }

    /// Create an empty 6x7 board.
    pub fn standard() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            cells: vec![None; DEFAULT_HEIGHT * DEFAULT_WIDTH],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the player index at a cell, `None` if empty or out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row < self.height && column < self.width {
            self.cells[row * self.width + column]
        } else {
            None
        }
    }

    /// Lowest empty row in a column, or `None` if the column is full.
    pub fn landing_row(&self, column: usize) -> Result<Option<usize>, BoardError> {
        if column >= self.width {
            return Err(BoardError::OutOfRange {
                column,
                width: self.width,
            });
        }

        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_none()))
    }

    /// Check if a column has no room left. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        !matches!(self.landing_row(column), Ok(Some(_)))
    }

    /// Mark a cell as occupied by a player.
    ///
    /// `row` must come from [`Board::landing_row`] for the same column on the
    /// current state, otherwise pieces could float.
    pub fn place(&mut self, row: usize, column: usize, player_index: u8) {
        debug_assert!(
            row < self.height && column < self.width,
            "place({row}, {column}) outside {}x{} board",
            self.height,
            self.width
        );
        self.cells[row * self.width + column] = Some(player_index);
    }

    /// Check if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if a piece at (row, column) completes a line for `player_index`.
    ///
    /// Only the windows that contain (row, column) are examined. A new line
    /// must include the last placed piece, so this agrees with
    /// [`Board::has_any_win`] whenever the board had no line before the move.
    pub fn has_win_from(&self, row: usize, column: usize, player_index: u8) -> bool {
        let (row, column) = (row as isize, column as isize);
        let span = WIN_LENGTH as isize;

        DIRECTIONS.iter().any(|&(dy, dx)| {
            (0..span).any(|back| {
                let origin = (row - back * dy, column - back * dx);
                self.line_from(origin, (dy, dx), player_index)
            })
        })
    }

    /// Scan every cell as a line origin in every direction.
    pub fn has_any_win(&self, player_index: u8) -> bool {
        (0..self.height as isize).any(|row| {
            (0..self.width as isize).any(|column| {
                DIRECTIONS
                    .iter()
                    .any(|&dir| self.line_from((row, column), dir, player_index))
            })
        })
    }

    /// Check the `WIN_LENGTH` cells starting at `origin` along `dir`.
    fn line_from(&self, origin: (isize, isize), dir: (isize, isize), player_index: u8) -> bool {
        (0..WIN_LENGTH as isize).all(|step| {
            let y = origin.0 + step * dir.0;
            let x = origin.1 + step * dir.1;
            y >= 0
                && x >= 0
                && (y as usize) < self.height
                && (x as usize) < self.width
                && self.cells[y as usize * self.width + x as usize] == Some(player_index)
        })
    }

    /// Convert grid to JSON, `null` for empty cells.
    pub fn to_json(&self) -> serde_json::Value {
        let rows: Vec<serde_json::Value> = self
            .cells
            .chunks(self.width)
            .map(|row| serde_json::json!(row))
            .collect();
        serde_json::json!({
            "height": self.height,
            "width": self.width,
            "cells": rows
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn drop_piece(board: &mut Board, column: usize, player: u8) -> usize {
        let row = board.landing_row(column).unwrap().unwrap();
        board.place(row, column, player);
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7).unwrap();
        assert_eq!(board.height(), 6);
        assert_eq!(board.width(), 7);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), None);
            }
        }
        assert!(!board.is_full());
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Board::new(3, 7),
            Err(BoardError::InvalidDimension { height: 3, width: 7 })
        );
        assert!(Board::new(6, 2).is_err());
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_landing_row_stacks_from_bottom() {
        let mut board = Board::standard();

        assert_eq!(drop_piece(&mut board, 3, 1), 5);
        assert_eq!(drop_piece(&mut board, 3, 2), 4);
        assert_eq!(board.get(5, 3), Some(1));
        assert_eq!(board.get(4, 3), Some(2));
        assert_eq!(board.landing_row(3), Ok(Some(3)));
    }

    #[test]
    fn test_landing_row_full_column() {
        let mut board = Board::standard();
        for _ in 0..6 {
            drop_piece(&mut board, 0, 1);
        }

        assert_eq!(board.landing_row(0), Ok(None));
        assert!(board.is_column_full(0));
        assert!(!board.is_column_full(1));
    }

    #[test]
    fn test_landing_row_out_of_range() {
        let board = Board::standard();
        assert_eq!(
            board.landing_row(7),
            Err(BoardError::OutOfRange { column: 7, width: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 6x7 board")]
    fn test_place_past_last_column_panics() {
        let mut board = Board::standard();
        // Would otherwise wrap into (1, 0) and leave a floating piece
        board.place(0, 7, 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 6x7 board")]
    fn test_place_below_bottom_row_panics() {
        let mut board = Board::standard();
        board.place(6, 0, 1);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 4).unwrap();
        for col in 0..4 {
            for _ in 0..4 {
                drop_piece(&mut board, col, 1);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.piece_count(), 16);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::standard();
        for col in 1..4 {
            drop_piece(&mut board, col, 1);
            assert!(!board.has_win_from(5, col, 1));
        }
        drop_piece(&mut board, 4, 1);
        assert!(board.has_win_from(5, 4, 1));
        // The line is found from any of its cells
        assert!(board.has_win_from(5, 2, 1));
        assert!(!board.has_win_from(5, 4, 2));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::standard();
        for _ in 0..3 {
            let row = drop_piece(&mut board, 6, 2);
            assert!(!board.has_win_from(row, 6, 2));
        }
        let row = drop_piece(&mut board, 6, 2);
        assert_eq!(row, 2);
        assert!(board.has_win_from(row, 6, 2));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        // Line (2,0) (3,1) (4,2) (5,3)
        let mut board = Board::standard();
        drop_piece(&mut board, 3, 1);

        drop_piece(&mut board, 2, 2);
        drop_piece(&mut board, 2, 1);

        drop_piece(&mut board, 1, 2);
        drop_piece(&mut board, 1, 2);
        drop_piece(&mut board, 1, 1);

        drop_piece(&mut board, 0, 2);
        drop_piece(&mut board, 0, 2);
        drop_piece(&mut board, 0, 2);
        assert!(!board.has_any_win(1));

        let row = drop_piece(&mut board, 0, 1);
        assert_eq!(row, 2);
        assert!(board.has_win_from(row, 0, 1));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        // Line (2,6) (3,5) (4,4) (5,3)
        let mut board = Board::standard();
        drop_piece(&mut board, 3, 1);

        drop_piece(&mut board, 4, 2);
        drop_piece(&mut board, 4, 1);

        drop_piece(&mut board, 5, 2);
        drop_piece(&mut board, 5, 2);
        drop_piece(&mut board, 5, 1);

        drop_piece(&mut board, 6, 2);
        drop_piece(&mut board, 6, 2);
        drop_piece(&mut board, 6, 2);
        assert!(!board.has_any_win(1));

        let row = drop_piece(&mut board, 6, 1);
        assert!(board.has_win_from(row, 6, 1));
        // Middle of the diagonal also reports the line
        assert!(board.has_win_from(4, 4, 1));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::standard();
        for col in 0..3 {
            drop_piece(&mut board, col, 1);
        }
        assert!(!board.has_win_from(5, 2, 1));
        assert!(!board.has_any_win(1));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut board = Board::standard();
        drop_piece(&mut board, 0, 1);
        drop_piece(&mut board, 1, 1);
        drop_piece(&mut board, 2, 2);
        drop_piece(&mut board, 3, 1);
        drop_piece(&mut board, 4, 1);
        assert!(!board.has_win_from(5, 4, 1));
        assert!(!board.has_any_win(1));
    }

    #[test]
    fn test_to_json() {
        let mut board = Board::new(4, 4).unwrap();
        drop_piece(&mut board, 1, 2);

        let json = board.to_json();
        assert_eq!(json["height"], 4);
        assert_eq!(json["width"], 4);
        assert_eq!(json["cells"][3][1], 2);
        assert!(json["cells"][3][0].is_null());
    }
}
