//! The 3×3 grid and its ASCII rendering.

use crate::common::{BoardError, Coord};
use crate::config::{BOARD_SIZE, CELL_JOINER, ROW_SEPARATORS};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
    /// A marker is present, regardless of who placed it.
    Marked,
}

impl Cell {
    /// One-character glyph used by `Board::layout`.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => 'o',
            Cell::White => 'w',
            Cell::Black => 'b',
            Cell::Marked => 'x',
        }
    }
}

/// Fixed-size board addressed by 1-based coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Translate a 1-based coordinate into grid indices.
    fn index(coord: Coord) -> Result<(usize, usize), BoardError> {
        let out_of_bounds = BoardError::OutOfBounds {
            row: coord.row,
            col: coord.col,
        };
        let r = coord
            .row
            .checked_sub(1)
            .filter(|r| *r < BOARD_SIZE)
            .ok_or(out_of_bounds)?;
        let c = coord
            .col
            .checked_sub(1)
            .filter(|c| *c < BOARD_SIZE)
            .ok_or(out_of_bounds)?;
        Ok((r, c))
    }

    /// Read the cell at `coord`.
    pub fn cell(&self, coord: impl Into<Coord>) -> Result<Cell, BoardError> {
        let (r, c) = Self::index(coord.into())?;
        Ok(self.grid[r][c])
    }

    /// Mark the cell at (row, col). Occupied cells are overwritten.
    pub fn place(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let (r, c) = Self::index(Coord::new(row, col))?;
        self.grid[r][c] = Cell::Marked;
        log::debug!("placed marker at ({}, {})", row, col);
        Ok(())
    }

    /// Empty `from`, then mark `to`.
    ///
    /// Nothing checks that `from` holds a marker or that `to` is free; when
    /// both are the same cell it ends up marked. Both coordinates are
    /// resolved before either write, so an out-of-bounds `to` leaves the
    /// board untouched.
    pub fn move_marker(
        &mut self,
        from: impl Into<Coord>,
        to: impl Into<Coord>,
    ) -> Result<(), BoardError> {
        let (from, to) = (from.into(), to.into());
        let (fr, fc) = Self::index(from)?;
        let (tr, tc) = Self::index(to)?;
        self.grid[fr][fc] = Cell::Empty;
        self.grid[tr][tc] = Cell::Marked;
        log::debug!("moved marker from {} to {}", from, to);
        Ok(())
    }

    /// Render the board: rows of glyphs joined by `-`, with the fixed
    /// separators between rows, one line each.
    pub fn layout(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(BOARD_SIZE * 2 - 1);
        for (i, row) in self.grid.iter().enumerate() {
            let mut line = String::new();
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    line.push_str(CELL_JOINER);
                }
                line.push(cell.symbol());
            }
            lines.push(line);
            if let Some(sep) = ROW_SEPARATORS.get(i) {
                lines.push(String::from(*sep));
            }
        }
        lines.join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layout())
    }
}
