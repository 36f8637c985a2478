use std::fmt;

use super::Color;
use crate::error::MoveError;

/// Read view of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Token(Color),
    /// Sentinel for coordinates outside the board, so line scans can walk off
    /// the edge without bounds checks.
    OutOfRange,
}

impl Cell {
    /// The token color, if this cell holds one
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Token(color) => Some(color),
            Cell::Empty | Cell::OutOfRange => None,
        }
    }
}

/// A `width x height` grid of holes. Columns are filled bottom-up and row 0
/// is the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Column-major: cell `(column, row)` lives at `column * height + row`.
    cells: Vec<Option<Color>>,
    /// Per-column fill counter, also the row index the next token lands on.
    heights: Vec<usize>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![None; width * height],
            heights: vec![0; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a position. Any coordinate outside the board yields
    /// `Cell::OutOfRange`.
    pub fn occupant(&self, column: isize, row: isize) -> Cell {
        if column < 0 || row < 0 {
            return Cell::OutOfRange;
        }
        let (column, row) = (column as usize, row as usize);
        if column >= self.width || row >= self.height {
            return Cell::OutOfRange;
        }
        match self.cells[column * self.height + row] {
            Some(color) => Cell::Token(color),
            None => Cell::Empty,
        }
    }

    /// Number of tokens stacked in a column (0 for columns outside the board)
    pub fn column_height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.heights.get(column) {
            Some(&filled) => filled >= self.height,
            None => true,
        }
    }

    /// Drop a token in a column, returns the row where it landed
    pub fn place(&mut self, column: usize, color: Color) -> Result<usize, MoveError> {
        if column >= self.width {
            return Err(MoveError::InvalidColumn {
                column,
                width: self.width,
            });
        }

        let row = self.heights[column];
        if row >= self.height {
            return Err(MoveError::ColumnFull { column });
        }

        self.cells[column * self.height + row] = Some(color);
        self.heights[column] += 1;
        Ok(row)
    }

    /// Check if every hole is occupied
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&filled| filled >= self.height)
    }

    /// Total number of tokens on the board
    pub fn token_count(&self) -> usize {
        self.heights.iter().sum()
    }
}

/// Text rendering, top row first: `Y`/`R` for tokens, `.` for empty holes.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            let line: String = (0..self.width)
                .map(|column| match self.cells[column * self.height + row] {
                    Some(color) => color.symbol(),
                    None => '.',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
