use crate::game::Color;

/// A token falling into place, one row per frame. It starts on the preview
/// line above the board and stops on the row the engine placed it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropAnimation {
    pub column: usize,
    pub row: usize,
    pub color: Color,
    remaining: usize,
}

impl DropAnimation {
    pub fn new(column: usize, row: usize, color: Color, height: usize) -> Self {
        DropAnimation {
            column,
            row,
            color,
            remaining: height.saturating_sub(row),
        }
    }

    /// Row the token is drawn on this frame. Equal to the board height while
    /// it is still on the preview line.
    pub fn visual_row(&self) -> usize {
        self.row + self.remaining
    }

    /// Advance one frame; returns true once the token has landed.
    pub fn step(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.landed()
    }

    pub fn landed(&self) -> bool {
        self.remaining == 0
    }
}
