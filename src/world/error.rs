//! Error types for grid access.

use std::fmt;

use super::grid::GRID_SIZE;

/// Errors raised by direct grid accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside `[0, GRID_SIZE)` on either axis.
    OutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => {
                write!(f, "cell ({x}, {y}) out of bounds: grid is {GRID_SIZE}x{GRID_SIZE}")
            }
        }
    }
}

impl std::error::Error for GridError {}
