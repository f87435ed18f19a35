/// Grid store for the sandbox
///
/// This module owns the cell lattice, the element set and the
/// bounds-checked accessors every other part of the simulator goes through.

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::*;
pub use error::*;
pub use grid::*;
