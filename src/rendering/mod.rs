/// Rendering for the sandbox
///
/// The grid is drawn into a single texture shown on a sprite.

pub mod canvas;

pub use canvas::*;
