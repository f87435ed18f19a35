/// Simulation systems
///
/// The per-tick update rules, the paint entry point used by pointer input,
/// and the frame driver that ties them into Bevy's update loop.

pub mod driver;
pub mod paint;
pub mod update;

pub use driver::*;
pub use paint::*;
pub use update::*;
