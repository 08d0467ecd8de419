mod stacking;
mod velocity;
mod progress;

pub use stacking::*;
pub use velocity::*;
pub use progress::*;
