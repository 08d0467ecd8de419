mod sample_info;
mod control_points;
mod beatmap_difficulty;

pub use sample_info::*;
pub use control_points::*;
pub use beatmap_difficulty::*;
