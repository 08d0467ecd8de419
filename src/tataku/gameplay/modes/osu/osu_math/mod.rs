mod curve;
mod osu_math;

pub use curve::*;
pub use osu_math::*;
