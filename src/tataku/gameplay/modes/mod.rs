mod osu;

pub use osu::*;
