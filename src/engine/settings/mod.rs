mod osu_settings;

pub use osu_settings::*;
