mod osu_note;
mod osu_slider;
mod osu_hitobject;
mod slider_nested;

pub use osu_note::*;
pub use osu_slider::*;
pub use osu_hitobject::*;
pub use slider_nested::*;
