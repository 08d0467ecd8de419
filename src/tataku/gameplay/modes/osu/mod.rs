mod osu_math;
mod osu_notes;
mod osu_helpers;

pub use osu_math::*;
pub use osu_notes::*;
pub use osu_helpers::*;

/// import helper
pub(self) mod prelude {
    pub use super::osu_math::*;
    pub use super::osu_notes::*;
    pub use super::osu_helpers::*;
}
