mod gameplay;
pub mod beatmaps;

pub use gameplay::*;
pub use beatmaps::*;
