pub mod modes;

pub use modes::*;
