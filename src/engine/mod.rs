mod math;
mod errors;
mod graphics;
mod settings;

pub use math::*;
pub use errors::*;
pub use settings::*;
pub use self::graphics::*;
