use crate::prelude::*;

/// visual offset for an object `stack_height` levels up a stack.
/// only ever used for drawing, timing never depends on it
pub fn stack_offset(stack_height: i32, scale: f32, multiplier: f32) -> Vector2 {
    Vector2::ONE * (stack_height as f32 * scale * multiplier)
}
