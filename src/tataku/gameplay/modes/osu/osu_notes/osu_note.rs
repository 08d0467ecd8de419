use crate::prelude::*;
use super::super::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct HitCircle {
    /// note time in ms
    pub start_time: f64,
    /// note position, without stacking
    pub position: Vector2,
    pub combo_colour: Color,
    pub scale: f32,
    pub samples: Vec<SampleInfo>,

    stack_height: i32,
    stack_offset: Vector2,
}
impl HitCircle {
    pub fn new(start_time: f64, position: Vector2) -> Self {
        Self {
            start_time,
            position,
            combo_colour: Color::WHITE,
            scale: 1.0,
            samples: Vec::new(),

            stack_height: 0,
            stack_offset: Vector2::ZERO,
        }
    }

    pub fn stack_height(&self) -> i32 { self.stack_height }
    pub fn stacked_position(&self) -> Vector2 { self.position + self.stack_offset }

    pub fn set_stack_height(&mut self, stack_height: i32) {
        self.set_stack_height_with_settings(stack_height, &OsuSettings::default())
    }
    pub fn set_stack_height_with_settings(&mut self, stack_height: i32, settings: &OsuSettings) {
        self.stack_height = stack_height;
        self.stack_offset = stack_offset(stack_height, self.scale, settings.stack_offset_multiplier);
    }
}
