use crate::prelude::*;
use super::super::prelude::*;

/// anything that can show up in an osu map that the slider engine cares about
#[derive(Clone, Debug)]
pub enum OsuHitObject {
    Circle(HitCircle),
    Slider(Slider),
}
impl OsuHitObject {
    pub fn start_time(&self) -> f64 {
        match self {
            Self::Circle(c) => c.start_time,
            Self::Slider(s) => s.start_time,
        }
    }
    pub fn end_time(&self) -> f64 {
        match self {
            Self::Circle(c) => c.start_time,
            Self::Slider(s) => s.end_time(),
        }
    }

    pub fn position(&self) -> Vector2 {
        match self {
            Self::Circle(c) => c.position,
            Self::Slider(s) => s.position,
        }
    }
    pub fn stacked_position(&self) -> Vector2 {
        match self {
            Self::Circle(c) => c.stacked_position(),
            Self::Slider(s) => s.position + s.curve.offset(),
        }
    }

    /// the path, if this object has one
    pub fn curve(&self) -> Option<&SliderCurve> {
        match self {
            Self::Slider(s) => Some(&s.curve),
            _ => None,
        }
    }

    /// circles dont have anything timing dependent
    pub fn apply_defaults(&mut self, lookup: &impl TimingLookup, difficulty: &BeatmapDifficulty) -> TatakuResult {
        self.apply_defaults_with_settings(lookup, difficulty, &OsuSettings::default())
    }
    pub fn apply_defaults_with_settings(&mut self, lookup: &impl TimingLookup, difficulty: &BeatmapDifficulty, settings: &OsuSettings) -> TatakuResult {
        match self {
            Self::Circle(_) => Ok(()),
            Self::Slider(s) => s.apply_defaults_with_settings(lookup, difficulty, settings),
        }
    }

    pub fn set_stack_height(&mut self, stack_height: i32) {
        self.set_stack_height_with_settings(stack_height, &OsuSettings::default())
    }
    pub fn set_stack_height_with_settings(&mut self, stack_height: i32, settings: &OsuSettings) {
        match self {
            Self::Circle(c) => c.set_stack_height_with_settings(stack_height, settings),
            Self::Slider(s) => s.set_stack_height_with_settings(stack_height, settings),
        }
    }
}
impl From<HitCircle> for OsuHitObject {
    fn from(c: HitCircle) -> Self { Self::Circle(c) }
}
impl From<Slider> for OsuHitObject {
    fn from(s: Slider) -> Self { Self::Slider(s) }
}
