use crate::prelude::*;

/// the `[Difficulty]` values that affect sliders
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeatmapDifficulty {
    /// base slider velocity in hundreds of osu!pixels per beat
    pub slider_multiplier: f64,
    /// slider ticks per beat
    pub slider_tick_rate: f64,
}
impl BeatmapDifficulty {
    /// reject values that would give a non-finite or negative tick distance
    pub fn validate(&self) -> TatakuResult {
        if !self.slider_multiplier.is_finite() || self.slider_multiplier < 0.0 {
            return Err(BeatmapError::InvalidSliderMultiplier(self.slider_multiplier).into())
        }
        if !self.slider_tick_rate.is_finite() || self.slider_tick_rate <= 0.0 {
            return Err(BeatmapError::InvalidTickRate(self.slider_tick_rate).into())
        }

        Ok(())
    }
}
impl Default for BeatmapDifficulty {
    fn default() -> Self {
        Self {
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
        }
    }
}
