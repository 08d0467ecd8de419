use crate::prelude::*;

/// Scoring distance with a speed-adjusted beat length of 1 second
pub const BASE_SCORING_DISTANCE: f64 = 100.0;

/// how fast a slider moves along its path, and how far apart its ticks are
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SliderVelocity {
    /// osu!pixels per ms
    pub velocity: f64,
    /// osu!pixels between ticks
    pub tick_distance: f64,
}
impl SliderVelocity {
    /// doesnt validate anything, a zero beat length gives an infinite velocity
    pub fn resolve(beat_length: f64, slider_multiplier: f64, speed_multiplier: f64, slider_tick_rate: f64) -> Self {
        let scoring_distance = BASE_SCORING_DISTANCE * slider_multiplier * speed_multiplier;

        Self {
            velocity: scoring_distance / beat_length,
            tick_distance: scoring_distance / slider_tick_rate,
        }
    }

    /// resolve using whatever sections are active at `time`
    pub fn at(time: f64, lookup: &impl TimingLookup, difficulty: &BeatmapDifficulty) -> Self {
        let timing_point = lookup.timing_point_at(time);
        let difficulty_point = lookup.difficulty_point_at(time);

        Self::resolve(
            timing_point.beat_length,
            difficulty.slider_multiplier,
            difficulty_point.speed_multiplier,
            difficulty.slider_tick_rate
        )
    }
}
