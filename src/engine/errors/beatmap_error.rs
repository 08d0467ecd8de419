/// problems with the authored beatmap data handed to the slider engine.
/// these are caught when defaults are applied, before anything on the object changes
#[derive(Clone, Debug, PartialEq)]
pub enum BeatmapError {
    /// the timing point active at `time` has a zero, negative or non-finite beat length
    InvalidBeatLength {
        time: f64,
        beat_length: f64,
    },
    InvalidTickRate(f64),
    /// negative or non-finite slider multiplier from `[Difficulty]`
    InvalidSliderMultiplier(f64),
    /// the difficulty point active at `time` has a negative or non-finite speed multiplier
    InvalidSpeedMultiplier {
        time: f64,
        speed_multiplier: f64,
    },
    InvalidRepeatCount(u32),
    /// a repeating slider needs one sample list per repeat
    MissingRepeatSamples {
        repeat_count: u32,
        found: usize,
    },
    /// contains the offending line
    InvalidTimingPoint(String),
}
