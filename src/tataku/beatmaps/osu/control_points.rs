use crate::prelude::*;

/// beat length used when a map has no timing points at all
pub const DEFAULT_BEAT_LENGTH: f64 = 1000.0;

/// an uninherited (red) line, defines the beat length from `time` onwards
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    /// start time of this timing section, in ms from the start of the audio
    pub time: f64,
    /// duration of one beat in ms
    pub beat_length: f64,
    /// amount of beats in a measure
    pub meter: u8,
}
impl Default for TimingPoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            beat_length: DEFAULT_BEAT_LENGTH,
            meter: 4,
        }
    }
}

/// an inherited (green) line, scales slider velocity from `time` onwards
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyPoint {
    pub time: f64,
    pub speed_multiplier: f64,
}
impl Default for DifficultyPoint {
    fn default() -> Self {
        Self {
            time: 0.0,
            speed_multiplier: 1.0,
        }
    }
}


/// time -> active section lookup. whatever owns the control points implements this,
/// sliders only ever read from it
pub trait TimingLookup {
    fn timing_point_at(&self, time: f64) -> TimingPoint;
    fn difficulty_point_at(&self, time: f64) -> DifficultyPoint;
}


/// the control points of a beatmap, kept sorted by time
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPointInfo {
    timing_points: Vec<TimingPoint>,
    difficulty_points: Vec<DifficultyPoint>,
}
impl ControlPointInfo {
    pub fn new(mut timing_points: Vec<TimingPoint>, mut difficulty_points: Vec<DifficultyPoint>) -> Self {
        // make sure everything is sorted
        timing_points.sort_by(|a, b| a.time.total_cmp(&b.time));
        difficulty_points.sort_by(|a, b| a.time.total_cmp(&b.time));

        Self {
            timing_points,
            difficulty_points,
        }
    }

    pub fn timing_points(&self) -> &[TimingPoint] { &self.timing_points }
    pub fn difficulty_points(&self) -> &[DifficultyPoint] { &self.difficulty_points }

    pub fn add_timing_point(&mut self, point: TimingPoint) {
        let index = self.timing_points.partition_point(|p| p.time <= point.time);
        self.timing_points.insert(index, point);
    }
    pub fn add_difficulty_point(&mut self, point: DifficultyPoint) {
        let index = self.difficulty_points.partition_point(|p| p.time <= point.time);
        self.difficulty_points.insert(index, point);
    }

    /// build from the lines of an osu `[TimingPoints]` section.
    /// blank lines and comments are skipped
    pub fn from_osu_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> TatakuResult<Self> {
        let mut info = Self::default();

        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") { continue }

            match ControlPoint::from_osu_str(line).log_error_message("bad timing point")? {
                ControlPoint::Timing(tp) => info.add_timing_point(tp),
                ControlPoint::Difficulty(dp) => info.add_difficulty_point(dp),
            }
        }

        debug!("parsed {} timing points and {} difficulty points", info.timing_points.len(), info.difficulty_points.len());
        Ok(info)
    }

    /// last point at or before `time`, `None` if `time` is before every point
    fn point_at<T: Copy>(list: &[T], time: f64, get_time: impl Fn(&T) -> f64) -> Option<T> {
        let index = list.partition_point(|p| get_time(p) <= time);
        if index == 0 { None } else { Some(list[index - 1]) }
    }
}
impl TimingLookup for ControlPointInfo {
    fn timing_point_at(&self, time: f64) -> TimingPoint {
        // before the first red line the first red line still applies
        Self::point_at(&self.timing_points, time, |t| t.time)
            .or_else(|| self.timing_points.first().copied())
            .unwrap_or_default()
    }

    fn difficulty_point_at(&self, time: f64) -> DifficultyPoint {
        Self::point_at(&self.difficulty_points, time, |d| d.time).unwrap_or_default()
    }
}


/// a single parsed line from `[TimingPoints]`
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ControlPoint {
    Timing(TimingPoint),
    Difficulty(DifficultyPoint),
}
impl ControlPoint {
    pub fn from_osu_str(str: &str) -> TatakuResult<Self> {
        // time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects
        let bad_line = || TatakuError::Beatmap(BeatmapError::InvalidTimingPoint(str.to_owned()));

        let mut split = str.split(',').map(str::trim);
        let time = split.next().and_then(|s| s.parse::<f64>().ok()).ok_or_else(bad_line)?;
        let beat_length = split.next().and_then(|s| s.parse::<f64>().ok()).ok_or_else(bad_line)?;
        let meter = match split.next() {
            Some(s) => s.parse::<u8>().map_err(|_| bad_line())?,
            None => 4
        };

        // sampleSet, sampleIndex, volume
        let mut split = split.skip(3);

        // older maps dont have the uninherited field, negative beat lengths are inherited there
        let uninherited = match split.next() {
            Some(s) => s.parse::<u8>().map_err(|_| bad_line())? == 1,
            None => beat_length >= 0.0
        };

        if uninherited {
            return Ok(Self::Timing(TimingPoint { time, beat_length, meter }))
        }

        let speed_multiplier = if beat_length < 0.0 {
            (100.0 / -beat_length).clamp(0.1, 10.0)
        } else {
            1.0
        };

        Ok(Self::Difficulty(DifficultyPoint { time, speed_multiplier }))
    }
}
