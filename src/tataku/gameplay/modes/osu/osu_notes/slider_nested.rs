use crate::prelude::*;
use super::super::prelude::*;

/// a scoring point part way along a slider
#[derive(Clone, Debug, PartialEq)]
pub struct SliderTick {
    /// which traversal of the path this tick belongs to
    pub repeat_index: u32,
    pub start_time: f64,
    /// position on the path, without stacking
    pub position: Vector2,

    pub stack_height: i32,
    pub stack_offset: Vector2,
    pub scale: f32,
    pub combo_colour: Color,
    pub samples: Vec<SampleInfo>,
}

/// the arrow at the end of a slider where it turns around
#[derive(Clone, Debug, PartialEq)]
pub struct RepeatPoint {
    /// 1 for the first turn, up to repeat_count - 1
    pub repeat_index: u32,
    pub start_time: f64,
    /// position on the path, without stacking
    pub position: Vector2,

    pub stack_height: i32,
    pub stack_offset: Vector2,
    pub scale: f32,
    pub combo_colour: Color,
    pub samples: Vec<SampleInfo>,
}

impl SliderTick {
    pub fn stacked_position(&self) -> Vector2 { self.position + self.stack_offset }
}
impl RepeatPoint {
    pub fn stacked_position(&self) -> Vector2 { self.position + self.stack_offset }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NestedObject {
    Tick(SliderTick),
    Repeat(RepeatPoint),
}
impl NestedObject {
    pub fn start_time(&self) -> f64 {
        match self {
            Self::Tick(t) => t.start_time,
            Self::Repeat(r) => r.start_time,
        }
    }
    pub fn position(&self) -> Vector2 {
        match self {
            Self::Tick(t) => t.position,
            Self::Repeat(r) => r.position,
        }
    }
    pub fn stacked_position(&self) -> Vector2 {
        match self {
            Self::Tick(t) => t.stacked_position(),
            Self::Repeat(r) => r.stacked_position(),
        }
    }
    pub fn repeat_index(&self) -> u32 {
        match self {
            Self::Tick(t) => t.repeat_index,
            Self::Repeat(r) => r.repeat_index,
        }
    }
    pub fn samples(&self) -> &Vec<SampleInfo> {
        match self {
            Self::Tick(t) => &t.samples,
            Self::Repeat(r) => &r.samples,
        }
    }
    pub fn is_tick(&self) -> bool { matches!(self, Self::Tick(_)) }

    pub(crate) fn set_stack_height(&mut self, stack_height: i32, stack_offset: Vector2) {
        match self {
            Self::Tick(t) => {
                t.stack_height = stack_height;
                t.stack_offset = stack_offset;
            }
            Self::Repeat(r) => {
                r.stack_height = stack_height;
                r.stack_offset = stack_offset;
            }
        }
    }

    /// ticks go before repeat points when they land on the same time
    fn kind_order(&self) -> u8 {
        match self {
            Self::Tick(_) => 0,
            Self::Repeat(_) => 1,
        }
    }
}


/// everything about the parent slider the generator needs to know
#[derive(Clone, Debug)]
pub struct NestedObjectParams<'a> {
    pub start_time: f64,
    pub repeat_count: u32,
    pub velocity: f64,
    pub tick_distance: f64,

    pub stack_height: i32,
    pub stack_offset: Vector2,
    pub scale: f32,
    pub combo_colour: Color,
    pub samples: &'a [SampleInfo],
    pub repeat_samples: &'a [Vec<SampleInfo>],
}

/// ticks along the path for every repeat, spaced by distance rather than time.
/// `path` positions are stored as-is, pass an unstacked path
pub fn create_ticks(path: &impl SliderPath, params: &NestedObjectParams, settings: &OsuSettings) -> Vec<SliderTick> {
    let mut ticks = Vec::new();

    let length = path.length();
    // negative or nan spacing would never reach the end
    if !(params.tick_distance > 0.0) || !(length > 0.0) { return ticks }

    let tick_distance = params.tick_distance.min(length);
    let repeat_duration = length / params.velocity;

    let min_distance_from_end = params.velocity * settings.tick_end_exclusion;

    let samples = params.samples
        .iter()
        .map(|s| s.with_name(&settings.tick_sample_name))
        .collect::<Vec<_>>();

    for repeat in 0..params.repeat_count {
        let repeat_start_time = params.start_time + repeat as f64 * repeat_duration;
        let reversed = repeat % 2 == 1;

        let mut d = tick_distance;
        while d <= length {
            // ticks are in distance order, everything after this is too close to the end too
            if d > length - min_distance_from_end { break }

            let distance_progress = d / length;
            let time_progress = if reversed { 1.0 - distance_progress } else { distance_progress };

            ticks.push(SliderTick {
                repeat_index: repeat,
                start_time: repeat_start_time + time_progress * repeat_duration,
                position: path.position_at(distance_progress),

                stack_height: params.stack_height,
                stack_offset: params.stack_offset,
                scale: params.scale,
                combo_colour: params.combo_colour,
                samples: samples.clone(),
            });

            d += tick_distance;
        }
    }

    ticks
}

/// one repeat point per turn, alternating between the tail and the head.
/// `repeat_samples` must already have been checked to have an entry per repeat
pub fn create_repeat_points(path: &impl SliderPath, params: &NestedObjectParams) -> Vec<RepeatPoint> {
    let repeat_duration = path.length() / params.velocity;

    (1..params.repeat_count).map(|repeat| RepeatPoint {
        repeat_index: repeat,
        start_time: params.start_time + repeat as f64 * repeat_duration,
        position: path.position_at((repeat % 2) as f64),

        stack_height: params.stack_height,
        stack_offset: params.stack_offset,
        scale: params.scale,
        combo_colour: params.combo_colour,
        samples: params.repeat_samples[repeat as usize].clone(),
    }).collect()
}

/// sort by time. ties put ticks first, otherwise generation order is kept
pub fn sort_nested(nested: &mut [NestedObject]) {
    nested.sort_by(|a, b| {
        a.start_time()
            .total_cmp(&b.start_time())
            .then_with(|| a.kind_order().cmp(&b.kind_order()))
    });
}

/// ticks and repeat points for a slider, sorted by time
pub fn create_nested_objects(path: &impl SliderPath, params: &NestedObjectParams, settings: &OsuSettings) -> Vec<NestedObject> {
    let ticks = create_ticks(path, params, settings);
    let repeats = create_repeat_points(path, params);
    trace!("created {} ticks and {} repeat points", ticks.len(), repeats.len());

    let mut nested = ticks
        .into_iter()
        .map(NestedObject::Tick)
        .chain(repeats.into_iter().map(NestedObject::Repeat))
        .collect::<Vec<_>>();

    sort_nested(&mut nested);
    nested
}
