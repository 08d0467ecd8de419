use crate::prelude::*;
use super::super::prelude::*;

/// a slider as authored in the beatmap, plus everything derived from the map's timing.
///
/// built by the loader, then [`Slider::apply_defaults`] fills in velocity, tick distance
/// and the nested ticks/repeat points. after that the only thing that changes during
/// gameplay is the stack height, which only moves where the slider is drawn
#[derive(Clone, Debug)]
pub struct Slider {
    pub start_time: f64,
    /// head position
    pub position: Vector2,
    pub combo_colour: Color,
    pub scale: f32,
    /// samples for the slider body, ticks copy their bank and volume from these
    pub samples: Vec<SampleInfo>,
    /// samples for each edge, indexed by repeat
    pub repeat_samples: Vec<Vec<SampleInfo>>,

    pub curve: SliderCurve,
    /// 1 for a slider that doesnt repeat
    pub repeat_count: u32,

    /// osu!pixels per ms, set by apply_defaults
    pub velocity: f64,
    /// osu!pixels between ticks, set by apply_defaults
    pub tick_distance: f64,

    /// where the cursor ends up if the slider is followed as lazily as possible.
    /// filled in by difficulty calculation
    pub lazy_end_position: Option<Vector2>,
    /// how far the cursor travels if the slider is followed as lazily as possible.
    /// filled in by difficulty calculation
    pub lazy_travel_distance: Option<f32>,

    stack_height: i32,
    nested: Vec<NestedObject>,
}
impl Slider {
    pub fn new(start_time: f64, position: Vector2, curve: SliderCurve, repeat_count: u32) -> Self {
        Self {
            start_time,
            position,
            combo_colour: Color::WHITE,
            scale: 1.0,
            samples: Vec::new(),
            repeat_samples: Vec::new(),

            curve,
            repeat_count,

            velocity: 0.0,
            tick_distance: 0.0,

            lazy_end_position: None,
            lazy_travel_distance: None,

            stack_height: 0,
            nested: Vec::new(),
        }
    }

    pub fn with_samples(mut self, samples: Vec<SampleInfo>, repeat_samples: Vec<Vec<SampleInfo>>) -> Self {
        self.samples = samples;
        self.repeat_samples = repeat_samples;
        self
    }
    pub fn with_combo_colour(mut self, combo_colour: Color) -> Self {
        self.combo_colour = combo_colour;
        self
    }
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn distance(&self) -> f64 { self.curve.distance() }
    pub fn stack_height(&self) -> i32 { self.stack_height }
    /// ticks and repeat points, sorted by start time
    pub fn nested(&self) -> &[NestedObject] { &self.nested }

    pub fn end_time(&self) -> f64 {
        self.start_time + self.repeat_count as f64 * self.curve.distance() / self.velocity
    }
    pub fn duration(&self) -> f64 {
        self.end_time() - self.start_time
    }

    /// progress along the path for progress over the whole slider
    pub fn progress_at(&self, progress: f64) -> f64 {
        progress_at(progress, self.repeat_count)
    }
    pub fn repeat_at(&self, progress: f64) -> u32 {
        repeat_at(progress, self.repeat_count)
    }

    /// where the slider ball is at `progress` over the whole slider, including the stack offset
    pub fn position_at(&self, progress: f64) -> Vector2 {
        self.curve.position_at(self.progress_at(progress))
    }
    pub fn end_position(&self) -> Vector2 {
        self.position_at(1.0)
    }

    /// change the stack height. this moves the curve's offset and the nested objects' offsets,
    /// all times and unstacked positions stay where they are
    pub fn set_stack_height(&mut self, stack_height: i32) {
        self.set_stack_height_with_settings(stack_height, &OsuSettings::default())
    }
    pub fn set_stack_height_with_settings(&mut self, stack_height: i32, settings: &OsuSettings) {
        let offset = stack_offset(stack_height, self.scale, settings.stack_offset_multiplier);

        self.stack_height = stack_height;
        self.curve.set_offset(offset);
        self.nested.iter_mut().for_each(|n| n.set_stack_height(stack_height, offset));
    }

    /// work out velocity and tick distance from the timing active at the slider's start,
    /// then rebuild every nested object from scratch
    pub fn apply_defaults(&mut self, lookup: &impl TimingLookup, difficulty: &BeatmapDifficulty) -> TatakuResult {
        self.apply_defaults_with_settings(lookup, difficulty, &OsuSettings::default())
    }

    pub fn apply_defaults_with_settings(&mut self, lookup: &impl TimingLookup, difficulty: &BeatmapDifficulty, settings: &OsuSettings) -> TatakuResult {
        // check everything first so a bad map leaves the slider untouched
        self.validate(lookup, difficulty)?;

        let SliderVelocity { velocity, tick_distance } = SliderVelocity::at(self.start_time, lookup, difficulty);
        self.velocity = velocity;
        self.tick_distance = tick_distance;

        let params = NestedObjectParams {
            start_time: self.start_time,
            repeat_count: self.repeat_count,
            velocity,
            tick_distance,

            stack_height: self.stack_height,
            stack_offset: self.curve.offset(),
            scale: self.scale,
            combo_colour: self.combo_colour,
            samples: &self.samples,
            repeat_samples: &self.repeat_samples,
        };
        self.nested = create_nested_objects(&self.curve.unstacked(), &params, settings);

        #[cfg(feature="debug_sliders")]
        for n in self.nested.iter() {
            debug!("nested @ {}: repeat {}, pos {}, tick: {}", n.start_time(), n.repeat_index(), n.stacked_position(), n.is_tick());
        }

        debug!(
            "slider @ {}: velocity {velocity}, tick distance {tick_distance}, end time {}, {} nested objects",
            self.start_time,
            self.end_time(),
            self.nested.len()
        );
        Ok(())
    }

    fn validate(&self, lookup: &impl TimingLookup, difficulty: &BeatmapDifficulty) -> TatakuResult {
        if self.repeat_count == 0 {
            return Err(BeatmapError::InvalidRepeatCount(self.repeat_count).into())
        }

        difficulty.validate()?;

        let beat_length = lookup.timing_point_at(self.start_time).beat_length;
        if !beat_length.is_finite() || beat_length <= 0.0 {
            return Err(BeatmapError::InvalidBeatLength { time: self.start_time, beat_length }.into())
        }

        let speed_multiplier = lookup.difficulty_point_at(self.start_time).speed_multiplier;
        if !speed_multiplier.is_finite() || speed_multiplier < 0.0 {
            return Err(BeatmapError::InvalidSpeedMultiplier { time: self.start_time, speed_multiplier }.into())
        }

        if self.repeat_count > 1 && self.repeat_samples.len() < self.repeat_count as usize {
            return Err(BeatmapError::MissingRepeatSamples {
                repeat_count: self.repeat_count,
                found: self.repeat_samples.len(),
            }.into())
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// straight slider from the origin along x
    fn slider(distance: f64, repeat_count: u32) -> Slider {
        let curve = SliderCurve::new(
            vec![Vector2::ZERO, Vector2::new(distance as f32, 0.0)],
            CurveType::Linear,
            distance
        );

        let repeat_samples = (0..repeat_count)
            .map(|i| vec![SampleInfo::new("normal", format!("edge{i}"), 100)])
            .collect();

        Slider::new(1000.0, Vector2::ZERO, curve, repeat_count)
            .with_samples(vec![SampleInfo::new("soft", "hitnormal", 80)], repeat_samples)
    }

    /// timing where velocity and tick distance come out as requested (slider multiplier 1)
    fn timing(velocity: f64, tick_distance: f64) -> (ControlPointInfo, BeatmapDifficulty) {
        let scoring_distance = BASE_SCORING_DISTANCE;
        let lookup = ControlPointInfo::new(
            vec![TimingPoint { time: 0.0, beat_length: scoring_distance / velocity, meter: 4 }],
            Vec::new()
        );
        let difficulty = BeatmapDifficulty {
            slider_multiplier: 1.0,
            slider_tick_rate: scoring_distance / tick_distance,
        };
        (lookup, difficulty)
    }

    fn ticks(slider: &Slider) -> Vec<&SliderTick> {
        slider.nested().iter().filter_map(|n| match n { NestedObject::Tick(t) => Some(t), _ => None }).collect()
    }
    fn repeats(slider: &Slider) -> Vec<&RepeatPoint> {
        slider.nested().iter().filter_map(|n| match n { NestedObject::Repeat(r) => Some(r), _ => None }).collect()
    }

    #[test]
    fn single_pass_with_two_ticks() {
        let mut s = slider(300.0, 1);
        let (lookup, difficulty) = timing(1.0, 100.0);
        s.apply_defaults(&lookup, &difficulty).unwrap();

        assert_eq!(s.velocity, 1.0);
        assert_eq!(s.tick_distance, 100.0);

        let ticks = ticks(&s);
        assert_eq!(ticks.len(), 2);
        assert_abs_diff_eq!(ticks[0].position.x, 100.0, epsilon = 0.001);
        assert_abs_diff_eq!(ticks[1].position.x, 200.0, epsilon = 0.001);
        assert_abs_diff_eq!(ticks[0].start_time, 1100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ticks[1].start_time, 1200.0, epsilon = 1e-9);
        assert!(repeats(&s).is_empty());

        assert_eq!(s.end_time(), 1300.0);
    }

    #[test]
    fn one_repeat() {
        let mut s = slider(200.0, 2);
        let (lookup, difficulty) = timing(2.0, 50.0);
        s.apply_defaults(&lookup, &difficulty).unwrap();

        let ticks = ticks(&s);
        assert_eq!(ticks.len(), 6);
        assert!(ticks[..3].iter().all(|t| t.repeat_index == 0));
        assert!(ticks[3..].iter().all(|t| t.repeat_index == 1));

        // first pass: 50, 100, 150 along the path at 25ms apart
        for (t, (x, time)) in ticks[..3].iter().zip([(50.0, 1025.0), (100.0, 1050.0), (150.0, 1075.0)]) {
            assert_abs_diff_eq!(t.position.x, x, epsilon = 0.001);
            assert_abs_diff_eq!(t.start_time, time, epsilon = 1e-9);
        }
        // second pass comes back, so the same spots in reverse order once sorted
        for (t, (x, time)) in ticks[3..].iter().zip([(150.0, 1125.0), (100.0, 1150.0), (50.0, 1175.0)]) {
            assert_abs_diff_eq!(t.position.x, x, epsilon = 0.001);
            assert_abs_diff_eq!(t.start_time, time, epsilon = 1e-9);
        }

        let repeats = repeats(&s);
        assert_eq!(repeats.len(), 1);
        assert_eq!(repeats[0].repeat_index, 1);
        assert_abs_diff_eq!(repeats[0].start_time, 1100.0, epsilon = 1e-9);
        assert_eq!(repeats[0].position, s.curve.unstacked_position_at(1.0));
        assert_eq!(repeats[0].samples, s.repeat_samples[1]);

        assert_abs_diff_eq!(s.end_time(), 1200.0, epsilon = 1e-9);
    }

    #[test]
    fn two_repeats() {
        let mut s = slider(90.0, 3);
        let (lookup, difficulty) = timing(9.0, 90.0);
        s.apply_defaults(&lookup, &difficulty).unwrap();

        assert_abs_diff_eq!(s.end_time(), 1030.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.duration(), 30.0, epsilon = 1e-9);

        let repeats = repeats(&s);
        assert_eq!(repeats.len(), 2);
        assert_eq!(repeats.iter().map(|r| r.repeat_index).collect::<Vec<_>>(), vec![1, 2]);
        assert_abs_diff_eq!(repeats[0].start_time, 1010.0, epsilon = 1e-9);
        assert_abs_diff_eq!(repeats[1].start_time, 1020.0, epsilon = 1e-9);
        assert_eq!(repeats[0].position, s.curve.unstacked_position_at(1.0));
        assert_eq!(repeats[1].position, s.curve.unstacked_position_at(0.0));

        // tick spacing equals the length, so the only candidate sits on the end
        assert!(ticks(&s).is_empty());
    }

    #[test]
    fn no_ticks_without_tick_distance() {
        let mut s = slider(300.0, 2);
        // a zero speed multiplier gives a zero scoring distance
        let lookup = ControlPointInfo::new(
            vec![TimingPoint { time: 0.0, beat_length: 500.0, meter: 4 }],
            vec![DifficultyPoint { time: 0.0, speed_multiplier: 0.0 }]
        );
        s.apply_defaults(&lookup, &BeatmapDifficulty::default()).unwrap();

        assert_eq!(s.tick_distance, 0.0);
        assert!(ticks(&s).is_empty());
        assert_eq!(repeats(&s).len(), 1);
    }

    #[test]
    fn zero_length_slider() {
        let mut s = slider(0.0, 3);
        let (lookup, difficulty) = timing(1.0, 100.0);
        s.apply_defaults(&lookup, &difficulty).unwrap();

        assert!(ticks(&s).is_empty());
        let repeats = repeats(&s);
        assert_eq!(repeats.len(), 2);
        assert!(repeats.iter().all(|r| r.start_time == 1000.0));
        assert_eq!(repeats[0].position, repeats[1].position);
    }

    #[test]
    fn nested_objects_are_in_time_order() {
        let mut s = slider(250.0, 5);
        let (lookup, difficulty) = timing(0.7, 33.0);
        s.apply_defaults(&lookup, &difficulty).unwrap();

        assert_eq!(repeats(&s).len(), 4);
        for pair in s.nested().windows(2) {
            assert!(pair[0].start_time() <= pair[1].start_time());
        }

        // ticks in each segment are strictly ordered and keep clear of the path end
        for repeat in 0..5 {
            let segment = ticks(&s).into_iter().filter(|t| t.repeat_index == repeat).collect::<Vec<_>>();
            assert!(!segment.is_empty());
            for pair in segment.windows(2) {
                assert!(pair[0].start_time < pair[1].start_time);
            }
            for t in segment {
                assert!(250.0 - t.position.x as f64 >= s.velocity * 0.01 - 1e-3);
            }
        }
    }

    #[test]
    fn apply_defaults_is_idempotent() {
        let mut s = slider(300.0, 3);
        let (lookup, difficulty) = timing(1.0, 100.0);

        s.apply_defaults(&lookup, &difficulty).unwrap();
        let first = s.nested().to_vec();
        s.apply_defaults(&lookup, &difficulty).unwrap();
        assert_eq!(s.nested(), &first[..]);

        // different timing replaces everything
        let (lookup, difficulty) = timing(2.0, 50.0);
        s.apply_defaults(&lookup, &difficulty).unwrap();
        assert_ne!(s.nested(), &first[..]);
        assert_eq!(s.velocity, 2.0);
    }

    #[test]
    fn tick_samples_use_the_tick_sound() {
        let mut s = slider(300.0, 1);
        let (lookup, difficulty) = timing(1.0, 100.0);
        s.apply_defaults(&lookup, &difficulty).unwrap();

        for t in ticks(&s) {
            assert_eq!(t.samples, vec![SampleInfo::new("soft", SLIDER_TICK_SAMPLE, 80)]);
        }
    }

    #[test]
    fn green_lines_change_velocity() {
        let mut s = slider(300.0, 1);
        let lookup = ControlPointInfo::from_osu_lines([
            "0,500,4,1,0,100,1,0",
            "500,-50,4,1,0,100,0,0",
        ]).unwrap();
        s.apply_defaults(&lookup, &BeatmapDifficulty { slider_multiplier: 1.4, slider_tick_rate: 1.0 }).unwrap();

        assert_abs_diff_eq!(s.velocity, 280.0 / 500.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.tick_distance, 280.0, epsilon = 1e-12);
    }

    #[test]
    fn bad_timing_is_rejected() {
        let mut s = slider(300.0, 1);
        let lookup = ControlPointInfo::new(vec![TimingPoint { time: 0.0, beat_length: 0.0, meter: 4 }], Vec::new());
        let err = s.apply_defaults(&lookup, &BeatmapDifficulty::default()).unwrap_err();
        assert!(matches!(err, TatakuError::Beatmap(BeatmapError::InvalidBeatLength { .. })));

        let (lookup, _) = timing(1.0, 100.0);
        let difficulty = BeatmapDifficulty { slider_tick_rate: 0.0, ..Default::default() };
        let err = s.apply_defaults(&lookup, &difficulty).unwrap_err();
        assert!(matches!(err, TatakuError::Beatmap(BeatmapError::InvalidTickRate(_))));

        // nothing was touched
        assert_eq!(s.velocity, 0.0);
        assert!(s.nested().is_empty());
    }

    #[test]
    fn bad_multipliers_are_rejected() {
        let (lookup, _) = timing(1.0, 100.0);
        for slider_multiplier in [-1.0, f64::NAN] {
            let mut s = slider(300.0, 1);
            let difficulty = BeatmapDifficulty { slider_multiplier, slider_tick_rate: 1.0 };
            let err = s.apply_defaults(&lookup, &difficulty).unwrap_err();
            assert!(matches!(err, TatakuError::Beatmap(BeatmapError::InvalidSliderMultiplier(_))));
            assert!(s.nested().is_empty());
        }

        // a green line with a negative multiplier, which the .osu parser can never produce
        let lookup = ControlPointInfo::new(
            vec![TimingPoint { time: 0.0, beat_length: 100.0, meter: 4 }],
            vec![DifficultyPoint { time: 0.0, speed_multiplier: -2.0 }]
        );
        let mut s = slider(300.0, 1);
        let err = s.apply_defaults(&lookup, &BeatmapDifficulty::default()).unwrap_err();
        assert!(matches!(
            err,
            TatakuError::Beatmap(BeatmapError::InvalidSpeedMultiplier { time, speed_multiplier }) if time == 1000.0 && speed_multiplier == -2.0
        ));
        assert_eq!(s.velocity, 0.0);
        assert!(s.nested().is_empty());
    }

    #[test]
    fn missing_repeat_samples_are_rejected() {
        let mut s = slider(300.0, 3);
        s.repeat_samples.truncate(2);

        let (lookup, difficulty) = timing(1.0, 100.0);
        let err = s.apply_defaults(&lookup, &difficulty).unwrap_err();
        assert!(matches!(err, TatakuError::Beatmap(BeatmapError::MissingRepeatSamples { repeat_count: 3, found: 2 })));

        // a single pass never looks at them
        let mut s = slider(300.0, 1);
        s.repeat_samples.clear();
        assert!(s.apply_defaults(&lookup, &difficulty).is_ok());
    }

    #[test]
    fn zero_repeat_count_is_rejected() {
        let mut s = slider(300.0, 1);
        s.repeat_count = 0;

        let (lookup, difficulty) = timing(1.0, 100.0);
        assert!(matches!(
            s.apply_defaults(&lookup, &difficulty),
            Err(TatakuError::Beatmap(BeatmapError::InvalidRepeatCount(0)))
        ));
    }

    #[test]
    fn stacking_only_moves_the_curve() {
        let mut s = slider(300.0, 2);
        let (lookup, difficulty) = timing(1.0, 100.0);
        s.apply_defaults(&lookup, &difficulty).unwrap();

        let times = s.nested().iter().map(|n| n.start_time()).collect::<Vec<_>>();
        let (velocity, tick_distance) = (s.velocity, s.tick_distance);
        let head = s.position_at(0.0);

        s.set_stack_height(2);
        assert_eq!(s.stack_height(), 2);
        assert_eq!(s.curve.offset(), Vector2::new(-12.8, -12.8));
        assert_eq!(s.position_at(0.0), head + Vector2::new(-12.8, -12.8));

        assert_eq!(s.velocity, velocity);
        assert_eq!(s.tick_distance, tick_distance);
        assert_eq!(s.nested().iter().map(|n| n.start_time()).collect::<Vec<_>>(), times);
        assert!(ticks(&s).iter().all(|t| t.stack_height == 2));
        for n in s.nested() {
            assert_eq!(n.stacked_position(), n.position() + Vector2::new(-12.8, -12.8));
        }

        // same height, same offset, no matter what came before
        s.set_stack_height(5);
        s.set_stack_height(2);
        assert_eq!(s.curve.offset(), Vector2::new(-12.8, -12.8));

        s.set_stack_height(0);
        assert_eq!(s.curve.offset(), Vector2::ZERO);
    }

    #[test]
    fn stacking_before_or_after_apply_defaults_agrees() {
        let (lookup, difficulty) = timing(1.0, 100.0);

        let mut applied_first = slider(300.0, 2);
        applied_first.apply_defaults(&lookup, &difficulty).unwrap();
        applied_first.set_stack_height(2);

        let mut stacked_first = slider(300.0, 2);
        stacked_first.set_stack_height(2);
        stacked_first.apply_defaults(&lookup, &difficulty).unwrap();

        assert_eq!(applied_first.nested(), stacked_first.nested());
        assert_eq!(applied_first.curve.offset(), stacked_first.curve.offset());

        let ticks = ticks(&stacked_first);
        assert_abs_diff_eq!(ticks[0].position.x, 100.0, epsilon = 0.001);
        assert_abs_diff_eq!(ticks[0].stacked_position().x, 87.2, epsilon = 0.001);
        assert_abs_diff_eq!(ticks[0].stacked_position().y, -12.8, epsilon = 0.001);
    }

    #[test]
    fn bounce_positions() {
        let mut s = slider(300.0, 2);
        let (lookup, difficulty) = timing(1.0, 100.0);
        s.apply_defaults(&lookup, &difficulty).unwrap();

        assert_abs_diff_eq!(s.position_at(0.25).x, 150.0, epsilon = 0.001);
        assert_abs_diff_eq!(s.position_at(0.5).x, 300.0, epsilon = 0.001);
        assert_abs_diff_eq!(s.position_at(0.75).x, 150.0, epsilon = 0.001);
        assert_abs_diff_eq!(s.end_position().x, 0.0, epsilon = 0.001);
        assert_eq!(s.repeat_at(0.75), 1);
    }

    #[test]
    fn lazy_fields_start_empty() {
        let s = slider(100.0, 1);
        assert!(s.lazy_end_position.is_none());
        assert!(s.lazy_travel_distance.is_none());
    }
}
