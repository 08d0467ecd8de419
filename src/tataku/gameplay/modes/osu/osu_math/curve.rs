use crate::prelude::*;
use super::super::prelude::*;

/// anything a slider can be laid along.
/// progress is 0 at the head and 1 at the tail
pub trait SliderPath {
    fn position_at(&self, progress: f64) -> Vector2;
    fn length(&self) -> f64;
}


#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveType {
    #[default]
    Linear,
    Bezier,
    Catmull,
    PerfectCircle,
}
impl CurveType {
    /// from the single letter used in .osu hitobject lines
    pub fn from_osu_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Self::Linear),
            'B' => Some(Self::Bezier),
            'C' => Some(Self::Catmull),
            'P' => Some(Self::PerfectCircle),
            _ => None
        }
    }
}


/// a slider's path. the control points are flattened into a polyline once, on creation
/// (and whenever they change), so lookups are just a binary search
#[derive(Clone, Debug, PartialEq)]
pub struct SliderCurve {
    control_points: Vec<Vector2>,
    curve_type: CurveType,
    /// authored length, the polyline gets cut to this
    distance: f64,
    /// visual offset added to every position (stacking)
    offset: Vector2,

    calculated_path: Vec<Vector2>,
    cumulative_length: Vec<f64>,
}
impl SliderCurve {
    pub fn new(control_points: Vec<Vector2>, curve_type: CurveType, distance: f64) -> Self {
        let mut curve = Self {
            control_points,
            curve_type,
            distance,
            offset: Vector2::ZERO,

            calculated_path: Vec::new(),
            cumulative_length: Vec::new(),
        };
        curve.calculate();
        curve
    }

    pub fn control_points(&self) -> &[Vector2] { &self.control_points }
    pub fn curve_type(&self) -> CurveType { self.curve_type }
    pub fn distance(&self) -> f64 { self.distance }
    pub fn offset(&self) -> Vector2 { self.offset }
    /// the flattened, trimmed polyline (without the offset)
    pub fn calculated_path(&self) -> &[Vector2] { &self.calculated_path }

    pub fn set_control_points(&mut self, control_points: Vec<Vector2>) {
        self.control_points = control_points;
        self.calculate();
    }
    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        self.curve_type = curve_type;
        self.calculate();
    }
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
        self.calculate();
    }

    /// only moves where the curve is drawn, the path itself stays the same
    pub fn set_offset(&mut self, offset: Vector2) {
        self.offset = offset;
    }

    /// position along the path ignoring the offset
    pub fn unstacked_position_at(&self, progress: f64) -> Vector2 {
        let d = progress.clamp(0.0, 1.0) * self.distance;
        self.interpolate_vertices(self.index_of_distance(d), d)
    }
    pub fn unstacked(&self) -> UnstackedCurve<'_> {
        UnstackedCurve(self)
    }

    fn calculate(&mut self) {
        self.calculated_path = Self::flatten(&self.control_points, self.curve_type);
        self.trim_to_distance();
    }

    fn flatten(points: &[Vector2], curve_type: CurveType) -> Vec<Vector2> {
        if points.len() < 2 { return points.to_vec() }

        match curve_type {
            CurveType::Linear => points.to_vec(),

            CurveType::Bezier => {
                let mut path: Vec<Vector2> = Vec::new();
                let mut push_segment = |segment: &[Vector2]| {
                    let sampled = if segment.len() == 2 {
                        // this segment is a line
                        segment.to_vec()
                    } else {
                        create_bezier(segment)
                    };

                    for p in sampled {
                        if path.last() != Some(&p) { path.push(p) }
                    }
                };

                // a repeated point starts a new segment
                let mut last_index = 0;
                for i in 1..points.len() {
                    if i + 1 < points.len() && points[i] == points[i + 1] {
                        push_segment(&points[last_index..=i]);
                        last_index = i + 1;
                    }
                }
                push_segment(&points[last_index..]);

                path
            }

            CurveType::Catmull => {
                let mut path = Vec::new();
                for j in 0..points.len() - 1 {
                    let v1 = if j >= 1 { points[j - 1] } else { points[j] };
                    let v2 = points[j];
                    let v3 = points[j + 1];
                    let v4 = if j + 2 < points.len() { points[j + 2] } else { v3 + (v3 - v2) };

                    for k in 0..=SLIDER_DETAIL_LEVEL {
                        let p = catmull_rom(v1, v2, v3, v4, k as f32 / SLIDER_DETAIL_LEVEL as f32);
                        if path.last() != Some(&p) { path.push(p) }
                    }
                }
                path
            }

            CurveType::PerfectCircle => {
                // we may have 2 points when building the circle.
                if points.len() < 3 { return Self::flatten(points, CurveType::Linear) }
                // more than 3 -> ignore them.
                if points.len() > 3 { return Self::flatten(points, CurveType::Bezier) }

                let (a, b, c) = (points[0], points[1], points[2]);

                // all 3 points are on a straight line, avoid undefined behaviour
                if is_straight_line(a, b, c) { return Self::flatten(points, CurveType::Linear) }

                let (center, radius, t_initial, t_final) = circle_through_points(a, b, c);
                let curve_length = ((t_final - t_initial) * radius).abs();
                let segments = ((curve_length * 0.125) as u32).max(2);

                let mut path = Vec::with_capacity(segments as usize + 1);
                path.push(a);
                for i in 1..segments {
                    let progress = i as f32 / segments as f32;
                    let t = t_final * progress + t_initial * (1.0 - progress);
                    path.push(circle_point(center, radius, t));
                }
                path.push(c);
                path
            }
        }
    }

    /// fill the cumulative lengths, cutting the path off where it passes the authored distance
    fn trim_to_distance(&mut self) {
        self.cumulative_length.clear();
        if self.calculated_path.is_empty() { return }

        let mut total = 0.0;
        self.cumulative_length.push(total);

        for i in 0..self.calculated_path.len() - 1 {
            let diff = self.calculated_path[i + 1] - self.calculated_path[i];
            let mut d = diff.length() as f64;
            if d.is_nan() { d = 0.0 }

            // curve is longer than it should be, shorten this segment and drop the rest
            if self.distance - total < d {
                let amount = ((self.distance - total) / d) as f32;
                self.calculated_path[i + 1] = self.calculated_path[i] + diff * amount;
                self.calculated_path.truncate(i + 2);

                total = self.distance;
                self.cumulative_length.push(total);
                break;
            }

            total += d;
            self.cumulative_length.push(total);
        }
    }

    /// index of the first vertex whose cumulative length is at least `d`
    fn index_of_distance(&self, d: f64) -> usize {
        self.cumulative_length.partition_point(|&l| l < d)
    }

    fn interpolate_vertices(&self, i: usize, d: f64) -> Vector2 {
        let Some(last) = self.calculated_path.last() else { return Vector2::ZERO };

        if i == 0 { return self.calculated_path[0] }
        if i >= self.calculated_path.len() { return *last }

        let p0 = self.calculated_path[i - 1];
        let p1 = self.calculated_path[i];

        let d0 = self.cumulative_length[i - 1];
        let d1 = self.cumulative_length[i];

        // two points basically on top of each other
        if (d1 - d0).abs() < 1e-7 { return p0 }

        let w = (d - d0) / (d1 - d0);
        p0 + (p1 - p0) * w as f32
    }
}
impl SliderPath for SliderCurve {
    fn position_at(&self, progress: f64) -> Vector2 {
        self.unstacked_position_at(progress) + self.offset
    }

    fn length(&self) -> f64 { self.distance }
}

/// a curve viewed without its stack offset
#[derive(Copy, Clone, Debug)]
pub struct UnstackedCurve<'a>(&'a SliderCurve);
impl SliderPath for UnstackedCurve<'_> {
    fn position_at(&self, progress: f64) -> Vector2 {
        self.0.unstacked_position_at(progress)
    }

    fn length(&self) -> f64 { self.0.distance }
}
