use std::ops::*;

/// playfield-space point, wraps cgmath so the rest of the crate doesnt need to care
#[derive(Copy, Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f32;2]", into = "[f32;2]")]
pub struct Vector2(cgmath::Vector2<f32>);
impl Vector2 {
    pub const ZERO: Self = Self(cgmath::Vector2::new(0.0, 0.0));
    pub const ONE: Self = Self(cgmath::Vector2::new(1.0, 1.0));

    pub const fn new(x: f32, y: f32) -> Self { Self(cgmath::Vector2::new(x, y)) }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance(&self, p2: Self) -> f32 {
        self.distance_squared(p2).sqrt()
    }
    pub fn distance_squared(&self, p2: Self) -> f32 {
        (self.x - p2.x).powi(2) + (self.y - p2.y).powi(2)
    }

    pub fn lerp(start: Self, end: Self, amount: f32) -> Self {
        if amount == 0.0 { return start }
        if amount == 1.0 { return end }
        start + (end - start) * amount
    }
}

impl Deref for Vector2 {
    type Target = cgmath::Vector2<f32>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for Vector2 {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<[f32;2]> for Vector2 {
    fn from(value: [f32;2]) -> Self {
        Self::new(value[0], value[1])
    }
}
impl From<Vector2> for [f32;2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl Default for Vector2 {
    fn default() -> Self { Self::ZERO }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

// add
impl Add<Vector2> for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// sub
impl Sub<Vector2> for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Self::Output {
        self + -rhs
    }
}

// mul
impl Mul<f32> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}
