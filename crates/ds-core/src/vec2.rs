//! Planar vector type used for all continuous-space math.
//!
//! `Vec2` uses `f32` throughout — positions are measured in pixels on an
//! 800×600 floor, so single precision leaves ~5 decimal digits of headroom
//! and halves the footprint of every kinematic array.
//!
//! Coordinates are screen-style: x grows right, y grows down.  `rotated` and
//! `perp` follow the same convention the steering math was derived in, so a
//! +90° rotation of a heading yields the agent's "side" axis.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2-D vector / point in world (pixel) space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction, or `Vec2::ZERO` for the zero vector.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len > 0.0 { self * (1.0 / len) } else { Vec2::ZERO }
    }

    /// Same direction, magnitude exactly `len`.  Zero vectors stay zero.
    pub fn scaled_to(self, len: f32) -> Vec2 {
        self.normalized() * len
    }

    /// Clamp the magnitude to at most `max`.
    pub fn truncated(self, max: f32) -> Vec2 {
        if self.length() > max { self.scaled_to(max) } else { self }
    }

    /// Rotate counterclockwise (in the x-right/y-down frame) by `degrees`.
    pub fn rotated(self, degrees: f32) -> Vec2 {
        let rad = degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// The +90° perpendicular — the "side" axis for a heading vector.
    #[inline]
    pub fn perp(self) -> Vec2 {
        Vec2 { x: -self.y, y: self.x }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
