//! Uniform obstacle and wall records consumed by the avoidance behaviors.

use ds_core::Vec2;

/// What avoidance needs to know about any obstacle — another agent, a
/// table, a seated customer.  One record shape for every variant, built
/// fresh each tick by the world.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleView {
    pub position: Vec2,
    pub radius:   f32,
}

impl ObstacleView {
    #[inline]
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self { position, radius }
    }
}

/// A wall as a directed segment.  Winding matters: the inward normal is
/// the +90° perpendicular of `b - a`, so walls are wound with the room
/// interior on their left-hand side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallSegment {
    pub a: Vec2,
    pub b: Vec2,
}

impl WallSegment {
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Unit normal pointing into the room.
    #[inline]
    pub fn normal(self) -> Vec2 {
        (self.b - self.a).perp().normalized()
    }
}

/// The four boundary walls of a `width × height` room, wound so every
/// normal faces inward.
pub fn room_walls(width: f32, height: f32) -> [WallSegment; 4] {
    [
        WallSegment::new(Vec2::new(0.0, 0.0), Vec2::new(width, 0.0)),
        WallSegment::new(Vec2::new(width, 0.0), Vec2::new(width, height)),
        WallSegment::new(Vec2::new(width, height), Vec2::new(0.0, height)),
        WallSegment::new(Vec2::new(0.0, height), Vec2::new(0.0, 0.0)),
    ]
}
