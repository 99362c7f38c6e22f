//! Weighted blending of the individual behaviors into one clamped force.

use ds_core::Vec2;

use crate::behaviors::{arrive, obstacle_avoidance, seek, wall_avoidance};
use crate::obstacle::{ObstacleView, WallSegment};

/// Path-following term: full speed toward a mid-path waypoint, or
/// decelerating arrival at the final one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SteeringTarget {
    Seek(Vec2),
    Arrive { target: Vec2, slow_radius: f32 },
}

/// Tuning constants for one agent class.  Defaults are the servo profile.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringParams {
    /// Top speed, px/s.
    pub max_speed: f32,
    /// Clamp on the combined force magnitude.
    pub max_force: f32,
    /// Collision radius, px.
    pub radius: f32,
    /// Wall feeler length, px.
    pub feeler_length: f32,
    /// Base detection-box length, px (grows with speed).
    pub detection_box: f32,
    /// Weight on the path-following term.
    pub path_weight: f32,
    /// Weight on wall avoidance.
    pub wall_weight: f32,
    /// Weight on obstacle avoidance.
    pub obstacle_weight: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            max_speed:       720.0,
            max_force:       720.0 * 1.5,
            radius:          12.0,
            feeler_length:   50.0,
            detection_box:   120.0,
            path_weight:     1.0,
            wall_weight:     3.0,
            obstacle_weight: 5.0,
        }
    }
}

/// Blend path-following, wall avoidance, and obstacle avoidance into a
/// single force, clamped to `params.max_force`.
///
/// Avoidance outweighs path-following (3× and 5× against 1×): an agent
/// will trade path fidelity for not walking through a table.
pub fn combined_force(
    position: Vec2,
    velocity: Vec2,
    target: SteeringTarget,
    walls: &[WallSegment],
    obstacles: &[ObstacleView],
    params: &SteeringParams,
) -> Vec2 {
    let path = match target {
        SteeringTarget::Seek(t) => seek(position, t, params.max_speed, velocity),
        SteeringTarget::Arrive { target, slow_radius } => {
            arrive(position, target, params.max_speed, velocity, slow_radius)
        }
    };
    let wall = wall_avoidance(position, velocity, walls, params.feeler_length);
    let obstacle = obstacle_avoidance(
        position,
        velocity,
        params.radius,
        params.max_speed,
        obstacles,
        params.detection_box,
    );

    let total = path * params.path_weight
        + wall * params.wall_weight
        + obstacle * params.obstacle_weight;
    total.truncated(params.max_force)
}
