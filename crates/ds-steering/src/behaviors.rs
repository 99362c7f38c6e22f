//! The four steering behaviors.  All are pure functions returning a
//! world-space force to be blended by [`combine`](crate::combine).

use ds_core::Vec2;

use crate::obstacle::{ObstacleView, WallSegment};

/// Below this distance `arrive` stops steering and purely damps velocity.
pub const ARRIVE_EPSILON: f32 = 0.1;

/// Braking share of the longitudinal obstacle-avoidance force.
pub const BRAKING_WEIGHT: f32 = 0.2;

// ── Path following ────────────────────────────────────────────────────────────

/// Head straight for `target` at full speed.
///
/// Desired velocity is the direction to the target scaled to `max_speed`
/// (zero when already on top of it); the force is the difference from the
/// current velocity.
pub fn seek(position: Vec2, target: Vec2, max_speed: f32, velocity: Vec2) -> Vec2 {
    let desired = (target - position).scaled_to(max_speed);
    desired - velocity
}

/// Like [`seek`] but decelerating inside `slow_radius`.
///
/// Desired speed falls linearly with distance inside the radius.  Within
/// [`ARRIVE_EPSILON`] of the target the force is exactly `-velocity`, a
/// pure damping term that converges without oscillating.
pub fn arrive(
    position: Vec2,
    target: Vec2,
    max_speed: f32,
    velocity: Vec2,
    slow_radius: f32,
) -> Vec2 {
    let to_target = target - position;
    let dist = to_target.length();
    if dist < ARRIVE_EPSILON {
        return -velocity;
    }
    let speed = if dist < slow_radius {
        max_speed * (dist / slow_radius)
    } else {
        max_speed
    };
    to_target.scaled_to(speed) - velocity
}

// ── Wall avoidance ────────────────────────────────────────────────────────────

/// Intersection of the segment `p1p2` with the line through `p3p4`,
/// reported as the distance from `p1` and the hit point.  `t` is clamped
/// to the open interval so touching an endpoint does not count as a hit.
fn feeler_hit(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<(f32, Vec2)> {
    let den = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if den == 0.0 {
        return None;
    }
    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / den;
    let u = -((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x)) / den;
    if t > 0.0 && t < 1.0 && u > 0.0 {
        let point = p1 + (p2 - p1) * t;
        Some((p1.distance(point), point))
    } else {
        None
    }
}

/// Cast three feelers (straight ahead, ±45° off heading) of
/// `feeler_length` and push back along the inward normal of the nearest
/// intersected wall, scaled by how far the feeler overshoots the wall.
///
/// Zero force when nothing intersects.  A zero velocity casts feelers
/// along +x so a stationary agent pressed against a wall still reacts.
pub fn wall_avoidance(
    position: Vec2,
    velocity: Vec2,
    walls: &[WallSegment],
    feeler_length: f32,
) -> Vec2 {
    let heading = if velocity.length() > 0.0 {
        velocity.normalized()
    } else {
        Vec2::new(1.0, 0.0)
    };

    let feelers = [
        position + heading * feeler_length,
        position + heading.rotated(-45.0) * feeler_length,
        position + heading.rotated(45.0) * feeler_length,
    ];

    let mut closest: Option<(f32, Vec2, Vec2, WallSegment)> = None;
    for &feeler in &feelers {
        for &wall in walls {
            if let Some((dist, point)) = feeler_hit(position, feeler, wall.a, wall.b) {
                let nearer = closest.as_ref().is_none_or(|&(best, ..)| dist < best);
                if nearer {
                    closest = Some((dist, point, feeler, wall));
                }
            }
        }
    }

    match closest {
        Some((_, point, feeler, wall)) => {
            let overshoot = feeler - point;
            wall.normal() * overshoot.length()
        }
        None => Vec2::ZERO,
    }
}

// ── Obstacle avoidance ────────────────────────────────────────────────────────

/// World point expressed in the agent's local frame (x along `heading`,
/// y along `side`).
#[inline]
fn to_local(point: Vec2, origin: Vec2, heading: Vec2, side: Vec2) -> Vec2 {
    let rel = point - origin;
    Vec2::new(rel.dot(heading), rel.dot(side))
}

/// Local vector re-expressed in world space.
#[inline]
fn to_world(v: Vec2, heading: Vec2, side: Vec2) -> Vec2 {
    Vec2::new(
        v.x * heading.x + v.y * side.x,
        v.x * heading.y + v.y * side.y,
    )
}

/// Detection-box avoidance of circular obstacles.
///
/// Obstacles are transformed into the agent's local frame; only those
/// ahead and inside a detection box (base length grown by the current
/// speed fraction) are considered.  Among those whose lateral offset is
/// within the combined radii, the nearest circle intersection along the
/// forward axis wins, and the force is a lateral push away from it scaled
/// by closeness, plus a braking term at [`BRAKING_WEIGHT`].
pub fn obstacle_avoidance(
    position: Vec2,
    velocity: Vec2,
    agent_radius: f32,
    max_speed: f32,
    obstacles: &[ObstacleView],
    box_length: f32,
) -> Vec2 {
    if obstacles.is_empty() {
        return Vec2::ZERO;
    }

    let heading = if velocity.length() > 0.0 {
        velocity.normalized()
    } else {
        Vec2::new(1.0, 0.0)
    };
    let side = heading.perp();

    let d_box = box_length + (velocity.length() / max_speed) * box_length;

    let mut closest: Option<(f32, Vec2, f32)> = None;
    for obstacle in obstacles {
        let local = to_local(obstacle.position, position, heading, side);
        if local.x < 0.0 || local.x >= d_box {
            continue;
        }
        let expanded = obstacle.radius + agent_radius;
        if local.y.abs() >= expanded {
            continue;
        }
        let sqrt_part = (expanded * expanded - local.y * local.y).sqrt();
        let mut ip = local.x - sqrt_part;
        if ip <= 0.0 {
            ip = local.x + sqrt_part;
        }
        let nearer = closest.as_ref().is_none_or(|&(best, ..)| ip < best);
        if nearer {
            closest = Some((ip, local, obstacle.radius));
        }
    }

    match closest {
        Some((_, local, radius)) => {
            let multiplier = 1.0 + (d_box - local.x) / d_box;
            let force = Vec2::new(
                (radius - local.x) * BRAKING_WEIGHT,
                (radius - local.y) * multiplier,
            );
            to_world(force, heading, side)
        }
        None => Vec2::ZERO,
    }
}
