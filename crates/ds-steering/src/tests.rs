use ds_core::Vec2;

use crate::behaviors::{arrive, obstacle_avoidance, seek, wall_avoidance, ARRIVE_EPSILON};
use crate::combine::{combined_force, SteeringParams, SteeringTarget};
use crate::obstacle::{room_walls, ObstacleView, WallSegment};

const MAX_SPEED: f32 = 720.0;

fn assert_close(a: Vec2, b: Vec2, tolerance: f32) {
    assert!(
        a.distance(b) <= tolerance,
        "expected {b}, got {a} (tolerance {tolerance})"
    );
}

mod seek_arrive {
    use super::*;

    #[test]
    fn seek_heads_at_full_speed_toward_target() {
        let force = seek(Vec2::new(100.0, 100.0), Vec2::new(500.0, 100.0), MAX_SPEED, Vec2::ZERO);
        assert_close(force, Vec2::new(MAX_SPEED, 0.0), 1e-3);
    }

    #[test]
    fn seek_subtracts_current_velocity() {
        let velocity = Vec2::new(200.0, -50.0);
        let force = seek(Vec2::new(0.0, 0.0), Vec2::new(0.0, 300.0), MAX_SPEED, velocity);
        assert_close(force, Vec2::new(0.0, MAX_SPEED) - velocity, 1e-3);
    }

    #[test]
    fn seek_at_target_is_pure_damping() {
        let velocity = Vec2::new(80.0, 80.0);
        let p = Vec2::new(33.0, 44.0);
        assert_close(seek(p, p, MAX_SPEED, velocity), -velocity, 1e-6);
    }

    #[test]
    fn arrive_slows_linearly_inside_slow_radius() {
        let slow_radius = 80.0;
        // Halfway into the slow radius: desired speed is half of max.
        let force = arrive(
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, 0.0),
            MAX_SPEED,
            Vec2::ZERO,
            slow_radius,
        );
        assert_close(force, Vec2::new(MAX_SPEED / 2.0, 0.0), 1e-2);
    }

    #[test]
    fn arrive_is_full_speed_outside_slow_radius() {
        let force = arrive(
            Vec2::new(0.0, 0.0),
            Vec2::new(400.0, 0.0),
            MAX_SPEED,
            Vec2::ZERO,
            80.0,
        );
        assert_close(force, Vec2::new(MAX_SPEED, 0.0), 1e-2);
    }

    #[test]
    fn arrive_within_epsilon_negates_velocity_for_any_velocity() {
        let target = Vec2::new(250.0, 250.0);
        let position = target + Vec2::new(ARRIVE_EPSILON * 0.5, 0.0);
        for velocity in [
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(-300.0, 120.0),
            Vec2::new(0.0, MAX_SPEED),
        ] {
            assert_close(arrive(position, target, MAX_SPEED, velocity, 80.0), -velocity, 1e-6);
        }
    }
}

mod walls {
    use super::*;

    #[test]
    fn room_wall_normals_face_inward() {
        let walls = room_walls(800.0, 600.0);
        let center = Vec2::new(400.0, 300.0);
        for wall in walls {
            let midpoint = (wall.a + wall.b) * 0.5;
            // Normal must point from the wall toward the interior.
            assert!(wall.normal().dot(center - midpoint) > 0.0, "wall {wall:?}");
        }
    }

    #[test]
    fn no_force_far_from_walls() {
        let walls = room_walls(800.0, 600.0);
        let force = wall_avoidance(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0), &walls, 50.0);
        assert_eq!(force, Vec2::ZERO);
    }

    #[test]
    fn approaching_a_wall_pushes_back_inward() {
        let walls = room_walls(800.0, 600.0);
        // Heading straight at the right wall from 30 px away with 50 px
        // feelers: the ahead feeler overshoots by 20 px.
        let force = wall_avoidance(Vec2::new(770.0, 300.0), Vec2::new(120.0, 0.0), &walls, 50.0);
        assert!(force.x < 0.0, "push must oppose the wall, got {force}");
        assert_close(force, Vec2::new(-20.0, 0.0), 1e-3);
    }

    #[test]
    fn diagonal_feeler_detects_oblique_wall() {
        let walls = room_walls(800.0, 600.0);
        // Moving parallel to the top wall, close to it: only the ±45°
        // feelers can hit.  50 px feeler reaches ~35 px vertically.
        let force = wall_avoidance(Vec2::new(400.0, 20.0), Vec2::new(150.0, 0.0), &walls, 50.0);
        assert!(force.y > 0.0, "expected downward push, got {force}");
    }

    #[test]
    fn stationary_agent_feels_walls_along_fallback_heading() {
        let walls = [WallSegment::new(Vec2::new(430.0, 0.0), Vec2::new(430.0, 600.0))];
        let force = wall_avoidance(Vec2::new(400.0, 300.0), Vec2::ZERO, &walls, 50.0);
        assert!(force.length() > 0.0);
    }
}

mod obstacles {
    use super::*;

    const RADIUS: f32 = 12.0;

    #[test]
    fn empty_obstacle_list_is_zero_force() {
        let force = obstacle_avoidance(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            RADIUS,
            MAX_SPEED,
            &[],
            120.0,
        );
        assert_eq!(force, Vec2::ZERO);
    }

    #[test]
    fn obstacle_behind_is_ignored() {
        let obstacles = [ObstacleView::new(Vec2::new(-60.0, 0.0), 20.0)];
        let force = obstacle_avoidance(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            RADIUS,
            MAX_SPEED,
            &obstacles,
            120.0,
        );
        assert_eq!(force, Vec2::ZERO);
    }

    #[test]
    fn obstacle_outside_lateral_reach_is_ignored() {
        // Ahead but offset laterally past the combined radii (20 + 12).
        let obstacles = [ObstacleView::new(Vec2::new(60.0, 50.0), 20.0)];
        let force = obstacle_avoidance(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            RADIUS,
            MAX_SPEED,
            &obstacles,
            120.0,
        );
        assert_eq!(force, Vec2::ZERO);
    }

    #[test]
    fn obstacle_ahead_produces_lateral_push_and_braking() {
        // Dead ahead, slightly offset to +y: the push must be to -y and
        // the braking term must oppose the heading.
        let obstacles = [ObstacleView::new(Vec2::new(60.0, 5.0), 20.0)];
        let force = obstacle_avoidance(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            RADIUS,
            MAX_SPEED,
            &obstacles,
            120.0,
        );
        assert!(force.length() > 0.0);
        assert!(force.x < 0.0, "expected braking, got {force}");
        // heading = +x, side = (0, 1) in screen space; radius(20) - local_y(5)
        // is positive, so the local lateral push is +y.
        assert!(force.y > 0.0, "expected push away, got {force}");
    }

    #[test]
    fn nearest_of_two_obstacles_wins() {
        let near = ObstacleView::new(Vec2::new(50.0, 4.0), 20.0);
        let far = ObstacleView::new(Vec2::new(110.0, -4.0), 20.0);
        let both = obstacle_avoidance(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            RADIUS,
            MAX_SPEED,
            &[near, far],
            120.0,
        );
        let near_only = obstacle_avoidance(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            RADIUS,
            MAX_SPEED,
            &[near],
            120.0,
        );
        assert_close(both, near_only, 1e-4);
    }

    #[test]
    fn detection_box_grows_with_speed() {
        // An obstacle at 200 px is outside the 120 px base box for a slow
        // agent but inside the speed-scaled box at full speed.
        let obstacles = [ObstacleView::new(Vec2::new(200.0, 0.0), 20.0)];
        let slow = obstacle_avoidance(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            RADIUS,
            MAX_SPEED,
            &obstacles,
            120.0,
        );
        let fast = obstacle_avoidance(
            Vec2::ZERO,
            Vec2::new(MAX_SPEED, 0.0),
            RADIUS,
            MAX_SPEED,
            &obstacles,
            120.0,
        );
        assert_eq!(slow, Vec2::ZERO);
        assert!(fast.length() > 0.0);
    }
}

mod combiner {
    use super::*;

    #[test]
    fn combined_force_is_clamped_to_max_force() {
        let params = SteeringParams::default();
        let walls = room_walls(800.0, 600.0);
        let obstacles = [ObstacleView::new(Vec2::new(430.0, 302.0), 20.0)];
        let force = combined_force(
            Vec2::new(400.0, 300.0),
            Vec2::new(MAX_SPEED, 0.0),
            SteeringTarget::Seek(Vec2::new(790.0, 300.0)),
            &walls,
            &obstacles,
            &params,
        );
        assert!(force.length() <= params.max_force + 1e-3);
    }

    #[test]
    fn open_floor_reduces_to_weighted_path_term() {
        let params = SteeringParams::default();
        let walls = room_walls(800.0, 600.0);
        let position = Vec2::new(400.0, 300.0);
        let velocity = Vec2::new(50.0, 0.0);
        let target = Vec2::new(500.0, 300.0);
        let combined = combined_force(
            position,
            velocity,
            SteeringTarget::Seek(target),
            &walls,
            &[],
            &params,
        );
        let path_only =
            seek(position, target, params.max_speed, velocity).truncated(params.max_force);
        assert_close(combined, path_only, 1e-3);
    }

    #[test]
    fn avoidance_outweighs_path_following() {
        let params = SteeringParams::default();
        let walls = room_walls(800.0, 600.0);
        // Obstacle squarely between agent and target, slightly offset so
        // the lateral push has a definite sign.
        let obstacles = [ObstacleView::new(Vec2::new(460.0, 304.0), 20.0)];
        let force = combined_force(
            Vec2::new(400.0, 300.0),
            Vec2::new(200.0, 0.0),
            SteeringTarget::Seek(Vec2::new(600.0, 300.0)),
            &walls,
            &obstacles,
            &params,
        );
        // The path term alone has zero lateral component; the weighted
        // obstacle push (away from the +y offset) must dominate it.
        assert!(force.y > 0.0, "got {force}");
    }
}
