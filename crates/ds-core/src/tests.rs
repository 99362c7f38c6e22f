//! Unit tests for ds-core.

mod vec2 {
    use crate::Vec2;

    #[test]
    fn length_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        let n = v.normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_is_safe() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        assert_eq!(Vec2::ZERO.scaled_to(10.0), Vec2::ZERO);
    }

    #[test]
    fn truncate_clamps_only_long_vectors() {
        let v = Vec2::new(10.0, 0.0);
        assert_eq!(v.truncated(5.0), Vec2::new(5.0, 0.0));
        assert_eq!(v.truncated(20.0), v);
    }

    #[test]
    fn perp_matches_quarter_turn() {
        let h = Vec2::new(1.0, 0.0);
        let side = h.perp();
        assert!((side.x - 0.0).abs() < 1e-6);
        assert!((side.y - 1.0).abs() < 1e-6);

        let rotated = h.rotated(90.0);
        assert!((rotated.x - side.x).abs() < 1e-5);
        assert!((rotated.y - side.y).abs() < 1e-5);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(2.0, -7.0);
        for deg in [-45.0_f32, 45.0, 90.0, 180.0] {
            assert!((v.rotated(deg).length() - v.length()).abs() < 1e-4);
        }
    }
}

mod cell {
    use crate::GridCell;

    #[test]
    fn manhattan_distance() {
        let a = GridCell::new(1, 1);
        let b = GridCell::new(4, -2);
        assert_eq!(a.manhattan(b), 6);
        assert_eq!(b.manhattan(a), 6);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn neighbors_are_adjacent_and_distinct() {
        let c = GridCell::new(3, 3);
        let ns = c.neighbors4();
        for n in ns {
            assert_eq!(c.manhattan(n), 1);
        }
        assert_eq!(ns.len(), 4);
        assert!(ns.iter().all(|&n| n != c));
    }
}

mod time {
    use crate::{SimConfig, Tick, TickAccumulator};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t.offset(5), Tick(15));
        assert_eq!(Tick(15).since(t), 5);
        assert_eq!(t + 1, Tick(11));
    }

    #[test]
    fn accumulator_yields_zero_on_short_frames() {
        let mut acc = TickAccumulator::new();
        assert_eq!(acc.absorb(0.05, 0.2), 0);
        assert_eq!(acc.absorb(0.05, 0.2), 0);
        // 0.05 * 4 = 0.2 → exactly one tick
        assert_eq!(acc.absorb(0.1, 0.2), 1);
    }

    #[test]
    fn accumulator_yields_multiple_on_long_frames() {
        let mut acc = TickAccumulator::new();
        assert_eq!(acc.absorb(0.65, 0.2), 3);
        // 0.05 carried over
        assert_eq!(acc.absorb(0.15, 0.2), 1);
    }

    #[test]
    fn frame_dt_divides_tick() {
        let cfg = SimConfig::default();
        let total = cfg.frame_dt() * cfg.frames_per_tick as f32;
        assert!((total - cfg.seconds_per_tick).abs() < 1e-6);
    }
}

mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }
}
