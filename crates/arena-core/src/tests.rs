//! Unit tests for arena-core primitives.

#[cfg(test)]
mod geom {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use crate::{normalize_absolute, normalize_relative, Point2, Pose};

    #[test]
    fn project_north() {
        let p = Point2::new(0.0, 0.0).project(0.0, 100.0);
        assert!((p.x - 0.0).abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn project_east() {
        // Clockwise-from-north convention: π/2 points along +x.
        let p = Point2::new(0.0, 0.0).project(FRAC_PI_2, 10.0);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn absolute_angle_matches_projection() {
        let origin = Point2::new(30.0, 40.0);
        for angle in [0.0, 0.3, FRAC_PI_2, PI, 4.0] {
            let target = origin.project(angle, 55.0);
            let back = origin.absolute_angle_to(target);
            assert!(
                (normalize_relative(back - angle)).abs() < 1e-9,
                "angle {angle} came back as {back}"
            );
        }
    }

    #[test]
    fn distance_symmetric() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_absolute_range() {
        assert!((normalize_absolute(-FRAC_PI_2) - (TAU - FRAC_PI_2)).abs() < 1e-12);
        assert!((normalize_absolute(TAU + 0.25) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn normalize_relative_prefers_short_turn() {
        // 3π/2 absolute is a -π/2 turn.
        let turn = normalize_relative(3.0 * FRAC_PI_2);
        assert!((turn + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn bearing_accounts_for_heading() {
        // Owner facing east sees a target due north at bearing -π/2.
        let pose = Pose::new(Point2::new(0.0, 0.0), FRAC_PI_2);
        let bearing = pose.bearing_to(Point2::new(0.0, 50.0));
        assert!((bearing + FRAC_PI_2).abs() < 1e-9);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
    }

    #[test]
    fn saturating_since_clamps() {
        assert_eq!(Tick(15).saturating_since(Tick(10)), 5);
        // Out-of-order host clock: clamp to zero instead of underflowing.
        assert_eq!(Tick(10).saturating_since(Tick(15)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

#[cfg(test)]
mod ids {
    use crate::StateId;

    #[test]
    fn index_and_sentinel() {
        assert_eq!(StateId(3).index(), 3);
        assert_eq!(StateId::INVALID.0, u16::MAX);
        assert_eq!(StateId::default(), StateId::INVALID);
    }

    #[test]
    fn registration_order_is_ordering() {
        assert!(StateId(0) < StateId(1));
    }
}

#[cfg(test)]
mod events {
    use crate::{Affinity, EventClass, SensorEvent};

    #[test]
    fn class_mapping() {
        let hit = SensorEvent::HitByBullet { power: 2.0 };
        assert_eq!(hit.class(), EventClass::HitByBullet);
        let death = SensorEvent::BotDeath { name: "Walls".into() };
        assert_eq!(death.class(), EventClass::BotDeath);
    }

    #[test]
    fn class_indices_are_dense() {
        for (i, class) in EventClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn affinity_predicates() {
        assert!(Affinity::Hostile.is_hostile());
        assert!(!Affinity::Hostile.is_allied());
        assert!(Affinity::Allied.is_allied());
    }

    #[test]
    fn class_display() {
        assert_eq!(EventClass::Scan.to_string(), "scan");
        assert_eq!(EventClass::HitByBullet.to_string(), "hit-by-bullet");
    }
}

#[cfg(test)]
mod combat {
    use crate::bullet_damage;

    #[test]
    fn low_power_has_no_bonus() {
        assert!((bullet_damage(0.5) - 2.0).abs() < 1e-12);
        assert!((bullet_damage(1.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn high_power_bonus() {
        // 4·3 + 2·(3−1) = 16
        assert!((bullet_damage(3.0) - 16.0).abs() < 1e-12);
    }

    #[test]
    fn negative_power_is_zero() {
        assert_eq!(bullet_damage(-1.0), 0.0);
    }
}

#[cfg(test)]
mod name {
    use crate::sanitize_name;

    #[test]
    fn trims_and_collapses() {
        assert_eq!(sanitize_name("  Walls   (2) "), "Walls (2)");
    }

    #[test]
    fn deterministic_and_idempotent() {
        let once = sanitize_name("sample.Fire  (3)");
        assert_eq!(sanitize_name(&once), once);
    }

    #[test]
    fn distinct_instances_stay_distinct() {
        assert_ne!(sanitize_name("Walls (1)"), sanitize_name("Walls (2)"));
    }
}

#[cfg(test)]
mod rng {
    use crate::BotRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = BotRng::new(12345);
        let mut r2 = BotRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = BotRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn sign_is_unit() {
        let mut rng = BotRng::new(7);
        for _ in 0..32 {
            let s = rng.sign();
            assert!(s == 1.0 || s == -1.0);
        }
    }
}

#[cfg(test)]
mod config {
    use crate::EngineConfig;

    #[test]
    fn defaults_carry_stock_tuning() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.enemy_strength, 50.0);
        assert_eq!(cfg.teammate_strength, 25.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_damage_floor_rejected() {
        let cfg = EngineConfig { damage_floor: 0.0, ..EngineConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
