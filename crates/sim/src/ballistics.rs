use glam::Vec2;

use windage_shared::*;

/// Wrap an angle in degrees into [-180, 180].
pub fn normalize_angle(deg: f32) -> f32 {
    let mut d = deg;
    while d > 180.0 {
        d -= 360.0;
    }
    while d < -180.0 {
        d += 360.0;
    }
    d
}

/// Crosswind component of the sample relative to a line of fire, in m/s.
/// Zero when the wind blows straight down or up the range, maximal at 90
/// degrees off the bearing. Sign gives the drift direction.
pub fn crosswind_component(sample: WindSample, bearing_deg: f32) -> f32 {
    let delta = normalize_angle(sample.direction - bearing_deg);
    sample.speed * delta.to_radians().sin()
}

/// Kill-zone tolerance for a silhouette at the given range. Step function:
/// near targets get the tight tolerance, far targets the generous one.
pub fn kill_radius_for(distance_m: f32) -> f32 {
    if distance_m < NEAR_BAND_M {
        NEAR_KILL_RADIUS_PX
    } else if distance_m < MID_BAND_M {
        MID_KILL_RADIUS_PX
    } else {
        FAR_KILL_RADIUS_PX
    }
}

/// Resolve one shot against a frozen wind sample.
///
/// Pure: the target is read, never written; the caller applies the outcome.
/// `vertical_jitter` is the caller-drawn perturbation (px) so the resolution
/// itself stays deterministic.
pub fn resolve(target: &Target, sample: WindSample, vertical_jitter: f32) -> ShotOutcome {
    let drift = crosswind_component(sample, target.bearing_deg) * target.distance_m * DRIFT_SCALE;
    let impact_offset = Vec2::new(drift, vertical_jitter);
    let distance_from_center = impact_offset.length();
    ShotOutcome {
        impact_offset,
        distance_from_center,
        zone: classify(distance_from_center, target.kill_radius),
    }
}

fn classify(distance: f32, kill_radius: f32) -> Zone {
    if distance <= kill_radius {
        Zone::Hit
    } else if distance <= kill_radius * SPLIT_FACTOR {
        Zone::Split
    } else {
        Zone::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_at(distance_m: f32, bearing_deg: f32, kill_radius: f32) -> Target {
        Target {
            silhouette: Silhouette::Rat,
            distance_m,
            bearing_deg,
            kill_radius,
            shot_taken: false,
            result: None,
        }
    }

    #[test]
    fn test_normalize_angle_range() {
        for d1 in (0..360).step_by(15) {
            for d2 in (0..360).step_by(15) {
                let n = normalize_angle(d1 as f32 - d2 as f32);
                assert!((-180.0..=180.0).contains(&n), "{} - {} -> {}", d1, d2, n);
            }
        }
        assert_eq!(normalize_angle(190.0), -170.0);
        assert_eq!(normalize_angle(-190.0), 170.0);
        assert_eq!(normalize_angle(540.0), 180.0);
    }

    #[test]
    fn test_downwind_has_no_crosswind() {
        let bearing = 25.0;
        for direction in [bearing, bearing + 180.0] {
            let sample = WindSample { direction, speed: 8.0 };
            assert!(
                crosswind_component(sample, bearing).abs() < 1e-4,
                "direction {} should carry no crosswind",
                direction
            );
        }
    }

    #[test]
    fn test_full_crosswind_is_maximal() {
        let bearing = -10.0;
        let speed = 6.0;
        let at = |delta: f32| {
            crosswind_component(
                WindSample { direction: bearing + delta, speed },
                bearing,
            )
            .abs()
        };
        let full = at(90.0);
        assert!((full - speed).abs() < 1e-3);
        for delta in [0.0, 30.0, 45.0, 60.0, 89.0, 120.0, 179.0] {
            assert!(at(delta) <= full + 1e-4, "delta {} exceeded full value", delta);
        }
    }

    #[test]
    fn test_crosswind_sign_flips_with_side() {
        let bearing = 0.0;
        let left = crosswind_component(WindSample { direction: 90.0, speed: 5.0 }, bearing);
        let right = crosswind_component(WindSample { direction: -90.0, speed: 5.0 }, bearing);
        assert!((left + right).abs() < 1e-4);
        assert!(left > 0.0);
    }

    #[test]
    fn test_zone_boundaries() {
        let target = target_at(40.0, 0.0, 28.0);
        let still = WindSample { direction: 0.0, speed: 0.0 };
        assert_eq!(resolve(&target, still, 0.0).zone, Zone::Hit);

        // 5 m/s at 90 degrees over 30m of range lands 30px out: split.
        let target = target_at(30.0, 0.0, 28.0);
        let breeze = WindSample { direction: 90.0, speed: 5.0 };
        let outcome = resolve(&target, breeze, 0.0);
        assert!((outcome.distance_from_center - 30.0).abs() < 1e-3);
        assert_eq!(outcome.zone, Zone::Split);

        // Same wind over 50m lands 50px out, past the 42px split band: miss.
        let target = target_at(50.0, 0.0, 28.0);
        let outcome = resolve(&target, breeze, 0.0);
        assert!((outcome.distance_from_center - 50.0).abs() < 1e-3);
        assert_eq!(outcome.zone, Zone::Miss);
    }

    #[test]
    fn test_classify_inclusive_edges() {
        assert_eq!(classify(28.0, 28.0), Zone::Hit);
        assert_eq!(classify(28.001, 28.0), Zone::Split);
        assert_eq!(classify(42.0, 28.0), Zone::Split);
        assert_eq!(classify(42.001, 28.0), Zone::Miss);
    }

    #[test]
    fn test_kill_radius_bands() {
        assert_eq!(kill_radius_for(10.0), NEAR_KILL_RADIUS_PX);
        assert_eq!(kill_radius_for(19.9), NEAR_KILL_RADIUS_PX);
        assert_eq!(kill_radius_for(20.0), MID_KILL_RADIUS_PX);
        assert_eq!(kill_radius_for(34.9), MID_KILL_RADIUS_PX);
        assert_eq!(kill_radius_for(35.0), FAR_KILL_RADIUS_PX);
        assert_eq!(kill_radius_for(50.0), FAR_KILL_RADIUS_PX);

        let mut prev = 0.0;
        for d in 1..=60 {
            let r = kill_radius_for(d as f32);
            assert!(r >= prev, "tolerance shrank at {}m", d);
            prev = r;
        }
    }

    #[test]
    fn test_jitter_only_moves_vertically() {
        let target = target_at(30.0, 0.0, 17.0);
        let still = WindSample { direction: 0.0, speed: 0.0 };
        let outcome = resolve(&target, still, 3.0);
        assert_eq!(outcome.impact_offset.x, 0.0);
        assert_eq!(outcome.impact_offset.y, 3.0);
        assert_eq!(outcome.zone, Zone::Hit);
    }

    #[test]
    fn test_drift_scales_with_range() {
        let breeze = WindSample { direction: 90.0, speed: 4.0 };
        let near = resolve(&target_at(10.0, 0.0, 10.0), breeze, 0.0);
        let far = resolve(&target_at(40.0, 0.0, 28.0), breeze, 0.0);
        assert!((far.impact_offset.x - 4.0 * near.impact_offset.x).abs() < 1e-3);
    }
}
