//! Inverse kinematics calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;

// Internal imports
use super::*;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Find the link angles which place the end effector at `target`.
///
/// This is the standard closed form solution for a 2-link planar arm, the
/// derivation of which can be found in
/// https://en.wikipedia.org/wiki/Inverse_kinematics. Only the elbow-down
/// branch is returned.
///
/// Targets with a NaN or infinite coordinate fail with
/// `KinematicsError::InvalidTarget`. Targets further than the sum of the link
/// lengths fail with `KinematicsError::Unreachable`. Targets closer than the
/// difference of the link lengths are not rejected: the cosine of the elbow
/// bend is clamped to `[-1, 1]`, so near-boundary targets resolve to the
/// closest configuration the arm can reach.
pub fn inverse_kinematics(
    base: &Point2D,
    lengths: &LinkLengths,
    target: &Point2D,
) -> Result<JointAngles, KinematicsError> {
    let [l1_m, l2_m] = *lengths;

    if !(target.x.is_finite() && target.y.is_finite()) {
        return Err(KinematicsError::InvalidTarget(target.x, target.y));
    }

    let delta_m = target - base;
    let distance_m = delta_m.norm();
    let reach_m = outer_reach(lengths);

    if distance_m > reach_m {
        return Err(KinematicsError::Unreachable {
            distance_m,
            reach_m,
        });
    }

    // Angle of the line from the base to the target
    let target_angle_rad = delta_m.y.atan2(delta_m.x);

    // Elbow bend from the law of cosines
    let cos_elbow = ((distance_m.powi(2) - l1_m.powi(2) - l2_m.powi(2)) / (2.0 * l1_m * l2_m))
        .clamp(-1.0, 1.0);
    let elbow_bend_rad = cos_elbow.acos();

    let shoulder_rad = target_angle_rad
        - (l2_m * elbow_bend_rad.sin()).atan2(l1_m + l2_m * elbow_bend_rad.cos());

    trace!(
        "IK to ({:.3}, {:.3}): shoulder {:.4} rad, elbow bend {:.4} rad",
        target.x,
        target.y,
        shoulder_rad,
        elbow_bend_rad
    );

    // Express the second link in the scene frame
    Ok(JointAngles::new(shoulder_rad, shoulder_rad + elbow_bend_rad))
}

#[cfg(test)]
mod test {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn round_trip_error(base: Point2D, lengths: LinkLengths, target: Point2D) -> f64 {
        let angles = inverse_kinematics(&base, &lengths, &target).unwrap();
        nalgebra::distance(&forward_kinematics(&base, &lengths, &angles), &target)
    }

    #[test]
    fn test_round_trip() {
        let base = Point2D::new(5.0, 0.0);
        let lengths = [3.0, 2.0];

        for target in &[
            Point2D::new(2.0, 2.0),
            Point2D::new(8.0, 2.0),
            Point2D::new(5.0, 4.5),
            Point2D::new(6.5, -2.0),
            Point2D::new(3.0, 0.5),
        ] {
            assert!(
                round_trip_error(base, lengths, *target) < TOLERANCE,
                "round trip failed for {:?}",
                target
            );
        }
    }

    #[test]
    fn test_round_trip_sweep() {
        let base = Point2D::new(-1.0, 3.0);
        let lengths = [4.0, 2.5];
        let inner = inner_reach(&lengths);
        let outer = outer_reach(&lengths);

        // Sweep rings between the inner and outer reach
        for r_step in 0..=10 {
            let radius = inner + 1e-3 + (outer - inner - 2e-3) * (r_step as f64 / 10.0);

            for a_step in 0..36 {
                let angle = (a_step as f64) * std::f64::consts::TAU / 36.0;
                let target = base + nalgebra::Vector2::new(angle.cos(), angle.sin()) * radius;

                assert!(round_trip_error(base, lengths, target) < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_elbow_down() {
        let angles =
            inverse_kinematics(&Point2D::origin(), &[1.0, 1.0], &Point2D::new(1.0, 1.0)).unwrap();

        assert!((angles.shoulder_rad() - 0.0).abs() < TOLERANCE);
        assert!((angles.elbow_bend_rad() - std::f64::consts::FRAC_PI_2).abs() < TOLERANCE);
    }

    #[test]
    fn test_unreachable() {
        let base = Point2D::new(5.0, 0.0);
        let lengths = [3.0, 2.0];

        assert_eq!(
            inverse_kinematics(&base, &lengths, &Point2D::new(5.0, 8.0)),
            Err(KinematicsError::Unreachable {
                distance_m: 8.0,
                reach_m: 5.0
            })
        );

        for a_step in 0..24 {
            let angle = (a_step as f64) * std::f64::consts::TAU / 24.0;
            let target = base + nalgebra::Vector2::new(angle.cos(), angle.sin()) * (5.0 + 1e-6);

            assert!(inverse_kinematics(&base, &lengths, &target).is_err());
            assert!(!is_reachable(&base, &lengths, &target));
        }
    }

    #[test]
    fn test_non_finite_target() {
        let base = Point2D::new(5.0, 0.0);
        let lengths = [3.0, 2.0];

        for target in [
            Point2D::new(f64::NAN, 1.0),
            Point2D::new(5.0, f64::NAN),
            Point2D::new(f64::INFINITY, 0.0),
            Point2D::new(5.0, f64::NEG_INFINITY),
        ]
        .iter()
        {
            assert!(matches!(
                inverse_kinematics(&base, &lengths, target),
                Err(KinematicsError::InvalidTarget(..))
            ));
            assert!(!is_reachable(&base, &lengths, target));
        }
    }

    #[test]
    fn test_full_extension() {
        let base = Point2D::new(5.0, 0.0);
        let target = Point2D::new(10.0, 0.0);

        let angles = inverse_kinematics(&base, &[3.0, 2.0], &target).unwrap();

        assert!(angles.elbow_bend_rad().abs() < TOLERANCE);
        assert!(round_trip_error(base, [3.0, 2.0], target) < TOLERANCE);
    }

    #[test]
    fn test_inner_dead_zone_is_clamped() {
        // The base itself is inside the inner reach, the arm folds back on
        // itself and ends up inner_reach away from the target.
        let base = Point2D::new(5.0, 0.0);
        let lengths = [3.0, 2.0];

        let angles = inverse_kinematics(&base, &lengths, &base).unwrap();
        let end = forward_kinematics(&base, &lengths, &angles);

        assert!((angles.elbow_bend_rad() - std::f64::consts::PI).abs() < TOLERANCE);
        assert!((nalgebra::distance(&end, &base) - inner_reach(&lengths)).abs() < TOLERANCE);
    }
}
