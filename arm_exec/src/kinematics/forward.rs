//! Forward kinematics calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;

// Internal imports
use super::*;

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Compute the position of the end effector for the given link angles.
///
/// Each link contributes `length * (cos(angle), sin(angle))` from the end of
/// the previous link.
pub fn forward_kinematics(base: &Point2D, lengths: &LinkLengths, angles: &JointAngles) -> Point2D {
    joint_positions(base, lengths, angles)[NUM_LINKS]
}

/// Compute the position of every joint of the arm, starting with the base
/// and ending with the end effector.
pub fn joint_positions(
    base: &Point2D,
    lengths: &LinkLengths,
    angles: &JointAngles,
) -> [Point2D; NUM_LINKS + 1] {
    let mut positions = [*base; NUM_LINKS + 1];

    for (i, (length_m, angle_rad)) in lengths.iter().zip(angles.link_rad.iter()).enumerate() {
        positions[i + 1] =
            positions[i] + Vector2::new(angle_rad.cos(), angle_rad.sin()) * *length_m;
    }

    positions
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_point_eq(a: Point2D, b: Point2D) {
        assert!(
            nalgebra::distance(&a, &b) < 1e-9,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_straight_arm() {
        let base = Point2D::new(5.0, 0.0);

        assert_point_eq(
            forward_kinematics(&base, &[3.0, 2.0], &JointAngles::default()),
            Point2D::new(10.0, 0.0),
        );
        assert_point_eq(
            forward_kinematics(&base, &[3.0, 2.0], &JointAngles::new(PI, PI)),
            Point2D::new(0.0, 0.0),
        );
    }

    #[test]
    fn test_angles_are_absolute() {
        // Both links point straight up, the second angle is not added to the
        // first.
        let end = forward_kinematics(
            &Point2D::origin(),
            &[1.0, 1.0],
            &JointAngles::new(FRAC_PI_2, FRAC_PI_2),
        );

        assert_point_eq(end, Point2D::new(0.0, 2.0));
    }

    #[test]
    fn test_joint_positions() {
        let joints = joint_positions(
            &Point2D::new(1.0, 1.0),
            &[2.0, 1.0],
            &JointAngles::new(FRAC_PI_2, 0.0),
        );

        assert_point_eq(joints[0], Point2D::new(1.0, 1.0));
        assert_point_eq(joints[1], Point2D::new(1.0, 3.0));
        assert_point_eq(joints[2], Point2D::new(2.0, 3.0));
    }
}
