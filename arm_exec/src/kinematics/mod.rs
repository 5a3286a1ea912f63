//! Planar 2-link kinematics
//!
//! Pure functions mapping joint angles to end effector positions and back.
//! All angles are absolute link angles, measured anticlockwise from the scene
//! frame's x axis, so the second angle is *not* an offset from the first
//! link.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod forward;
mod inverse;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};

// Internal
pub use forward::*;
pub use inverse::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// The number of links (and so joints) in the arm.
pub const NUM_LINKS: usize = 2;

// ---------------------------------------------------------------------------
// TYPES
// ---------------------------------------------------------------------------

/// A position in the scene frame.
///
/// Units: meters
pub type Point2D = nalgebra::Point2<f64>;

/// Lengths of the arm's links, from the base outwards.
///
/// Units: meters
pub type LinkLengths = [f64; NUM_LINKS];

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The angles of each link of the arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    /// Absolute angle of each link relative to the scene's x axis.
    ///
    /// Units: radians
    pub link_rad: [f64; NUM_LINKS],
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during kinematics calculations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum KinematicsError {
    #[error("Target is {distance_m:.3} m from the base but the arm only reaches {reach_m:.3} m")]
    Unreachable { distance_m: f64, reach_m: f64 },

    #[error("Target ({0}, {1}) is not a finite position")]
    InvalidTarget(f64, f64),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl JointAngles {
    pub fn new(shoulder_rad: f64, upper_link_rad: f64) -> Self {
        Self {
            link_rad: [shoulder_rad, upper_link_rad],
        }
    }

    /// Angle of the first link, which is also the shoulder joint angle.
    pub fn shoulder_rad(&self) -> f64 {
        self.link_rad[0]
    }

    /// Bend of the elbow, the angle of the second link relative to the first.
    ///
    /// Solutions from `inverse_kinematics` are elbow-down and have a bend in
    /// `[0, pi]`.
    pub fn elbow_bend_rad(&self) -> f64 {
        self.link_rad[1] - self.link_rad[0]
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Maximum distance from the base the end effector can reach.
pub fn outer_reach(lengths: &LinkLengths) -> f64 {
    lengths.iter().sum()
}

/// Minimum distance from the base the end effector can reach.
///
/// Targets inside this radius are not rejected by `inverse_kinematics`, the
/// solution is clamped to the nearest reachable configuration instead.
pub fn inner_reach(lengths: &LinkLengths) -> f64 {
    (lengths[0] - lengths[1]).abs()
}

/// Returns true if `inverse_kinematics` will produce a solution for the
/// target.
pub fn is_reachable(base: &Point2D, lengths: &LinkLengths, target: &Point2D) -> bool {
    target.coords.iter().all(|c| c.is_finite())
        && nalgebra::distance(base, target) <= outer_reach(lengths)
}
