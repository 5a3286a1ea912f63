//! Arm Configuration structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::ArmConfigError;
use crate::kinematics::{LinkLengths, Point2D};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Stores the fixed geometry of an arm - the position of its base and the
/// lengths of its links.
///
/// An `ArmConfig` can only be built through `ArmConfig::new`, which
/// guarantees that every link length is positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArmConfig {
    base_pos_m: Point2D,

    link_lengths_m: LinkLengths,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ArmConfig {
    pub fn new(base_pos_m: Point2D, link_lengths_m: LinkLengths) -> Result<Self, ArmConfigError> {
        if !(base_pos_m.x.is_finite() && base_pos_m.y.is_finite()) {
            return Err(ArmConfigError::InvalidBase(base_pos_m.x, base_pos_m.y));
        }

        for (index, length_m) in link_lengths_m.iter().enumerate() {
            if !(length_m.is_finite() && *length_m > 0.0) {
                return Err(ArmConfigError::InvalidLinkLength {
                    index,
                    length_m: *length_m,
                });
            }
        }

        Ok(Self {
            base_pos_m,
            link_lengths_m,
        })
    }

    /// Position of the arm's base in the scene frame.
    pub fn base_pos_m(&self) -> &Point2D {
        &self.base_pos_m
    }

    /// Lengths of the links, from the base outwards.
    pub fn link_lengths_m(&self) -> &LinkLengths {
        &self.link_lengths_m
    }
}
