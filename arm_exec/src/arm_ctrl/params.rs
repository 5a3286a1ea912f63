//! Parameters structure for ArmCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use super::{ArmConfig, ArmConfigError, DEFAULT_GRAB_THRESHOLD_M};
use crate::kinematics::{LinkLengths, Point2D};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for Arm control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    // ---- GEOMETRY ----
    /// Position of the base of the arm in the scene frame.
    ///
    /// Units: meters.
    pub base_pos_m: Point2D,

    /// The length of each link, from the base outwards.
    ///
    /// Units: meters.
    pub link_lengths_m: LinkLengths,

    // ---- CAPABILITIES ----
    /// The end effector must be closer than this to a carriable to grab it.
    ///
    /// Units: meters.
    #[serde(default = "default_grab_threshold_m")]
    pub grab_threshold_m: f64,

    /// Position the arm moves to on a `home` command.
    ///
    /// Units: meters.
    pub home_pos_m: Point2D,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Params {
    /// Build the validated arm geometry described by these parameters.
    pub fn arm_config(&self) -> Result<ArmConfig, ArmConfigError> {
        ArmConfig::new(self.base_pos_m, self.link_lengths_m)
    }
}

fn default_grab_threshold_m() -> f64 {
    DEFAULT_GRAB_THRESHOLD_M
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_params() {
        let params: Params = util::params::from_str(
            r#"
            base_pos_m = [5.0, 0.0]
            link_lengths_m = [3.0, 2.0]
            home_pos_m = [5.0, 5.0]
            "#,
        )
        .unwrap();

        assert_eq!(params.base_pos_m, Point2D::new(5.0, 0.0));
        assert_eq!(params.grab_threshold_m, DEFAULT_GRAB_THRESHOLD_M);
        assert!(params.arm_config().is_ok());
    }
}
