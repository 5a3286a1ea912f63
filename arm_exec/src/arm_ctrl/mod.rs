//! Arm control module

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod arm_config;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use arm_config::*;
pub use params::*;
pub use state::*;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Distance within which the end effector can grab a carriable, unless
/// overridden by the parameters.
///
/// Units: meters
pub const DEFAULT_GRAB_THRESHOLD_M: f64 = 0.1;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur when building an arm.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArmConfigError {
    #[error("Link {index} has length {length_m}, link lengths must be positive and finite")]
    InvalidLinkLength { index: usize, length_m: f64 },

    #[error("The base position ({0}, {1}) is not finite")]
    InvalidBase(f64, f64),

    #[error("The grab threshold must be positive and finite, found {0}")]
    InvalidGrabThreshold(f64),
}
