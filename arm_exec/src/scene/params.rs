//! Parameters describing the initial scene

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::kinematics::Point2D;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the scene contents. Carriables and zones are given ids in
/// the order they appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Initial position of each carriable.
    ///
    /// Units: meters
    pub carriables_m: Vec<Point2D>,

    /// The zones in the scene.
    #[serde(default)]
    pub zones: Vec<ZoneParams>,
}

/// Parameters for a single zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneParams {
    /// Corner of the zone with the lowest x and y.
    ///
    /// Units: meters
    pub position_m: Point2D,

    /// Side length of the zone.
    ///
    /// Units: meters
    pub size_m: f64,
}
