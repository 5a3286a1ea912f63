//! Zones (stations) in the scene

use serde::{Deserialize, Serialize};

use crate::kinematics::Point2D;

/// Identifies a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u32);

/// A square station carriables are moved between.
///
/// Zones are fixed once the scene is built and take no part in grabbing or
/// releasing, they are reference geometry for renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,

    /// Corner of the zone with the lowest x and y.
    ///
    /// Units: meters
    pub position_m: Point2D,

    /// Side length of the zone.
    ///
    /// Units: meters
    pub size_m: f64,
}

impl Zone {
    pub fn new(id: ZoneId, position_m: Point2D, size_m: f64) -> Self {
        Self {
            id,
            position_m,
            size_m,
        }
    }

    /// Returns true if the point lies inside the zone or on its edge.
    pub fn contains(&self, point: &Point2D) -> bool {
        let rel = *point - self.position_m;
        (0.0..=self.size_m).contains(&rel.x) && (0.0..=self.size_m).contains(&rel.y)
    }
}
