//! Carriable objects

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::kinematics::Point2D;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Identifies a carriable for the lifetime of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CarriableId(pub u32);

/// An object the arm can pick up and put down, such as a bottle.
///
/// Carriables are deliberately not `Copy`: at any time exactly one owner,
/// either the scene's free set or the arm, holds each one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carriable {
    pub id: CarriableId,

    /// Where the carriable is in the scene frame. Stale while held.
    ///
    /// Units: meters
    pub position_m: Point2D,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Carriable {
    pub fn new(id: CarriableId, position_m: Point2D) -> Self {
        Self { id, position_m }
    }
}

impl fmt::Display for CarriableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
