//! # Telemetry
//!
//! Snapshots of the scene for renderers and archives. A snapshot is taken
//! after every command which may change the scene, the core itself does not
//! notify anyone of changes.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    kinematics::{JointAngles, Point2D, NUM_LINKS},
    scene::{Carriable, SceneState, Zone, ZoneId},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Snapshot of the whole scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTm {
    pub arm: ArmTm,

    /// Free carriables in iteration order
    pub free: Vec<CarriableTm>,

    pub zones: Vec<Zone>,
}

/// Snapshot of the arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmTm {
    pub angles: JointAngles,

    /// Base, elbow and end effector positions.
    pub joints_m: [Point2D; NUM_LINKS + 1],

    /// The carriable held by the arm, drawn at the end effector.
    pub held: Option<Carriable>,
}

/// Snapshot of a free carriable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarriableTm {
    pub carriable: Carriable,

    /// The zone the carriable is standing in, if any.
    pub zone: Option<ZoneId>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SceneTm {
    pub fn from_scene(scene: &SceneState) -> Self {
        let arm = scene.arm();

        let free = scene
            .free()
            .iter()
            .map(|c| CarriableTm {
                carriable: c.clone(),
                zone: scene
                    .zones()
                    .iter()
                    .find(|z| z.contains(&c.position_m))
                    .map(|z| z.id),
            })
            .collect();

        Self {
            arm: ArmTm {
                angles: *arm.angles(),
                joints_m: arm.joint_positions(),
                held: arm.held().cloned(),
            },
            free,
            zones: scene.zones().to_vec(),
        }
    }
}

impl fmt::Display for SceneTm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.arm.joints_m[NUM_LINKS];

        writeln!(
            f,
            "Arm: angles [{:.3}, {:.3}] rad, end effector ({:.3}, {:.3})",
            self.arm.angles.link_rad[0], self.arm.angles.link_rad[1], end.x, end.y
        )?;

        match self.arm.held {
            Some(ref c) => writeln!(f, "Holding: {}", c.id)?,
            None => writeln!(f, "Holding: nothing")?,
        }

        writeln!(f, "Free carriables:")?;
        for c in self.free.iter() {
            write!(
                f,
                "    {} at ({:.3}, {:.3})",
                c.carriable.id, c.carriable.position_m.x, c.carriable.position_m.y
            )?;
            match c.zone {
                Some(z) => writeln!(f, " in zone {}", z.0)?,
                None => writeln!(f)?,
            }
        }

        Ok(())
    }
}
