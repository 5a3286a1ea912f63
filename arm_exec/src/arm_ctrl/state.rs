//! Implementations for the ArmState structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, warn};

// Internal
use super::{ArmConfig, ArmConfigError, Params, DEFAULT_GRAB_THRESHOLD_M};
use crate::kinematics::{self, JointAngles, Point2D};
use crate::scene::Carriable;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The state of the arm: its geometry, the current angle of each link and the
/// carriable it is holding, if any.
///
/// The angles always correspond to the last successful move. The arm owns
/// the carriable it holds until it is released.
#[derive(Debug, Clone)]
pub struct ArmState {
    config: ArmConfig,

    angles: JointAngles,

    held: Option<Carriable>,

    grab_threshold_m: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ArmState {
    /// Create a new arm with all links along the x axis, holding nothing.
    pub fn new(config: ArmConfig) -> Self {
        Self {
            config,
            angles: JointAngles::default(),
            held: None,
            grab_threshold_m: DEFAULT_GRAB_THRESHOLD_M,
        }
    }

    /// Create a new arm from its parameters.
    pub fn from_params(params: &Params) -> Result<Self, ArmConfigError> {
        Self::new(params.arm_config()?).with_grab_threshold(params.grab_threshold_m)
    }

    /// Set the distance within which the arm can grab a carriable.
    pub fn with_grab_threshold(mut self, grab_threshold_m: f64) -> Result<Self, ArmConfigError> {
        if !(grab_threshold_m.is_finite() && grab_threshold_m > 0.0) {
            return Err(ArmConfigError::InvalidGrabThreshold(grab_threshold_m));
        }

        self.grab_threshold_m = grab_threshold_m;
        Ok(self)
    }

    pub fn config(&self) -> &ArmConfig {
        &self.config
    }

    pub fn angles(&self) -> &JointAngles {
        &self.angles
    }

    pub fn grab_threshold_m(&self) -> f64 {
        self.grab_threshold_m
    }

    /// The carriable currently held by the arm.
    pub fn held(&self) -> Option<&Carriable> {
        self.held.as_ref()
    }

    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Position of the end effector for the current angles.
    pub fn end_effector(&self) -> Point2D {
        kinematics::forward_kinematics(
            self.config.base_pos_m(),
            self.config.link_lengths_m(),
            &self.angles,
        )
    }

    /// Position of every joint, from the base to the end effector.
    pub fn joint_positions(&self) -> [Point2D; kinematics::NUM_LINKS + 1] {
        kinematics::joint_positions(
            self.config.base_pos_m(),
            self.config.link_lengths_m(),
            &self.angles,
        )
    }

    /// Move the end effector to the target.
    ///
    /// Returns `false` if the target is out of reach or not finite, in which
    /// case the angles are left untouched.
    pub fn move_to(&mut self, target: &Point2D) -> bool {
        match kinematics::inverse_kinematics(
            self.config.base_pos_m(),
            self.config.link_lengths_m(),
            target,
        ) {
            Ok(angles) => {
                self.angles = angles;
                debug!(
                    "Arm moved to ({:.3}, {:.3}), angles: {:?}",
                    target.x, target.y, self.angles.link_rad
                );
                true
            }
            Err(e) => {
                warn!("Cannot move arm to ({:.3}, {:.3}): {}", target.x, target.y, e);
                false
            }
        }
    }

    /// Returns true if the arm could grab the candidate right now: it must be
    /// empty handed and the candidate must be within the grab threshold of
    /// the end effector.
    pub fn can_grab(&self, candidate: &Carriable) -> bool {
        !self.is_holding()
            && nalgebra::distance(&self.end_effector(), &candidate.position_m)
                < self.grab_threshold_m
    }

    /// Take hold of the candidate.
    ///
    /// On failure the candidate is handed back unchanged. The caller is
    /// responsible for removing the candidate from any collection it was in,
    /// see `SceneState::try_grab_nearest`.
    pub fn grab(&mut self, candidate: Carriable) -> Result<(), Carriable> {
        if !self.can_grab(&candidate) {
            return Err(candidate);
        }

        debug!("Arm grabbed carriable {}", candidate.id);
        self.held = Some(candidate);

        Ok(())
    }

    /// Let go of the held carriable, if any.
    ///
    /// The position of the returned carriable is where it was grabbed from,
    /// the caller must update it before placing it back in the scene.
    pub fn release(&mut self) -> Option<Carriable> {
        let released = self.held.take();

        if let Some(ref c) = released {
            debug!("Arm released carriable {}", c.id);
        }

        released
    }
}
