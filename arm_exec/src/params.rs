//! # Arm Executable Parameters
//!
//! This module provide parameters for the arm executable and command line.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{arm_ctrl, scene, task};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Everything needed to build a simulation, loaded from `arm_exec.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmExecParams {
    /// Geometry and capabilities of the arm
    pub arm: arm_ctrl::Params,

    /// Initial contents of the scene
    pub scene: scene::Params,

    /// The transfer task run by the `task` command
    #[serde(default)]
    pub task: task::Params,

    /// External command names mapped onto telecommand lines, for example
    /// `move_home = "home"`.
    #[serde(default)]
    pub aliases: HashMap<String, String>,

    /// Seconds to wait between steps when running the task from the
    /// executable, giving renderers time to show each step.
    #[serde(default)]
    pub step_period_s: f64,
}
