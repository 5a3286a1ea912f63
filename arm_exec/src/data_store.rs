//! # Data Store
//!
//! Everything a host (the executable or the command line) needs to drive a
//! simulation: the scene, the task and the records of what has been done.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::info;

use crate::{
    arm_ctrl::{ArmConfigError, ArmState},
    kinematics::Point2D,
    params::ArmExecParams,
    scene::SceneState,
    task::{StepResult, TaskRunner, TaskStep},
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Data store for one simulation.
///
/// The store is owned by a single host, which serialises all access to the
/// scene.
#[derive(Debug, Clone)]
pub struct DataStore {
    /// The simulated scene
    pub scene: SceneState,

    /// Runner used for the configured task
    pub runner: TaskRunner,

    /// Steps of the configured task
    pub task_steps: Vec<TaskStep>,

    /// Where the `home` command moves the arm to
    pub home_pos_m: Point2D,

    /// Results of the last task run, in step order
    pub last_task_results: Vec<StepResult>,

    /// Number of telecommands executed
    pub num_tcs: u64,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Build the store from the executable parameters.
    pub fn from_params(params: &ArmExecParams) -> Result<Self, ArmConfigError> {
        let arm = ArmState::from_params(&params.arm)?;
        let scene = SceneState::from_params(arm, &params.scene);

        info!(
            "Scene built with {} carriables and {} zones",
            scene.free().len(),
            scene.zones().len()
        );

        Ok(Self {
            scene,
            runner: TaskRunner::new(params.task.policy),
            task_steps: params.task.steps.clone(),
            home_pos_m: params.arm.home_pos_m,
            last_task_results: Vec::new(),
            num_tcs: 0,
        })
    }
}
