//! # Arm library.
//!
//! This library allows other crates in the workspace to access items defined inside the arm
//! crate, so that the command line and the executable drive the same simulation.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Arm control module - the arm's geometry, pose and held carriable
pub mod arm_ctrl;

/// Data store - everything a host needs to run one simulation
pub mod data_store;

/// Kinematics - forward and inverse kinematics of the two link arm
pub mod kinematics;

/// Executable parameters
pub mod params;

/// Scene module - the arm together with the free carriables and the zones
pub mod scene;

/// Task module - sequences of pick and place steps
pub mod task;

/// Telecommand processor - applies TCs to the data store
pub mod tc_processor;

/// Telemetry - serialisable snapshots of the scene
pub mod tm;
