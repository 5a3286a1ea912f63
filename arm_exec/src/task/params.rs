//! Parameters for the transfer task

use serde::{Deserialize, Serialize};

use super::{SequencingPolicy, TaskStep};

/// Parameters describing the configured transfer task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// How failures within a step are handled.
    #[serde(default)]
    pub policy: SequencingPolicy,

    /// The steps of the task, executed in order.
    #[serde(default)]
    pub steps: Vec<TaskStep>,
}
