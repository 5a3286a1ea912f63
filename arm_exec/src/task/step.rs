//! Task steps and their results

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::kinematics::Point2D;
use crate::scene::CarriableId;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Move whatever is at `pickup_m` to `dropoff_m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskStep {
    /// Units: meters
    pub pickup_m: Point2D,

    /// Units: meters
    pub dropoff_m: Point2D,
}

/// Outcome of each sub-step of a task step.
///
/// Serialises as a flat record so it can be archived as CSV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Position of the step in its task.
    pub index: usize,

    pub moved_to_pickup: bool,

    pub grabbed: bool,

    pub moved_to_dropoff: bool,

    pub released: bool,

    /// The carriable which was grabbed in this step, if any.
    pub carried: Option<CarriableId>,
}

/// Where the runner is within a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepPhase {
    Idle,
    MovingToPickup,
    Grabbing,
    MovingToDropoff,
    Releasing,
}

/// Overall status of a task run. There is no failed state, failed steps are
/// reported in their `StepResult` and the run carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Idle,
    Running,
    Completed,
}

/// Totals over the results of a task run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub num_steps: usize,

    /// Steps in which every sub-step succeeded.
    pub num_succeeded: usize,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TaskStep {
    pub fn new(pickup_m: Point2D, dropoff_m: Point2D) -> Self {
        Self {
            pickup_m,
            dropoff_m,
        }
    }
}

impl StepResult {
    /// True if every sub-step succeeded.
    pub fn is_success(&self) -> bool {
        self.moved_to_pickup && self.grabbed && self.moved_to_dropoff && self.released
    }

    /// The first phase which failed, if any.
    pub fn first_failure(&self) -> Option<StepPhase> {
        if !self.moved_to_pickup {
            Some(StepPhase::MovingToPickup)
        } else if !self.grabbed {
            Some(StepPhase::Grabbing)
        } else if !self.moved_to_dropoff {
            Some(StepPhase::MovingToDropoff)
        } else if !self.released {
            Some(StepPhase::Releasing)
        } else {
            None
        }
    }
}

impl TaskSummary {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a StepResult>,
    {
        results
            .into_iter()
            .fold(TaskSummary::default(), |mut summary, result| {
                summary.num_steps += 1;
                summary.num_succeeded += result.is_success() as usize;
                summary
            })
    }

    pub fn all_succeeded(&self) -> bool {
        self.num_steps == self.num_succeeded
    }
}
