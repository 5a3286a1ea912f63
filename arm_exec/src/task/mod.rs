//! Transfer task module
//!
//! A task is an ordered list of steps, each moving whatever carriable is at
//! the pickup point to the dropoff point.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;
mod runner;
mod step;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use runner::*;
pub use step::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// What the runner does when a sub-step of a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencingPolicy {
    /// Attempt every sub-step of a step regardless of earlier failures.
    BestEffort,

    /// Skip the remaining sub-steps of a step after the first failure. The
    /// skipped sub-steps are reported as failed and the run carries on with
    /// the next step.
    AbortStepOnFailure,
}

impl Default for SequencingPolicy {
    fn default() -> Self {
        SequencingPolicy::BestEffort
    }
}
