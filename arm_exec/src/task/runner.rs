//! Task runner
//!
//! Turns task steps into the sequence move, grab, move, release against a
//! scene.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, warn};

// Internal
use super::{SequencingPolicy, StepPhase, StepResult, TaskStatus, TaskStep};
use crate::scene::SceneState;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Executes task steps against a scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskRunner {
    policy: SequencingPolicy,
}

/// A run of a task in progress.
///
/// Steps are executed one at a time as the run is iterated, so the caller
/// can inspect the scene between steps through `TaskRun::scene`. A run
/// cannot be restarted, start a new run with `TaskRunner::run_task`.
pub struct TaskRun<'a> {
    runner: TaskRunner,

    scene: &'a mut SceneState,

    steps: &'a [TaskStep],

    next_step: usize,

    status: TaskStatus,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl TaskRunner {
    pub fn new(policy: SequencingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SequencingPolicy {
        self.policy
    }

    /// Execute a single step: move to the pickup, grab, move to the dropoff
    /// and release.
    ///
    /// With `SequencingPolicy::BestEffort` every sub-step is attempted even if
    /// an earlier one failed.
    pub fn run_step(&self, scene: &mut SceneState, step: &TaskStep) -> StepResult {
        self.run_indexed_step(scene, step, 0)
    }

    /// Start a new run of the given steps.
    pub fn run_task<'a>(&self, scene: &'a mut SceneState, steps: &'a [TaskStep]) -> TaskRun<'a> {
        TaskRun {
            runner: *self,
            scene,
            steps,
            next_step: 0,
            status: TaskStatus::Idle,
        }
    }

    fn run_indexed_step(&self, scene: &mut SceneState, step: &TaskStep, index: usize) -> StepResult {
        let mut result = StepResult {
            index,
            ..Default::default()
        };

        let mut phase = StepPhase::MovingToPickup;

        loop {
            debug!("Step {}: {:?}", index, phase);

            let (succeeded, next_phase) = match phase {
                StepPhase::MovingToPickup => {
                    result.moved_to_pickup = scene.move_arm(&step.pickup_m);
                    (result.moved_to_pickup, StepPhase::Grabbing)
                }
                StepPhase::Grabbing => {
                    result.carried = scene.try_grab_nearest().map(|c| c.id);
                    result.grabbed = result.carried.is_some();
                    (result.grabbed, StepPhase::MovingToDropoff)
                }
                StepPhase::MovingToDropoff => {
                    result.moved_to_dropoff = scene.move_arm(&step.dropoff_m);
                    (result.moved_to_dropoff, StepPhase::Releasing)
                }
                StepPhase::Releasing => {
                    result.released = scene.release_held().is_some();
                    (result.released, StepPhase::Idle)
                }
                StepPhase::Idle => break,
            };

            if !succeeded {
                warn!("Step {}: {:?} failed", index, phase);

                if self.policy == SequencingPolicy::AbortStepOnFailure {
                    break;
                }
            }

            phase = next_phase;
        }

        result
    }
}

impl<'a> TaskRun<'a> {
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// The scene as left by the last executed step.
    pub fn scene(&self) -> &SceneState {
        self.scene
    }

    /// Number of steps not yet executed.
    pub fn remaining(&self) -> usize {
        self.steps.len() - self.next_step
    }
}

impl<'a> Iterator for TaskRun<'a> {
    type Item = StepResult;

    fn next(&mut self) -> Option<Self::Item> {
        let step = match self.steps.get(self.next_step) {
            Some(s) => s,
            None => {
                self.status = TaskStatus::Completed;
                return None;
            }
        };

        if self.status == TaskStatus::Idle {
            info!("Starting task of {} steps", self.steps.len());
            self.status = TaskStatus::Running;
        }

        let result = self
            .runner
            .run_indexed_step(self.scene, step, self.next_step);
        self.next_step += 1;

        info!(
            "Step {} of {}: {}",
            self.next_step,
            self.steps.len(),
            if result.is_success() { "ok" } else { "failed" }
        );

        if self.next_step == self.steps.len() {
            info!("Task complete");
            self.status = TaskStatus::Completed;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arm_ctrl::{ArmConfig, ArmState};
    use crate::kinematics::Point2D;
    use crate::scene::{CarriableId, Params as SceneParams, ZoneParams};

    const TOLERANCE: f64 = 1e-6;

    fn scene(link_lengths_m: [f64; 2]) -> SceneState {
        let arm = ArmState::new(ArmConfig::new(Point2D::new(5.0, 0.0), link_lengths_m).unwrap());

        let zone = |x, y| ZoneParams {
            position_m: Point2D::new(x, y),
            size_m: 2.0,
        };

        SceneState::from_params(
            arm,
            &SceneParams {
                carriables_m: vec![
                    Point2D::new(2.0, 2.0),
                    Point2D::new(8.0, 2.0),
                    Point2D::new(5.0, 8.0),
                ],
                zones: vec![zone(1.0, 1.0), zone(7.0, 1.0), zone(4.0, 7.0)],
            },
        )
    }

    fn rotation_steps() -> Vec<TaskStep> {
        vec![
            TaskStep::new(Point2D::new(2.0, 2.0), Point2D::new(8.0, 2.0)),
            TaskStep::new(Point2D::new(8.0, 2.0), Point2D::new(5.0, 8.0)),
            TaskStep::new(Point2D::new(5.0, 8.0), Point2D::new(2.0, 2.0)),
        ]
    }

    fn result(index: usize, flags: [bool; 4], carried: Option<u32>) -> StepResult {
        StepResult {
            index,
            moved_to_pickup: flags[0],
            grabbed: flags[1],
            moved_to_dropoff: flags[2],
            released: flags[3],
            carried: carried.map(CarriableId),
        }
    }

    fn assert_at(scene: &SceneState, id: u32, x: f64, y: f64) {
        let c = scene.carriable(CarriableId(id)).unwrap();
        assert!(
            nalgebra::distance(&c.position_m, &Point2D::new(x, y)) < TOLERANCE,
            "carriable {} at {:?}, expected ({}, {})",
            id,
            c.position_m,
            x,
            y
        );
    }

    #[test]
    fn test_rotation_with_long_arm() {
        // With 5 + 4 m links every waypoint is in reach and the carriables
        // rotate between the stations.
        let mut scene = scene([5.0, 4.0]);
        let steps = rotation_steps();

        let results: Vec<StepResult> = TaskRunner::default().run_task(&mut scene, &steps).collect();

        assert_eq!(
            results,
            vec![
                result(0, [true; 4], Some(0)),
                result(1, [true; 4], Some(1)),
                result(2, [true; 4], Some(2)),
            ]
        );

        assert!(!scene.arm().is_holding());
        assert_eq!(scene.free().len(), 3);
        assert_at(&scene, 0, 8.0, 2.0);
        assert_at(&scene, 1, 5.0, 8.0);
        assert_at(&scene, 2, 2.0, 2.0);
    }

    #[test]
    fn test_rotation_with_short_arm() {
        // With 3 + 2 m links (5, 8) is 8 m from the base and out of reach.
        // The runner carries on regardless and reports each failure.
        let mut scene = scene([3.0, 2.0]);
        let steps = rotation_steps();

        let results: Vec<StepResult> = TaskRunner::default().run_task(&mut scene, &steps).collect();

        assert_eq!(
            results,
            vec![
                result(0, [true, true, true, true], Some(0)),
                // Cannot reach the dropoff, #1 is put back down at (8, 2)
                result(1, [true, true, false, true], Some(1)),
                // Cannot reach the pickup, the arm is still at (8, 2) and
                // picks up #0 which was left there by the first step
                result(2, [false, true, true, true], Some(0)),
            ]
        );

        assert!(!scene.arm().is_holding());
        assert_eq!(scene.carriable_count(), 3);
        assert_at(&scene, 0, 2.0, 2.0);
        assert_at(&scene, 1, 8.0, 2.0);
        assert_at(&scene, 2, 5.0, 8.0);
    }

    #[test]
    fn test_abort_step_on_failure() {
        let mut scene = scene([3.0, 2.0]);
        let runner = TaskRunner::new(SequencingPolicy::AbortStepOnFailure);

        let results: Vec<StepResult> = runner.run_task(&mut scene, &rotation_steps()).collect();

        assert_eq!(results[0], result(0, [true; 4], Some(0)));
        // The move to the dropoff fails so the carriable is not released
        assert_eq!(results[1], result(1, [true, true, false, false], Some(1)));
        // Still holding #1, nothing else is attempted after the failed move
        assert_eq!(results[2], result(2, [false, false, false, false], None));

        assert_eq!(scene.arm().held().map(|c| c.id), Some(CarriableId(1)));
        assert_eq!(scene.carriable_count(), 3);
    }

    #[test]
    fn test_run_step_with_nothing_to_grab() {
        let mut scene = scene([3.0, 2.0]);
        let step = TaskStep::new(Point2D::new(4.0, 2.0), Point2D::new(6.0, 2.0));

        let result = TaskRunner::default().run_step(&mut scene, &step);

        assert_eq!(result, self::result(0, [true, false, true, false], None));
        assert_eq!(result.first_failure(), Some(StepPhase::Grabbing));
        assert_eq!(scene.free().len(), 3);
    }

    #[test]
    fn test_run_is_lazy() {
        let mut scene = scene([5.0, 4.0]);
        let steps = rotation_steps();

        let mut run = TaskRunner::default().run_task(&mut scene, &steps);
        assert_eq!(run.status(), TaskStatus::Idle);
        assert_eq!(run.remaining(), 3);

        // Nothing has moved until the first step is pulled
        assert_at(run.scene(), 0, 2.0, 2.0);

        assert!(run.next().unwrap().is_success());
        assert_eq!(run.status(), TaskStatus::Running);
        assert_at(run.scene(), 0, 8.0, 2.0);
        assert_at(run.scene(), 1, 8.0, 2.0);

        assert!(run.next().is_some());
        assert!(run.next().is_some());
        assert_eq!(run.status(), TaskStatus::Completed);
        assert!(run.next().is_none());
        assert_eq!(run.status(), TaskStatus::Completed);
    }

    #[test]
    fn test_fresh_run_starts_from_first_step() {
        let mut scene = scene([5.0, 4.0]);
        let steps = rotation_steps();
        let runner = TaskRunner::default();

        // Abandon a run after one step
        assert_eq!(runner.run_task(&mut scene, &steps).next().unwrap().index, 0);

        let indices: Vec<usize> = runner.run_task(&mut scene, &steps).map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_task() {
        let mut scene = scene([3.0, 2.0]);
        let mut run = TaskRunner::default().run_task(&mut scene, &[]);

        assert!(run.next().is_none());
        assert_eq!(run.status(), TaskStatus::Completed);
    }
}
