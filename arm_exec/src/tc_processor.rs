//! # Telecommand processor module
//!
//! The telecommand processor handles TCs coming from any source: the
//! command line, a script, or a command relay.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info};

// Internal
use crate::data_store::DataStore;
use crate::task::TaskSummary;
use comms_if::tc::{Tc, TcResponse};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Execute a telecommand.
///
/// Mutates the datastore's scene. Failures are reported in the response and
/// leave the scene as it was.
pub fn exec(ds: &mut DataStore, tc: &Tc) -> TcResponse {
    ds.num_tcs += 1;
    debug!("Executing TC {}: {:?}", ds.num_tcs, tc);

    match tc {
        Tc::Move { x_m, y_m } => {
            let target = nalgebra::Point2::new(*x_m, *y_m);

            if ds.scene.move_arm(&target) {
                TcResponse::Ok(format!("Arm moved to ({:.3}, {:.3})", x_m, y_m))
            } else {
                TcResponse::CannotExecute(format!(
                    "Target ({:.3}, {:.3}) is out of the arm's reach",
                    x_m, y_m
                ))
            }
        }
        Tc::Home => {
            let home = ds.home_pos_m;

            if ds.scene.move_arm(&home) {
                TcResponse::Ok("Arm moved to the home position".into())
            } else {
                TcResponse::CannotExecute("Home position is out of the arm's reach".into())
            }
        }
        Tc::Grab => {
            if ds.scene.arm().is_holding() {
                return TcResponse::CannotExecute("The arm is already holding a carriable".into());
            }

            match ds.scene.try_grab_nearest() {
                Some(c) => TcResponse::Ok(format!("Grabbed carriable {}", c.id)),
                None => TcResponse::CannotExecute("No carriable near enough to grab".into()),
            }
        }
        Tc::Release => match ds.scene.release_held() {
            Some(c) => TcResponse::Ok(format!(
                "Released carriable {} at ({:.3}, {:.3})",
                c.id, c.position_m.x, c.position_m.y
            )),
            None => TcResponse::CannotExecute("The arm is not holding anything".into()),
        },
        Tc::Task => {
            let results: Vec<_> = ds.runner.run_task(&mut ds.scene, &ds.task_steps).collect();
            let summary = TaskSummary::from_results(&results);
            ds.last_task_results = results;

            info!(
                "Task finished, {} of {} steps succeeded",
                summary.num_succeeded, summary.num_steps
            );

            TcResponse::Ok(format!(
                "Task complete, {} of {} steps succeeded",
                summary.num_succeeded, summary.num_steps
            ))
        }
        Tc::Status => TcResponse::Ok(format!(
            "{} carriables free, holding {}",
            ds.scene.free().len(),
            match ds.scene.arm().held() {
                Some(c) => c.id.to_string(),
                None => "nothing".into(),
            }
        )),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::ArmExecParams;
    use crate::scene::CarriableId;

    const PARAMS: &str = r#"
        [arm]
        base_pos_m = [5.0, 0.0]
        link_lengths_m = [3.0, 2.0]
        home_pos_m = [5.0, 4.0]

        [scene]
        carriables_m = [[2.0, 2.0], [8.0, 2.0], [5.0, 8.0]]

        [[task.steps]]
        pickup_m = [2.0, 2.0]
        dropoff_m = [8.0, 2.0]

        [aliases]
        move_home = "home"
    "#;

    fn data_store() -> (DataStore, ArmExecParams) {
        let params: ArmExecParams = util::params::from_str(PARAMS).unwrap();
        (DataStore::from_params(&params).unwrap(), params)
    }

    #[test]
    fn test_manual_transfer() {
        let (mut ds, _) = data_store();

        assert!(exec(&mut ds, &Tc::Move { x_m: 2.0, y_m: 2.0 }).is_ok());
        assert!(exec(&mut ds, &Tc::Grab).is_ok());
        assert!(!exec(&mut ds, &Tc::Grab).is_ok());
        assert!(exec(&mut ds, &Tc::Move { x_m: 8.0, y_m: 2.0 }).is_ok());
        assert!(exec(&mut ds, &Tc::Release).is_ok());
        assert!(!exec(&mut ds, &Tc::Release).is_ok());

        assert_eq!(ds.num_tcs, 6);
        assert_eq!(ds.scene.free().last().map(|c| c.id), Some(CarriableId(0)));
    }

    #[test]
    fn test_unreachable_move() {
        let (mut ds, _) = data_store();
        let before = *ds.scene.arm().angles();

        let resp = exec(&mut ds, &Tc::Move { x_m: 5.0, y_m: 8.0 });

        assert!(!resp.is_ok());
        assert!(resp.message().contains("out of the arm's reach"));
        assert_eq!(ds.scene.arm().angles(), &before);
    }

    #[test]
    fn test_non_finite_move_rejected() {
        let (mut ds, _) = data_store();
        let before = *ds.scene.arm().angles();

        for line in ["move nan 1", "move inf 1", "move 1 inf"].iter() {
            let tc = Tc::from_line(line).unwrap();
            assert!(!exec(&mut ds, &tc).is_ok());
        }

        assert_eq!(ds.scene.arm().angles(), &before);
    }

    #[test]
    fn test_aliased_home() {
        let (mut ds, params) = data_store();

        let tc = Tc::from_aliased_line("move_home", &params.aliases).unwrap();
        assert!(exec(&mut ds, &tc).is_ok());

        let end = ds.scene.arm().end_effector();
        assert!(nalgebra::distance(&end, &nalgebra::Point2::new(5.0, 4.0)) < 1e-6);
    }

    #[test]
    fn test_task() {
        let (mut ds, _) = data_store();

        let resp = exec(&mut ds, &Tc::Task);

        assert_eq!(resp.message(), "Task complete, 1 of 1 steps succeeded");
        assert_eq!(ds.last_task_results.len(), 1);
        assert!(ds.last_task_results[0].is_success());
    }

    #[test]
    fn test_status_does_not_mutate() {
        let (mut ds, _) = data_store();

        let resp = exec(&mut ds, &Tc::Status);

        assert_eq!(resp.message(), "3 carriables free, holding nothing");
        assert_eq!(ds.scene.free().len(), 3);
    }
}
