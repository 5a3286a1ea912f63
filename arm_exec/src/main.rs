//! Main arm simulator executable entry point.
//!
//! # Architecture
//!
//! The executable runs in one of two modes:
//!
//!     - Script mode, `arm_exec SCRIPT`: the TCs in the script are executed at their timestamps
//!       and a scene snapshot is saved after each one that changes the scene.
//!     - Task mode, `arm_exec`: the task configured in the parameters is run step by step, with
//!       each step's result written to the task archive.

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use arm_lib::{
    data_store::DataStore,
    params::ArmExecParams,
    task::{TaskStatus, TaskSummary},
    tc_processor,
    tm::SceneTm,
};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{debug, info, warn};
use std::env;
use std::thread;
use std::time::Duration;

// Internal
use util::{
    archive::Archiver,
    host,
    logger::{logger_init, LevelFilter, LogEcho},
    script_interpreter::{PendingTcs, ScriptInterpreter},
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Period at which the script interpreter is polled for pending TCs.
const SCRIPT_POLL_PERIOD_S: f64 = 0.05;

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("arm_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Debug, LogEcho::Stdout, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Arm Simulator Executable\n");
    match host::get_hostname() {
        Some(h) => info!("Running on: {}", h),
        None => warn!("Could not determine the host name"),
    }
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params: ArmExecParams =
        util::params::load("arm_exec.toml").wrap_err("Could not load exec params")?;

    info!("Exec parameters loaded");

    // ---- INITIALISE DATASTORE ----

    let mut ds = DataStore::from_params(&params).wrap_err("Failed to build the scene")?;

    session.save("tm/scene_initial.json", SceneTm::from_scene(&ds.scene));

    // ---- SELECT MODE ----

    // Collect all arguments
    let args: Vec<String> = env::args().collect();

    debug!("CLI arguments: {:?}", args);

    match args.len() {
        2 => {
            info!("Loading script from \"{}\"", &args[1]);

            let si = ScriptInterpreter::new(&args[1]).wrap_err("Failed to load script")?;

            info!(
                "Loaded script lasts {:.02} s and contains {} TCs\n",
                si.get_duration(),
                si.get_num_tcs()
            );

            run_script(&mut ds, si, &session);
        }
        1 => {
            info!("No script provided, running the configured task\n");

            run_task(&mut ds, &params, &session)?;
        }
        _ => {
            return Err(eyre!(
                "Expected either zero or one argument, found {}",
                args.len() - 1
            ))
        }
    }

    // ---- SHUTDOWN ----

    session.save("tm/scene_final.json", SceneTm::from_scene(&ds.scene));

    info!("Final scene:\n{}", SceneTm::from_scene(&ds.scene));
    info!("{} TCs executed", ds.num_tcs);
    info!("End of execution");

    session.exit();

    Ok(())
}

/// Execute the script's TCs as they fall due, until the end of the script.
fn run_script(ds: &mut DataStore, mut si: ScriptInterpreter, session: &Session) {
    let mut num_snapshots = 0usize;

    loop {
        match si.get_pending_tcs() {
            PendingTcs::None => (),
            PendingTcs::Some(tc_vec) => {
                for tc in tc_vec.iter() {
                    let response = tc_processor::exec(ds, tc);

                    if response.is_ok() {
                        info!("{:?}: {}", tc, response);
                    } else {
                        warn!("{:?}: {}", tc, response);
                    }

                    if tc.is_mutating() {
                        num_snapshots += 1;
                        session.save(
                            format!("tm/scene_{:04}.json", num_snapshots),
                            SceneTm::from_scene(&ds.scene),
                        );
                    }
                }
            }
            PendingTcs::EndOfScript => {
                info!("End of TC script reached, stopping");
                break;
            }
        }

        thread::sleep(Duration::from_secs_f64(SCRIPT_POLL_PERIOD_S));
    }
}

/// Run the configured task, archiving each step's result.
fn run_task(ds: &mut DataStore, params: &ArmExecParams, session: &Session) -> Result<(), Report> {
    let mut archiver = Archiver::from_path(session, "task.csv")
        .map_err(|e| eyre!("Failed to create the task archive: {}", e))?;

    let step_period = Duration::from_secs_f64(params.step_period_s.max(0.0));

    info!(
        "Running task of {} steps with {:?} policy",
        ds.task_steps.len(),
        ds.runner.policy()
    );

    let mut results = Vec::with_capacity(ds.task_steps.len());
    let mut run = ds.runner.run_task(&mut ds.scene, &ds.task_steps);

    while let Some(result) = run.next() {
        match result.first_failure() {
            None => info!("Step {} succeeded", result.index),
            Some(phase) => warn!("Step {} failed while {:?}", result.index, phase),
        }

        if let Err(e) = archiver.serialise(&result) {
            warn!("Could not archive step {}: {}", result.index, e);
        }

        results.push(result);

        if run.status() == TaskStatus::Running {
            thread::sleep(step_period);
        }
    }

    let summary = TaskSummary::from_results(&results);
    ds.last_task_results = results;

    if summary.all_succeeded() {
        info!("Task complete, all {} steps succeeded", summary.num_steps);
    } else {
        warn!(
            "Task complete, {} of {} steps succeeded",
            summary.num_succeeded, summary.num_steps
        );
    }

    Ok(())
}
