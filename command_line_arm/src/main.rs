//! # Arm command line
//!
//! Interactive shell driving a local arm simulation. Each line is resolved through the alias
//! table in the exec parameters, parsed into a telecommand and executed against the scene.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::path::PathBuf;

use color_eyre::{eyre::WrapErr, Report};
use log::{info, warn};
use rustyline::{error::ReadlineError, DefaultEditor};
use structopt::StructOpt;

use arm_lib::{data_store::DataStore, params::ArmExecParams, tc_processor, tm::SceneTm};
use comms_if::tc::{Tc, TcParseError};
use util::{
    logger::{logger_init, LevelFilter, LogEcho},
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

const PROMPT: &str = "Arm $ ";

const EXIT_COMMAND: &str = "exit";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(name = "command_line_arm", about = "Interactive arm simulator shell")]
struct Opt {
    /// Parameter file, relative to the params directory of the software root
    #[structopt(long, default_value = "arm_exec.toml")]
    params: String,

    /// File the command history is loaded from and saved to
    #[structopt(long, default_value = "data/history.txt")]
    history: PathBuf,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opt = Opt::from_args();

    // The shell owns the terminal, so logs only go to the session file
    let session =
        Session::new("command_line_arm", "sessions").wrap_err("Failed to create the session")?;
    logger_init(LevelFilter::Debug, LogEcho::FileOnly, &session)
        .wrap_err("Failed to initialise logging")?;

    let params: ArmExecParams =
        util::params::load(&opt.params).wrap_err("Could not load exec params")?;
    let mut ds = DataStore::from_params(&params).wrap_err("Failed to build the scene")?;

    let mut rl = DefaultEditor::new().wrap_err("Failed to start the line editor")?;
    if rl.load_history(&opt.history).is_err() {
        println!("No history detected");
    }

    println!("{}", SceneTm::from_scene(&ds.scene));

    let mut num_snapshots = 0usize;

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(l) => l,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                println!("Unhandled error: {:?}", e);
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Err(e) = rl.add_history_entry(line) {
            warn!("Could not add history entry: {}", e);
        }

        if line == EXIT_COMMAND {
            break;
        }

        let tc = match Tc::from_aliased_line(line, &params.aliases) {
            Ok(tc) => tc,
            Err(TcParseError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        info!("Command line TC: {:?}", tc);

        let response = tc_processor::exec(&mut ds, &tc);
        println!("{}", response);

        if tc.is_mutating() && response.is_ok() {
            let tm = SceneTm::from_scene(&ds.scene);
            println!("{}", tm);
            num_snapshots += 1;
            session.save(format!("tm/scene_{:04}.json", num_snapshots), tm);
        } else if tc == Tc::Status {
            println!("{}", SceneTm::from_scene(&ds.scene));
        }
    }

    println!("Exiting...");

    if let Some(dir) = opt.history.parent() {
        std::fs::create_dir_all(dir).ok();
    }
    if let Err(e) = rl.save_history(&opt.history) {
        println!("Could not save history: {}", e);
    }

    session.exit();

    Ok(())
}
