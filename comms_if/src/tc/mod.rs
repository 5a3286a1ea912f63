//! # Telecommand module
//!
//! This module provides the telecommands which can be issued to the arm. A
//! telecommand can be parsed from a command line (`move 2 2`, `grab`, ...),
//! from a JSON packet as used in scripts
//! (`{"type": "MOVE", "payload": {"x_m": 2.0, "y_m": 2.0}}`), or through an
//! alias table which maps external command names (such as `move_home`) onto
//! command lines.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use structopt::{clap::AppSettings, StructOpt};
use thiserror::Error;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// A telecommand, i.e. an instruction sent to the arm by an operator, a
/// script or a command relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, StructOpt)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
#[structopt(name = "tc", no_version)]
pub enum Tc {
    /// Move the end effector to the given point.
    #[structopt(name = "move", setting = AppSettings::AllowNegativeNumbers)]
    Move {
        /// X coordinate of the target in the scene frame.
        ///
        /// Units: meters
        x_m: f64,

        /// Y coordinate of the target in the scene frame.
        ///
        /// Units: meters
        y_m: f64,
    },

    /// Move the end effector to the configured home position.
    #[structopt(name = "home")]
    Home,

    /// Grab the first free carriable within reach of the end effector.
    #[structopt(name = "grab")]
    Grab,

    /// Release the held carriable at the end effector position.
    #[structopt(name = "release")]
    Release,

    /// Run the configured transfer task from its first step.
    #[structopt(name = "task")]
    Task,

    /// Report the scene status without changing it.
    #[structopt(name = "status")]
    Status,
}

/// Response to the execution of a telecommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TcResponse {
    /// The command was executed.
    Ok(String),

    /// The command was understood but could not be carried out, the scene
    /// has not been changed.
    CannotExecute(String),
}

/// Possible parsing errors.
#[derive(Debug, Error)]
pub enum TcParseError {
    #[error("TC contains invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("The command line is empty")]
    Empty,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Tc {
    /// Parse a new TC from a JSON packet
    pub fn from_json(json_str: &str) -> Result<Self, TcParseError> {
        serde_json::from_str(json_str).map_err(TcParseError::InvalidJson)
    }

    /// Parse a new TC from a command line, such as `move 2.0 -1.5`.
    pub fn from_line(line: &str) -> Result<Self, TcParseError> {
        let words: Vec<&str> = line.split_whitespace().collect();

        if words.is_empty() {
            return Err(TcParseError::Empty);
        }

        Tc::from_iter_safe(std::iter::once("tc").chain(words))
            .map_err(|e| TcParseError::InvalidCommand(e.message))
    }

    /// Parse a command line after expanding any alias in its first word.
    pub fn from_aliased_line(
        line: &str,
        aliases: &HashMap<String, String>,
    ) -> Result<Self, TcParseError> {
        Self::from_line(&expand_alias(line, aliases))
    }

    /// Returns true if executing this command may change the scene.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Tc::Status)
    }
}

impl TcResponse {
    /// True if the command was executed.
    pub fn is_ok(&self) -> bool {
        matches!(self, TcResponse::Ok(_))
    }

    /// The human readable message carried by the response.
    pub fn message(&self) -> &str {
        match self {
            TcResponse::Ok(m) => m,
            TcResponse::CannotExecute(m) => m,
        }
    }
}

impl fmt::Display for TcResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TcResponse::Ok(m) => write!(f, "OK: {}", m),
            TcResponse::CannotExecute(m) => write!(f, "FAILED: {}", m),
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Replace the first word of `line` with its alias, if it has one.
///
/// Any remaining words are kept after the expansion, so with the alias
/// `goto = "move"` the line `goto 1 2` becomes `move 1 2`.
pub fn expand_alias(line: &str, aliases: &HashMap<String, String>) -> String {
    let trimmed = line.trim();
    let (head, rest) = match trimmed.find(char::is_whitespace) {
        Some(i) => (&trimmed[..i], trimmed[i..].trim_start()),
        None => (trimmed, ""),
    };

    match aliases.get(head) {
        Some(expansion) if rest.is_empty() => expansion.clone(),
        Some(expansion) => format!("{} {}", expansion, rest),
        None => trimmed.to_string(),
    }
}
