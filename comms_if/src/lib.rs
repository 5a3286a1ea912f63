//! # Communications interface crate.
//!
//! Provides the command vocabulary shared by the arm executable, the command
//! line and any command relay.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Telecommand definitions and parsing
pub mod tc;
