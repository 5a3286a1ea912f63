//! Scene module
//!
//! The scene holds the arm, the carriables it can move and the zones they
//! are moved between.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod carriable;
mod params;
mod state;
mod zone;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use carriable::*;
pub use params::*;
pub use state::*;
pub use zone::*;
