//! # Command Handlers
//!
//! Contains specific handler functions for each supported command
//! (e.g., /metar, /vol_local, /trajet). These handlers are invoked by the
//! Router. Reply construction is kept in pure functions so each command is a
//! stateless function of its arguments; the async wrappers only send.

pub mod flight;
pub mod help;
pub mod weather;
