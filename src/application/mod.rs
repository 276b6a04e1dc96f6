//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot.
//! Currently this is just the command routing.

pub mod router;
