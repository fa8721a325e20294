//! Terminal remake of a retro vertical space shooter.
//!
//! The gameplay core (`compute` over `entities`) is a pure simulation:
//! every transition takes the current state (plus an injected RNG) and
//! returns a new one, so the whole game is testable without a terminal.
//! `display` turns a state into crossterm commands; the binary owns the
//! frame loop, input thread and scene flow.

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod store;
