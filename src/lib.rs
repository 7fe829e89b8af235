//! Boiler — a minimal recipe-driven build runner.
//!
//! A `Recipe` file declares targets, dependencies, and per-target
//! action lists; boiler builds a goal target depth-first through its
//! dependencies, running each action as a variable assignment, a
//! built-in command, or an external process.

pub mod builtins;
pub mod cli;
pub mod core;
pub mod process;
