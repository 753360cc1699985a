//! Integration layer
//!
//! Wires the Elm core to the terminal:
//! - Runtime: message queues, update loop and command execution
//! - AppRunner: async event loop over a `TuiLike` terminal

pub mod app_runner;
pub mod runtime;
