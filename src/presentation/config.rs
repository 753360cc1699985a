//! UI configuration
//!
//! Key bindings and named styles, both read from the config files.

pub mod keybindings;
pub mod styles;

pub use keybindings::{Action, KeyBindings};
pub use styles::Styles;
