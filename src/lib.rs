//! # MeowBuddy - desktop companion dashboard
//!
//! A terminal dashboard for a streamer's desktop widget: notices, replays,
//! goal progress, hot clips and the skin/motion inventory, built with Ratatui.
//! The crate follows an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects requested by `update`
//! - **View** (`presentation::components`): rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use meowbuddy::{
//!     core::{msg::{nav::NavMsg, Msg}, state::{AppState, Page}},
//!     update,
//! };
//!
//! let state = AppState::default();
//! let (state, commands) = update(Msg::Nav(NavMsg::GoTo(Page::Inventory)), state);
//!
//! assert_eq!(state.current_page(), Page::Inventory);
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - state, messages, update and commands
//! - [`domain`] - items, feed records, goals and fixtures
//! - [`infrastructure`] - terminal, configuration, CLI and fixture loading
//! - [`integration`] - runtime and the event loop driver
//! - [`presentation`] - components, widgets, keybindings and styles

#![deny(warnings)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState};
pub use crate::core::{translator::translate_raw_to_domain, update::update};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
