//! Presentation layer
//!
//! This module contains the UI:
//! - Page components rendered from `AppState`
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
