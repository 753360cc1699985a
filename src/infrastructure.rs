//! Infrastructure layer
//!
//! This module handles external integrations:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Configuration files
//! - Fixture data sources

pub mod cli;
pub mod config;
pub mod fixtures;
pub mod tui;
