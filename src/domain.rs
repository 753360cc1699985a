//! Domain logic
//!
//! This module contains the pure data model of the dashboard:
//! - Inventory items and the ownership/category filter
//! - Home feed records (notices, radio replays, hot clips)
//! - Goal metrics and progress computation
//! - Fixture bundles and their validation
//! - Text processing utilities

pub mod feed;
pub mod fixtures;
pub mod goal;
pub mod item;
pub mod text;
