//! Reusable dashboard widgets
//!
//! Each widget renders one piece of domain data into a buffer area and
//! is shared by the page components.

pub mod clip_card;
pub mod goal_bar;
pub mod item_card;
pub mod notice_card;
pub mod radio_item;
pub mod section;
