use serde::{Deserialize, Serialize};

use crate::core::state::nav::Page;

/// Page navigation messages for NavState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    GoTo(Page),
    Next,
    Prev,
}
