use serde::{Deserialize, Serialize};

/// Settings page messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsMsg {
    Logout,
}
