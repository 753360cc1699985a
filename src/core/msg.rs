use serde::{Deserialize, Serialize};

pub mod home;
pub mod inventory;
pub mod nav;
pub mod settings;
pub mod system;

use home::HomeMsg;
use inventory::InventoryMsg;
use nav::NavMsg;
use settings::SettingsMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Page switching (delegated to NavState)
    Nav(NavMsg),

    // Home dashboard (delegated to HomeState)
    Home(HomeMsg),

    // Inventory and shop (delegated to InventoryState)
    Inventory(InventoryMsg),

    // Settings actions
    Settings(SettingsMsg),
}

impl Msg {
    /// Shorthand for a status line update
    pub fn status(message: impl Into<String>) -> Self {
        Msg::System(SystemMsg::UpdateStatusMessage(message.into()))
    }
}
