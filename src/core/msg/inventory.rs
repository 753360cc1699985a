use serde::{Deserialize, Serialize};

use crate::domain::item::{Category, OwnershipTab};

/// Inventory and shop messages for InventoryState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryMsg {
    // Tab selection
    SetOwnership(OwnershipTab),
    ToggleOwnership,
    SetCategory(Category),
    ToggleCategory,
    /// Back to My items / Skin
    ResetTabs,

    // Grid selection
    SelectNext,
    SelectPrev,

    // Item actions, by item id
    Equip(String),
    Purchase(String),
}
