use crate::{domain::fixtures::Fixtures, infrastructure::config::Config};

pub mod home;
pub mod inventory;
pub mod nav;
pub mod system;

pub use home::HomeState;
pub use inventory::InventoryState;
pub use nav::{NavState, Page};
pub use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nav: NavState,
    pub home: HomeState,
    pub inventory: InventoryState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from the loaded fixtures and config
    pub fn new(fixtures: Fixtures, config: Config) -> Self {
        let Fixtures {
            notices,
            radio_items,
            goals,
            hot_clips,
            owned_items,
            shop_items,
        } = fixtures;
        Self {
            home: HomeState::new(notices, radio_items, goals, hot_clips),
            inventory: InventoryState::new(owned_items, shop_items),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn current_page(&self) -> Page {
        self.nav.page
    }
}
