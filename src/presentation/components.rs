//! Page components
//!
//! Components are stateless renderers: each one reads the `AppState` it is
//! given and draws into a frame area.

use ratatui::prelude::*;

use crate::core::state::{AppState, Page};

pub mod home;
pub mod inventory;
pub mod settings;
pub mod status_bar;
pub mod top_nav;

pub use home::HomeComponent;
pub use inventory::InventoryComponent;
pub use settings::SettingsComponent;
pub use status_bar::StatusBarComponent;
pub use top_nav::TopNavComponent;

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub top_nav: TopNavComponent,
    pub home: HomeComponent,
    pub inventory: InventoryComponent,
    pub settings: SettingsComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the navigation bar, the current page and the status bar
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(2), // navigation
                Constraint::Min(0),    // page
                Constraint::Length(2), // status bar
            ])
            .split(frame.area());

        self.top_nav.view(state, frame, layout[0]);
        match state.current_page() {
            Page::Home => self.home.view(state, frame, layout[1]),
            Page::Inventory => self.inventory.view(state, frame, layout[1]),
            Page::Settings => self.settings.view(state, frame, layout[1]),
        }
        self.status_bar.view(state, frame, layout[2]);
    }
}

/// First row to draw so that `selected` stays within `visible` rows
pub(crate) fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(visible)
}

/// Slots of `item_height` rows that fit entirely inside `area`, top to bottom
pub(crate) fn stack(area: Rect, item_height: u16) -> Vec<Rect> {
    if item_height == 0 {
        return vec![];
    }
    (0..area.height / item_height)
        .map(|i| Rect::new(area.x, area.y + i * item_height, area.width, item_height))
        .collect()
}
