use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::core::{cmd::Cmd, msg::nav::NavMsg};

/// Top-level pages, in navigation order
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Page {
    #[default]
    Home,
    Inventory,
    Settings,
}

impl Page {
    pub fn index(self) -> usize {
        Page::iter().position(|page| page == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        match self {
            Page::Home => Page::Inventory,
            Page::Inventory => Page::Settings,
            Page::Settings => Page::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Page::Home => Page::Settings,
            Page::Inventory => Page::Home,
            Page::Settings => Page::Inventory,
        }
    }
}

/// Active page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
}

impl NavState {
    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        self.page = match msg {
            NavMsg::GoTo(page) => page,
            NavMsg::Next => self.page.next(),
            NavMsg::Prev => self.page.prev(),
        };
        vec![]
    }
}
