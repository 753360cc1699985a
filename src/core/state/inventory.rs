use crate::{
    core::{cmd::Cmd, msg::inventory::InventoryMsg},
    domain::item::{filter_items, Category, Item, OwnershipTab},
};

/// Owned and shop items plus the two-axis tab selection
#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    pub owned: Vec<Item>,
    pub shop: Vec<Item>,
    pub ownership: OwnershipTab,
    pub category: Category,
    /// Index into [`InventoryState::visible_items`]
    pub selected: usize,
}

impl InventoryState {
    pub fn new(owned: Vec<Item>, shop: Vec<Item>) -> Self {
        Self {
            owned,
            shop,
            ..Default::default()
        }
    }

    /// Items of the active ownership list matching the active category
    pub fn visible_items(&self) -> Vec<&Item> {
        filter_items(&self.owned, &self.shop, self.ownership, self.category)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.selected).copied()
    }

    pub fn update(&mut self, msg: InventoryMsg) -> Vec<Cmd> {
        match msg {
            InventoryMsg::SetOwnership(ownership) => {
                self.set_tabs(ownership, self.category);
                vec![]
            }
            InventoryMsg::ToggleOwnership => {
                self.set_tabs(self.ownership.toggled(), self.category);
                vec![]
            }
            InventoryMsg::SetCategory(category) => {
                self.set_tabs(self.ownership, category);
                vec![]
            }
            InventoryMsg::ToggleCategory => {
                self.set_tabs(self.ownership, self.category.toggled());
                vec![]
            }
            InventoryMsg::ResetTabs => {
                self.set_tabs(OwnershipTab::default(), Category::default());
                vec![]
            }
            InventoryMsg::SelectNext => {
                let len = self.visible_items().len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
                vec![]
            }
            InventoryMsg::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
                vec![]
            }
            InventoryMsg::Equip(id) => self.equip(&id),
            InventoryMsg::Purchase(id) => self.purchase(&id),
        }
    }

    fn set_tabs(&mut self, ownership: OwnershipTab, category: Category) {
        if (ownership, category) != (self.ownership, self.category) {
            self.ownership = ownership;
            self.category = category;
            self.selected = 0;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Marks an owned item as equipped, unequipping the rest of its category
    fn equip(&mut self, id: &str) -> Vec<Cmd> {
        let Some(category) = self
            .owned
            .iter()
            .find(|item| item.id == id && !item.is_locked())
            .map(|item| item.category)
        else {
            return vec![Cmd::LogError {
                message: format!("cannot equip {id}: not an owned item"),
            }];
        };
        for item in self.owned.iter_mut().filter(|i| i.category == category) {
            item.equipped = item.id == id;
        }
        vec![Cmd::LogInfo {
            message: format!("equipped {id}"),
        }]
    }

    /// Moves a locked shop item to the owned list
    fn purchase(&mut self, id: &str) -> Vec<Cmd> {
        let Some(index) = self
            .shop
            .iter()
            .position(|item| item.id == id && item.is_locked())
        else {
            return vec![Cmd::LogError {
                message: format!("cannot purchase {id}: not in the shop"),
            }];
        };
        if self.owned.iter().any(|item| item.id == id) {
            return vec![Cmd::LogError {
                message: format!("cannot purchase {id}: already owned"),
            }];
        }
        let item = self.shop.remove(index);
        self.owned.push(item.into_owned());
        self.clamp_selection();
        vec![Cmd::LogInfo {
            message: format!("purchased {id}"),
        }]
    }
}
