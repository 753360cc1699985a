use std::collections::HashSet;

use color_eyre::eyre::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{
    feed::{Clip, Notice, RadioItem},
    goal::GoalMetric,
    item::{Item, ItemStatus},
};

/// Static records standing in for a live data source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub notices: Vec<Notice>,
    #[serde(default)]
    pub radio_items: Vec<RadioItem>,
    #[serde(default)]
    pub goals: Vec<GoalMetric>,
    #[serde(default)]
    pub hot_clips: Vec<Clip>,
    #[serde(default)]
    pub owned_items: Vec<Item>,
    #[serde(default)]
    pub shop_items: Vec<Item>,
}

impl Fixtures {
    /// Checks the item invariants and id uniqueness of every list
    pub fn validate(&self) -> Result<()> {
        unique_ids("notices", self.notices.iter().map(|n| n.id.as_str()))?;
        unique_ids("radio_items", self.radio_items.iter().map(|r| r.id.as_str()))?;
        unique_ids("goals", self.goals.iter().map(|g| g.id.as_str()))?;
        unique_ids("hot_clips", self.hot_clips.iter().map(|c| c.id.as_str()))?;
        unique_ids("owned_items", self.owned_items.iter().map(|i| i.id.as_str()))?;
        unique_ids("shop_items", self.shop_items.iter().map(|i| i.id.as_str()))?;

        for item in self.owned_items.iter().chain(self.shop_items.iter()) {
            validate_item(item)?;
        }
        if let Some(item) = self.owned_items.iter().find(|item| item.is_locked()) {
            bail!("item {}: locked item in the owned list", item.id);
        }
        if let Some(item) = self.shop_items.iter().find(|item| !item.is_locked()) {
            bail!("item {}: owned item in the shop list", item.id);
        }
        if let Some(item) = self
            .shop_items
            .iter()
            .find(|shop| self.owned_items.iter().any(|owned| owned.id == shop.id))
        {
            bail!("item {}: listed both as owned and in the shop", item.id);
        }
        Ok(())
    }
}

fn validate_item(item: &Item) -> Result<()> {
    match item.status {
        ItemStatus::Locked if item.equipped => {
            bail!("item {}: a locked item cannot be equipped", item.id)
        }
        ItemStatus::Owned if item.price.is_some() => {
            bail!("item {}: only locked items carry a price", item.id)
        }
        _ => Ok(()),
    }
}

fn unique_ids<'a>(list: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("{list}: duplicate id {id}");
        }
    }
    Ok(())
}
