use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Whether an item belongs to the user or is still for sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Owned,
    Locked,
}

/// Item subtype, also used as the category tab of the inventory
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    #[strum(to_string = "Skin")]
    Skin,
    #[strum(to_string = "Motion")]
    Motion,
}

impl Category {
    pub fn toggled(self) -> Self {
        match self {
            Category::Skin => Category::Motion,
            Category::Motion => Category::Skin,
        }
    }
}

/// Ownership selector of the inventory: the user's items or the shop
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipTab {
    #[default]
    #[strum(to_string = "My items")]
    Owned,
    #[strum(to_string = "Shop")]
    Shop,
}

impl OwnershipTab {
    pub fn toggled(self) -> Self {
        match self {
            OwnershipTab::Owned => OwnershipTab::Shop,
            OwnershipTab::Shop => OwnershipTab::Owned,
        }
    }
}

/// A skin or motion the companion can wear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub status: ItemStatus,
    #[serde(default)]
    pub equipped: bool,
    pub category: Category,
}

impl Item {
    pub fn is_locked(&self) -> bool {
        self.status == ItemStatus::Locked
    }

    /// Equipped badge visibility; a locked item never shows as equipped
    pub fn is_equipped(&self) -> bool {
        self.equipped && !self.is_locked()
    }

    /// Price label, shown only for locked items
    pub fn display_price(&self) -> Option<&str> {
        if self.is_locked() {
            self.price.as_deref()
        } else {
            None
        }
    }

    /// Label of the card's action button
    pub fn action_label(&self) -> &'static str {
        if self.is_locked() {
            "Purchase"
        } else if self.is_equipped() {
            "Equipped"
        } else {
            "Equip"
        }
    }

    /// The owned copy of a purchased shop item
    pub fn into_owned(self) -> Self {
        Self {
            price: None,
            status: ItemStatus::Owned,
            equipped: false,
            ..self
        }
    }
}

/// Selects the items to display for the given ownership and category tabs.
///
/// Relative order of the source list is preserved; an empty result is valid.
pub fn filter_items<'a>(
    owned: &'a [Item],
    shop: &'a [Item],
    ownership: OwnershipTab,
    category: Category,
) -> Vec<&'a Item> {
    let source = match ownership {
        OwnershipTab::Owned => owned,
        OwnershipTab::Shop => shop,
    };
    source
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;
    use strum::IntoEnumIterator;

    use super::*;

    pub(crate) fn item(id: &str, status: ItemStatus, category: Category) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_uppercase(),
            image: format!("media/{id}.png"),
            price: (status == ItemStatus::Locked).then(|| "₩100".to_string()),
            status,
            equipped: false,
            category,
        }
    }

    #[fixture]
    fn owned() -> Vec<Item> {
        vec![
            item("skin-1", ItemStatus::Owned, Category::Skin),
            item("motion-1", ItemStatus::Owned, Category::Motion),
            item("skin-2", ItemStatus::Owned, Category::Skin),
        ]
    }

    #[fixture]
    fn shop() -> Vec<Item> {
        vec![
            item("skin-shop-1", ItemStatus::Locked, Category::Skin),
            item("motion-shop-1", ItemStatus::Locked, Category::Motion),
        ]
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[rstest]
    #[case(OwnershipTab::Owned, Category::Skin, &["skin-1", "skin-2"])]
    #[case(OwnershipTab::Owned, Category::Motion, &["motion-1"])]
    #[case(OwnershipTab::Shop, Category::Skin, &["skin-shop-1"])]
    #[case(OwnershipTab::Shop, Category::Motion, &["motion-shop-1"])]
    fn test_filter_items(
        owned: Vec<Item>,
        shop: Vec<Item>,
        #[case] ownership: OwnershipTab,
        #[case] category: Category,
        #[case] expected: &[&str],
    ) {
        let visible = filter_items(&owned, &shop, ownership, category);
        assert_eq!(ids(&visible), expected);
    }

    #[rstest]
    fn test_filter_items_only_matching_source_and_category(owned: Vec<Item>, shop: Vec<Item>) {
        for ownership in OwnershipTab::iter() {
            for category in Category::iter() {
                let source = match ownership {
                    OwnershipTab::Owned => &owned,
                    OwnershipTab::Shop => &shop,
                };
                for visible in filter_items(&owned, &shop, ownership, category) {
                    assert_eq!(visible.category, category);
                    assert!(source.iter().any(|item| item.id == visible.id));
                }
            }
        }
    }

    #[test]
    fn test_filter_items_empty_source() {
        for ownership in OwnershipTab::iter() {
            for category in Category::iter() {
                assert!(filter_items(&[], &[], ownership, category).is_empty());
            }
        }
    }

    #[test]
    fn test_filter_items_keeps_duplicates_and_order() {
        let owned = vec![
            item("b", ItemStatus::Owned, Category::Skin),
            item("a", ItemStatus::Owned, Category::Skin),
            item("b", ItemStatus::Owned, Category::Skin),
        ];
        let visible = filter_items(&owned, &[], OwnershipTab::Owned, Category::Skin);
        assert_eq!(ids(&visible), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_locked_item_never_shows_equipped() {
        let mut locked = item("x", ItemStatus::Locked, Category::Skin);
        locked.equipped = true;
        assert!(!locked.is_equipped());
        assert_eq!(locked.action_label(), "Purchase");
        assert_eq!(locked.display_price(), Some("₩100"));
    }

    #[test]
    fn test_owned_item_labels() {
        let mut owned = item("x", ItemStatus::Owned, Category::Motion);
        owned.price = Some("₩1".to_string());
        assert_eq!(owned.action_label(), "Equip");
        assert_eq!(owned.display_price(), None);

        owned.equipped = true;
        assert!(owned.is_equipped());
        assert_eq!(owned.action_label(), "Equipped");
    }

    #[test]
    fn test_into_owned() {
        let bought = item("x", ItemStatus::Locked, Category::Skin).into_owned();
        assert_eq!(bought.status, ItemStatus::Owned);
        assert_eq!(bought.price, None);
        assert!(!bought.equipped);
        assert_eq!(bought.id, "x");
    }

    #[test]
    fn test_tab_toggles() {
        assert_eq!(Category::Skin.toggled(), Category::Motion);
        assert_eq!(Category::Motion.toggled(), Category::Skin);
        assert_eq!(OwnershipTab::Owned.toggled(), OwnershipTab::Shop);
        assert_eq!(OwnershipTab::Shop.toggled(), OwnershipTab::Owned);
    }

    #[test]
    fn test_item_deserialize_defaults() -> serde_json::Result<()> {
        let item: Item = serde_json::from_str(
            r#"{"id":"m","name":"Heart","image":"x.svg","status":"owned","category":"motion"}"#,
        )?;
        assert_eq!(item.price, None);
        assert!(!item.equipped);
        assert_eq!(item.category, Category::Motion);
        Ok(())
    }
}
