//! Inventory page: ownership and category tabs over a grid of item cards

use std::fmt::Display;

use ratatui::{prelude::*, widgets::Tabs};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::item::{Category, OwnershipTab},
    presentation::{
        components::{scroll_offset, stack},
        config::Styles,
        widgets::item_card::ItemCard,
    },
};

const GRID_COLUMNS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct InventoryComponent;

impl InventoryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let inventory = &state.inventory;
        let [ownership_area, category_area, _, grid_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            tab_row(OwnershipTab::iter(), inventory.ownership, styles),
            ownership_area,
        );
        frame.render_widget(
            tab_row(Category::iter(), inventory.category, styles),
            category_area,
        );

        let items = inventory.visible_items();
        let rows = stack(grid_area, ItemCard::HEIGHT);
        let offset = scroll_offset(inventory.selected / GRID_COLUMNS, rows.len());
        for (row_index, row) in rows.into_iter().enumerate() {
            let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(row);
            for (column, cell) in columns.iter().enumerate() {
                let index = (offset + row_index) * GRID_COLUMNS + column;
                let Some(item) = items.get(index) else {
                    return;
                };
                let card = ItemCard::new(item, styles).selected(index == inventory.selected);
                frame.render_widget(card, *cell);
            }
        }
    }
}

fn tab_row<T>(tabs: impl Iterator<Item = T>, active: T, styles: &Styles) -> Tabs<'static>
where
    T: Display + PartialEq,
{
    let mut selected = 0;
    let titles: Vec<String> = tabs
        .enumerate()
        .map(|(i, tab)| {
            if tab == active {
                selected = i;
            }
            format!(" {tab} ")
        })
        .collect();
    Tabs::new(titles)
        .select(selected)
        .style(styles.style("tab_inactive"))
        .highlight_style(styles.style("tab_active"))
        .padding("", "")
        .divider(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::inventory::InventoryMsg,
        presentation::components::tests::{draw_rows, fixture_state},
    };

    fn rows(state: &AppState, height: u16) -> Vec<String> {
        let component = InventoryComponent::new();
        draw_rows(60, height, |frame, area| component.view(state, frame, area))
    }

    #[test]
    fn test_tabs() {
        let state = fixture_state();
        let rows = rows(&state, 20);

        assert_eq!(rows[0], format!("{:<60}", " My items   Shop "));
        assert_eq!(rows[1], format!("{:<60}", " Skin   Motion "));
    }

    #[test]
    fn test_owned_skins_grid() {
        let state = fixture_state();
        let screen = rows(&state, 20).concat();

        assert!(screen.contains("media/"));
        assert!(screen.contains("[Equipped]"));
        assert!(screen.contains("[Equip]"));
        assert!(!screen.contains("[Purchase]"));
    }

    #[test]
    fn test_shop_grid_shows_prices() {
        let mut state = fixture_state();
        state.inventory.update(InventoryMsg::SetOwnership(OwnershipTab::Shop));
        let screen = rows(&state, 20).concat();

        assert!(screen.contains("Locked"));
        assert!(screen.contains("[Purchase]"));
        assert!(!screen.contains("[Equip]"));
    }

    #[test]
    fn test_empty_grid_renders_only_tabs() {
        let mut state = fixture_state();
        state.inventory.owned.clear();
        let rows = rows(&state, 12);

        assert!(rows[3..].iter().all(|row| row.trim().is_empty()));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut state = fixture_state();
        state.inventory.update(InventoryMsg::SetOwnership(OwnershipTab::Shop));
        let template = state.inventory.shop[0].clone();
        // enough shop skins for several rows
        for n in 0..6 {
            let mut extra = template.clone();
            extra.id = format!("extra-{n}");
            extra.name = format!("Extra {n}");
            state.inventory.shop.push(extra);
        }
        for _ in 0..6 {
            state.inventory.update(InventoryMsg::SelectNext);
        }
        let selected = state
            .inventory
            .selected_item()
            .map(|item| item.name.clone())
            .unwrap_or_default();

        // tabs + spacer + one card row
        let screen = rows(&state, 3 + ItemCard::HEIGHT).concat();

        assert!(screen.contains(&format!(" {selected} ")));
    }
}
