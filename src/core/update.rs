use crate::core::{
    cmd::Cmd,
    msg::{home::HomeMsg, inventory::InventoryMsg, settings::SettingsMsg, Msg},
    state::{AppState, Page},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Nav(nav_msg) => {
            let from = state.nav.page;
            let mut commands = state.nav.update(nav_msg);
            let to = state.nav.page;
            if from != to {
                commands.extend(leave_page(&mut state, from));
                commands.extend(enter_page(&mut state, to));
            }
            (state, commands)
        }

        Msg::Home(home_msg) => {
            let commands = state.home.update(home_msg);
            (state, commands)
        }

        Msg::Inventory(inventory_msg) => {
            let commands = state.inventory.update(inventory_msg);
            (state, commands)
        }

        Msg::Settings(SettingsMsg::Logout) => {
            state.system.status_message = Some("Logged out".to_string());
            (state, vec![Cmd::Logout])
        }
    }
}

fn leave_page(state: &mut AppState, page: Page) -> Vec<Cmd> {
    match page {
        Page::Home => state.home.update(HomeMsg::CloseNotice),
        Page::Inventory | Page::Settings => vec![],
    }
}

/// The inventory page starts from My items / Skin each time it is entered,
/// unless the user asked to keep the previous tabs.
fn enter_page(state: &mut AppState, page: Page) -> Vec<Cmd> {
    match page {
        Page::Inventory if !state.config.config.preserve_inventory_tabs => {
            state.inventory.update(InventoryMsg::ResetTabs)
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::{nav::NavMsg, system::SystemMsg},
        domain::item::{Category, OwnershipTab},
        infrastructure::{
            config::Config,
            fixtures::{EmbeddedFixtures, FixtureSource},
        },
    };

    fn state_with(preserve_inventory_tabs: bool) -> AppState {
        let fixtures = EmbeddedFixtures.load().unwrap_or_default();
        let config = Config {
            preserve_inventory_tabs,
            ..Default::default()
        };
        AppState::new(fixtures, config)
    }

    fn apply(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> AppState {
        msgs.into_iter().fold(state, |state, msg| update(msg, state).0)
    }

    fn pick_shop_motion() -> Vec<Msg> {
        vec![
            Msg::Nav(NavMsg::GoTo(Page::Inventory)),
            Msg::Inventory(InventoryMsg::SetOwnership(OwnershipTab::Shop)),
            Msg::Inventory(InventoryMsg::SetCategory(Category::Motion)),
        ]
    }

    #[test]
    fn test_system_quit() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default());
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_inventory_tabs_reset_when_reentered() {
        let state = apply(state_with(false), pick_shop_motion());
        assert_eq!(state.inventory.ownership, OwnershipTab::Shop);
        assert_eq!(state.inventory.category, Category::Motion);

        let state = apply(
            state,
            [
                Msg::Nav(NavMsg::GoTo(Page::Home)),
                Msg::Nav(NavMsg::GoTo(Page::Inventory)),
            ],
        );
        assert_eq!(state.inventory.ownership, OwnershipTab::Owned);
        assert_eq!(state.inventory.category, Category::Skin);
    }

    #[test]
    fn test_inventory_tabs_preserved_when_configured() {
        let state = apply(state_with(true), pick_shop_motion());
        let state = apply(
            state,
            [
                Msg::Nav(NavMsg::GoTo(Page::Settings)),
                Msg::Nav(NavMsg::GoTo(Page::Inventory)),
            ],
        );
        assert_eq!(state.inventory.ownership, OwnershipTab::Shop);
        assert_eq!(state.inventory.category, Category::Motion);
    }

    #[test]
    fn test_goto_current_page_keeps_tabs() {
        let state = apply(state_with(false), pick_shop_motion());
        let state = apply(state, [Msg::Nav(NavMsg::GoTo(Page::Inventory))]);
        assert_eq!(state.inventory.ownership, OwnershipTab::Shop);
    }

    #[test]
    fn test_leaving_home_closes_popup() {
        let state = apply(state_with(false), [Msg::Home(HomeMsg::OpenNotice)]);
        assert!(state.home.is_popup_open());

        let state = apply(
            state,
            [Msg::Nav(NavMsg::Next), Msg::Nav(NavMsg::GoTo(Page::Home))],
        );
        assert!(!state.home.is_popup_open());
    }

    #[test]
    fn test_logout_sets_status_and_emits_command() {
        let (state, cmds) = update(Msg::Settings(SettingsMsg::Logout), AppState::default());
        assert_eq!(state.system.status_message.as_deref(), Some("Logged out"));
        assert_eq!(cmds, vec![Cmd::Logout]);
    }
}
