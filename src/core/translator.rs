use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            home::HomeMsg, inventory::InventoryMsg, nav::NavMsg, settings::SettingsMsg,
            system::SystemMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{AppState, Page},
    },
    domain::item::{Category, OwnershipTab},
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Ctrl-C always quits, whatever the configured bindings say
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    let Some(action) = state.config.config.keybindings.get(&vec![key]).copied() else {
        return vec![];
    };

    // The notice popup is modal
    if state.nav.page == Page::Home && state.home.is_popup_open() {
        return match action {
            Action::Quit | Action::Suspend => translate_global_action(action),
            Action::Back | Action::Activate => vec![Msg::Home(HomeMsg::CloseNotice)],
            _ => vec![],
        };
    }

    match action {
        Action::Quit
        | Action::Suspend
        | Action::GoHome
        | Action::GoInventory
        | Action::GoSettings
        | Action::NextPage
        | Action::PrevPage => translate_global_action(action),
        _ => match state.nav.page {
            Page::Home => translate_home_action(action, state),
            Page::Inventory => translate_inventory_action(action, state),
            Page::Settings => translate_settings_action(action),
        },
    }
}

fn translate_global_action(action: Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::GoHome => vec![Msg::Nav(NavMsg::GoTo(Page::Home))],
        Action::GoInventory => vec![Msg::Nav(NavMsg::GoTo(Page::Inventory))],
        Action::GoSettings => vec![Msg::Nav(NavMsg::GoTo(Page::Settings))],
        Action::NextPage => vec![Msg::Nav(NavMsg::Next)],
        Action::PrevPage => vec![Msg::Nav(NavMsg::Prev)],
        _ => vec![],
    }
}

fn translate_home_action(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::SelectNext => vec![Msg::Home(HomeMsg::SelectNextNotice)],
        Action::SelectPrev => vec![Msg::Home(HomeMsg::SelectPrevNotice)],
        Action::Activate => match state.home.selected_notice() {
            Some(_) => vec![Msg::Home(HomeMsg::OpenNotice)],
            None => vec![Msg::status("No notices yet.")],
        },
        Action::Back => vec![Msg::System(SystemMsg::ClearStatusMessage)],
        _ => vec![],
    }
}

fn translate_inventory_action(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::ShowOwned => vec![Msg::Inventory(InventoryMsg::SetOwnership(
            OwnershipTab::Owned,
        ))],
        Action::ShowShop => vec![Msg::Inventory(InventoryMsg::SetOwnership(
            OwnershipTab::Shop,
        ))],
        Action::ToggleOwnership => vec![Msg::Inventory(InventoryMsg::ToggleOwnership)],
        Action::ShowSkin => vec![Msg::Inventory(InventoryMsg::SetCategory(Category::Skin))],
        Action::ShowMotion => vec![Msg::Inventory(InventoryMsg::SetCategory(
            Category::Motion,
        ))],
        Action::ToggleCategory => vec![Msg::Inventory(InventoryMsg::ToggleCategory)],
        Action::SelectNext => vec![Msg::Inventory(InventoryMsg::SelectNext)],
        Action::SelectPrev => vec![Msg::Inventory(InventoryMsg::SelectPrev)],
        Action::Activate => translate_item_action(state),
        Action::Back => vec![Msg::System(SystemMsg::ClearStatusMessage)],
        _ => vec![],
    }
}

/// Equip for owned items, purchase for locked ones
fn translate_item_action(state: &AppState) -> Vec<Msg> {
    let Some(item) = state.inventory.selected_item() else {
        return vec![Msg::status("No item selected")];
    };

    if item.is_locked() {
        vec![
            Msg::Inventory(InventoryMsg::Purchase(item.id.clone())),
            Msg::status(format!("[Purchased] {}", item.name)),
        ]
    } else if item.is_equipped() {
        vec![Msg::status(format!("{} is already equipped", item.name))]
    } else {
        vec![
            Msg::Inventory(InventoryMsg::Equip(item.id.clone())),
            Msg::status(format!("[Equipped] {}", item.name)),
        ]
    }
}

fn translate_settings_action(action: Action) -> Vec<Msg> {
    match action {
        Action::Activate => vec![Msg::Settings(SettingsMsg::Logout)],
        Action::Back => vec![Msg::System(SystemMsg::ClearStatusMessage)],
        _ => vec![],
    }
}
