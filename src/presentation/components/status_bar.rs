//! Status bar: the latest status message and key hints for the current page

use ratatui::prelude::*;

use crate::{
    core::state::{AppState, Page},
    domain::text::fit_width,
    presentation::config::{Action, KeyBindings},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [message_area, hint_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let width = usize::from(area.width);

        let message = state.system.status_message.as_deref().unwrap_or_default();
        frame.render_widget(
            Line::styled(fit_width(message, width), styles.style("status")),
            message_area,
        );
        frame.render_widget(
            Line::styled(fit_width(&self.hint(state), width), styles.style("hint")),
            hint_area,
        );
    }

    /// Key hints such as `<q> quit  <tab> next page`, first bound key only
    pub fn hint(&self, state: &AppState) -> String {
        let mut hints: Vec<(Action, &str)> = match state.current_page() {
            Page::Home if state.home.is_popup_open() => vec![(Action::Back, "close")],
            Page::Home => vec![
                (Action::SelectNext, "next"),
                (Action::SelectPrev, "prev"),
                (Action::Activate, "open notice"),
            ],
            Page::Inventory => vec![
                (Action::ToggleOwnership, "my items/shop"),
                (Action::ToggleCategory, "skin/motion"),
                (Action::SelectNext, "next"),
                (Action::Activate, "equip/purchase"),
            ],
            Page::Settings => vec![(Action::Activate, "log out")],
        };
        hints.extend([(Action::NextPage, "next page"), (Action::Quit, "quit")]);

        let keybindings = &state.config.config.keybindings;
        hints
            .into_iter()
            .filter_map(|(action, label)| {
                first_key(keybindings, action).map(|key| format!("{key} {label}"))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

fn first_key(keybindings: &KeyBindings, action: Action) -> Option<String> {
    keybindings.keys_for(action).into_iter().next()
}
