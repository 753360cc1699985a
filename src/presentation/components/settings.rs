//! Settings page: account card with the log out action

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::AppState,
    presentation::widgets::section::section_block,
};

#[derive(Debug, Clone, Default)]
pub struct SettingsComponent;

impl SettingsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [card_area, _] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(area);
        let [card_area, _] =
            Layout::horizontal([Constraint::Length(50), Constraint::Min(0)]).areas(card_area);

        let text = Text::from(vec![
            Line::from(vec![
                Span::styled("[Log out]", styles.style("brand")),
                Span::styled("  press Enter", styles.style("hint")),
            ]),
            Line::default(),
            Line::styled(
                format!("Version {}", env!("CARGO_PKG_VERSION")),
                styles.style("muted"),
            ),
        ]);
        let block = section_block("Account", styles);
        frame.render_widget(Paragraph::new(text).block(block), card_area);
    }
}
