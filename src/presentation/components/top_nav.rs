//! Top navigation bar: app title and page tabs

use ratatui::{prelude::*, widgets::Tabs};
use strum::IntoEnumIterator;

use crate::core::state::{AppState, Page};

#[derive(Debug, Clone, Default)]
pub struct TopNavComponent;

impl TopNavComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [title_area, tabs_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let title = Line::from(vec![
            Span::styled("MeowBuddy", styles.style("title")),
            Span::raw("  "),
            Span::styled("Desktop widget manager", styles.style("subtitle")),
        ]);
        frame.render_widget(title, title_area);

        let tabs = Tabs::new(Page::iter().map(|page| format!(" {page} ")))
            .select(state.current_page().index())
            .style(styles.style("nav_inactive"))
            .highlight_style(styles.style("nav_active"))
            .padding("", "")
            .divider(" ");
        frame.render_widget(tabs, tabs_area);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::presentation::components::tests::{draw_rows, fixture_state};

    #[test]
    fn test_view() {
        let mut state = fixture_state();
        state.nav.page = Page::Inventory;
        let component = TopNavComponent::new();

        let rows = draw_rows(40, 2, |frame, area| component.view(&state, frame, area));

        assert_eq!(rows[0], format!("{:<40}", "MeowBuddy  Desktop widget manager"));
        assert_eq!(rows[1], format!("{:<40}", " Home   Inventory   Settings "));
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut state = fixture_state();
        state.nav.page = Page::Settings;
        let component = TopNavComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 2))
            .expect("test backend never fails");

        terminal
            .draw(|frame| {
                let area = frame.area();
                component.view(&state, frame, area);
            })
            .expect("test backend never fails");

        let buffer = terminal.backend().buffer();
        let active = state.config.config.styles.style("nav_active");
        // " Settings " starts at column 19
        let cell = &buffer[(20, 1)];
        assert_eq!(cell.symbol(), "S");
        assert_eq!(cell.fg, active.fg.unwrap_or_default());
    }
}
