use ratatui::prelude::*;

use crate::{domain::feed::RadioItem, presentation::config::Styles};

/// `▶ title   date · length` on a single line
pub struct RadioItemRow<'a> {
    item: &'a RadioItem,
    styles: &'a Styles,
}

impl<'a> RadioItemRow<'a> {
    pub fn new(item: &'a RadioItem, styles: &'a Styles) -> Self {
        Self { item, styles }
    }
}

impl Widget for RadioItemRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let meta = format!("{} · {}", self.item.date, self.item.length);
        let meta_width = u16::try_from(meta.chars().count()).unwrap_or(area.width);
        let [title_area, meta_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(meta_width + 1)])
                .areas(area);

        Line::from(vec![
            Span::styled("▶ ", self.styles.style("brand")),
            Span::raw(self.item.title.as_str()),
        ])
        .render(title_area, buf);
        Line::styled(meta, self.styles.style("muted"))
            .right_aligned()
            .render(meta_area, buf);
    }
}
