use ratatui::prelude::*;

use crate::{domain::feed::Clip, presentation::config::Styles};

/// Clip title with its view count and duration underneath
pub struct ClipCard<'a> {
    clip: &'a Clip,
    styles: &'a Styles,
}

impl<'a> ClipCard<'a> {
    pub const HEIGHT: u16 = 2;

    pub fn new(clip: &'a Clip, styles: &'a Styles) -> Self {
        Self { clip, styles }
    }
}

impl Widget for ClipCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(vec![
            Line::from(vec![
                Span::styled("▶ ", self.styles.style("brand")),
                Span::styled(self.clip.title.as_str(), self.styles.style("section")),
            ]),
            Line::styled(
                format!("  {} · {}", self.clip.views, self.clip.duration),
                self.styles.style("muted"),
            ),
        ]);
        text.render(area, buf);
    }
}
