use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{domain::item::Item, presentation::config::Styles};

/// Bordered inventory card: badge, image path, price and action button
pub struct ItemCard<'a> {
    item: &'a Item,
    styles: &'a Styles,
    selected: bool,
}

impl<'a> ItemCard<'a> {
    pub const HEIGHT: u16 = 5;

    pub fn new(item: &'a Item, styles: &'a Styles) -> Self {
        Self {
            item,
            styles,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn badge(&self) -> Option<Span<'static>> {
        if self.item.is_locked() {
            Some(Span::styled("Locked", self.styles.style("locked")))
        } else if self.item.is_equipped() {
            Some(Span::styled("Equipped", self.styles.style("equipped")))
        } else {
            None
        }
    }

    fn action_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        if let Some(price) = self.item.display_price() {
            spans.push(Span::styled(price, self.styles.style("price")));
            spans.push(Span::raw(" "));
        }
        let button_style = if self.item.is_equipped() {
            self.styles.style("equipped")
        } else {
            self.styles.style("brand")
        };
        spans.push(Span::styled(
            format!("[{}]", self.item.action_label()),
            button_style,
        ));
        Line::from(spans)
    }
}

impl Widget for ItemCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            self.styles.style("selected")
        } else {
            self.styles.style("muted")
        };
        let border_type = if self.selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.item.name),
                self.styles.style("section"),
            ));

        let badge = self.badge().map(Line::from).unwrap_or_default();
        let text = Text::from(vec![
            badge,
            Line::styled(self.item.image.as_str(), self.styles.style("muted")),
            self.action_line(),
        ]);
        Paragraph::new(text).block(block).render(area, buf);
    }
}
