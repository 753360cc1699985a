use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

use crate::presentation::config::Styles;

/// Rounded block with a styled title, used for every dashboard section
pub fn section_block<'a>(title: &'a str, styles: &Styles) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.style("muted"))
        .title(Span::styled(format!(" {title} "), styles.style("section")))
}
