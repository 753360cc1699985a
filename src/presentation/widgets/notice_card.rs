use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    domain::{feed::Notice, text::preview},
    presentation::config::Styles,
};

/// Notice title with a NEW badge and its date, followed by a one-line preview
pub struct NoticeCard<'a> {
    notice: &'a Notice,
    styles: &'a Styles,
    is_new: bool,
    selected: bool,
}

impl<'a> NoticeCard<'a> {
    pub const HEIGHT: u16 = 2;

    pub fn new(notice: &'a Notice, styles: &'a Styles, last_seen: Option<&str>) -> Self {
        Self {
            notice,
            styles,
            is_new: notice.is_newer_than(last_seen),
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

impl Widget for NoticeCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [head_area, preview_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let date_width = u16::try_from(self.notice.created_at.len()).unwrap_or(0);
        let [title_area, date_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(date_width)])
                .areas(head_area);

        let title_style = if self.selected {
            self.styles.style("selected")
        } else {
            self.styles.style("section")
        };
        let marker = if self.selected { "> " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, self.styles.style("brand")),
            Span::styled(self.notice.title.as_str(), title_style),
        ];
        if self.is_new {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("NEW", self.styles.style("new_badge")));
        }
        Line::from(spans).render(title_area, buf);
        Line::styled(self.notice.created_at.as_str(), self.styles.style("muted"))
            .right_aligned()
            .render(date_area, buf);

        // two columns of indent plus one for the ellipsis
        let width = usize::from(preview_area.width.saturating_sub(3));
        Line::styled(
            format!("  {}", preview(&self.notice.preview(), width)),
            self.styles.style("muted"),
        )
        .render(preview_area, buf);
    }
}

/// Full notice shown over the home page
pub struct NoticePopup<'a> {
    notice: &'a Notice,
    styles: &'a Styles,
}

impl<'a> NoticePopup<'a> {
    pub fn new(notice: &'a Notice, styles: &'a Styles) -> Self {
        Self { notice, styles }
    }

    /// Centered area covering most of `area`
    pub fn area(area: Rect) -> Rect {
        let [_, vertical, _] = Layout::vertical([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .areas(area);
        let [_, popup, _] = Layout::horizontal([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .areas(vertical);
        popup
    }
}

impl Widget for NoticePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.styles.style("brand"))
            .title(Span::styled(
                format!(" {} ", self.notice.title),
                self.styles.style("title"),
            ))
            .title_bottom(
                Line::styled(" Esc to close ", self.styles.style("hint")).right_aligned(),
            );

        let text = Text::from(vec![
            Line::styled(self.notice.created_at.as_str(), self.styles.style("muted")),
            Line::default(),
            Line::raw(self.notice.content.as_str()),
        ]);
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn notice(created_at: &str, content: &str) -> Notice {
        Notice {
            id: "n1".to_string(),
            title: "Schedule".to_string(),
            content: content.to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn render(widget: impl Widget, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("2025-01-01"), true)]
    #[case(Some("2025-01-02"), false)]
    #[case(Some("2025-02-01"), false)]
    fn test_new_badge(#[case] last_seen: Option<&str>, #[case] expected: bool) {
        let styles = Styles::default();
        let n = notice("2025-01-02", "Streams move to 9pm");
        let card = NoticeCard::new(&n, &styles, last_seen);
        assert_eq!(card.is_new(), expected);

        let content = render(card, 40, NoticeCard::HEIGHT);
        assert_eq!(content.contains("Schedule NEW"), expected);
    }

    #[test]
    fn test_card_layout() {
        let styles = Styles::default();
        let n = notice("2025-01-02", "Streams move to 9pm");
        let content = render(
            NoticeCard::new(&n, &styles, Some("2025-01-02")).selected(true),
            40,
            NoticeCard::HEIGHT,
        );

        assert_eq!(
            content,
            format!(
                "{:<30}{}{:<40}",
                "> Schedule", "2025-01-02", "  Streams move to 9pm"
            )
        );
    }

    #[test]
    fn test_card_preview_is_cut_to_width() {
        let styles = Styles::default();
        let n = notice("", &"x".repeat(200));
        let content = render(NoticeCard::new(&n, &styles, None), 20, NoticeCard::HEIGHT);

        assert!(content.ends_with(&format!("  {}…", "x".repeat(17))));
        assert!(!content.contains("NEW"));
    }

    #[test]
    fn test_popup_shows_full_content() {
        let styles = Styles::default();
        let n = notice("2025-01-02", "Streams move to 9pm");
        let content = render(NoticePopup::new(&n, &styles), 40, 8);

        assert!(content.contains(" Schedule "));
        assert!(content.contains("Streams move to 9pm"));
        assert!(content.contains("Esc to close"));
    }

    #[test]
    fn test_popup_area_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = NoticePopup::area(area);
        assert!(area.contains(popup.as_position()));
        assert_eq!(popup.width, 80);
        assert_eq!(popup.height, 28);
    }
}
