//! Home page: notices, replays, goal progress and hot clips

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::AppState,
    presentation::{
        components::{scroll_offset, stack},
        config::Styles,
        widgets::{
            clip_card::ClipCard,
            goal_bar::GoalBar,
            notice_card::{NoticeCard, NoticePopup},
            radio_item::RadioItemRow,
            section::section_block,
        },
    },
};

#[derive(Debug, Clone, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);
        let [notices_area, radio_area] =
            Layout::vertical([Constraint::Percentage(60), Constraint::Min(0)]).areas(left);
        let goals_height = u16::try_from(state.home.goals.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(GoalBar::HEIGHT)
            .saturating_add(2);
        let [goals_area, clips_area] =
            Layout::vertical([Constraint::Length(goals_height), Constraint::Min(0)]).areas(right);

        self.render_notices(state, frame, notices_area);
        self.render_radio(state, frame, radio_area);
        self.render_goals(state, frame, goals_area);
        self.render_clips(state, frame, clips_area);

        if let Some(notice) = state.home.opened_notice() {
            frame.render_widget(NoticePopup::new(notice, styles), NoticePopup::area(area));
        }
    }

    fn render_notices(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let inner = render_section(frame, area, "Latest notices", styles);
        let notices = &state.home.notices;
        if notices.is_empty() {
            render_placeholder(frame, inner, "No notices yet.", styles);
            return;
        }

        let last_seen = state.config.config.last_seen_notice.as_deref();
        let selected = state.home.selected_notice.unwrap_or(0);
        let slots = stack(inner, NoticeCard::HEIGHT + 1);
        let offset = scroll_offset(selected, slots.len());
        for (slot, (i, notice)) in slots.into_iter().zip(notices.iter().enumerate().skip(offset)) {
            let card = NoticeCard::new(notice, styles, last_seen)
                .selected(state.home.selected_notice == Some(i));
            let [card_area, _] = Layout::vertical([
                Constraint::Length(NoticeCard::HEIGHT),
                Constraint::Length(1),
            ])
            .areas(slot);
            frame.render_widget(card, card_area);
        }
    }

    fn render_radio(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let inner = render_section(frame, area, "Replays / Radio", styles);
        if state.home.radio_items.is_empty() {
            render_placeholder(frame, inner, "No replays yet.", styles);
            return;
        }
        for (slot, item) in stack(inner, 1).into_iter().zip(&state.home.radio_items) {
            frame.render_widget(RadioItemRow::new(item, styles), slot);
        }
    }

    fn render_goals(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let inner = render_section(frame, area, "Goal progress", styles);
        for (slot, metric) in stack(inner, GoalBar::HEIGHT)
            .into_iter()
            .zip(&state.home.goals)
        {
            frame.render_widget(GoalBar::new(metric, styles), slot);
        }
    }

    fn render_clips(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let inner = render_section(frame, area, "Hot clips", styles);
        if state.home.hot_clips.is_empty() {
            render_placeholder(frame, inner, "Add hot clip thumbnails.", styles);
            return;
        }
        for (slot, clip) in stack(inner, ClipCard::HEIGHT + 1)
            .into_iter()
            .zip(&state.home.hot_clips)
        {
            frame.render_widget(ClipCard::new(clip, styles), slot);
        }
    }
}

/// Draws the section frame and returns the area inside it
fn render_section(frame: &mut Frame, area: Rect, title: &str, styles: &Styles) -> Rect {
    let block = section_block(title, styles);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, styles: &Styles) {
    frame.render_widget(
        Paragraph::new(text).style(styles.style("muted")).centered(),
        area,
    );
}
