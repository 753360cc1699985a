use ratatui::{prelude::*, widgets::Gauge};

use crate::{domain::goal::GoalMetric, presentation::config::Styles};

/// Label line followed by a progress gauge
pub struct GoalBar<'a> {
    metric: &'a GoalMetric,
    styles: &'a Styles,
}

impl<'a> GoalBar<'a> {
    pub const HEIGHT: u16 = 2;

    pub fn new(metric: &'a GoalMetric, styles: &'a Styles) -> Self {
        Self { metric, styles }
    }

    pub fn gauge_label(&self) -> String {
        format!(
            "{} ({}%)",
            self.metric.amount_label(),
            self.metric.progress_pct()
        )
    }
}

impl Widget for GoalBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [label_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        Line::styled(self.metric.label.as_str(), self.styles.style("section"))
            .render(label_area, buf);
        Gauge::default()
            .gauge_style(self.styles.style("progress"))
            .percent(u16::from(self.metric.progress_pct()))
            .label(Span::styled(self.gauge_label(), self.styles.style("brand")))
            .use_unicode(true)
            .render(gauge_area, buf);
    }
}
