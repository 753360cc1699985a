use crate::{
    core::{cmd::Cmd, msg::home::HomeMsg},
    domain::{
        feed::{Clip, Notice, RadioItem},
        goal::GoalMetric,
    },
};

/// Home dashboard records and the notice selection
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub notices: Vec<Notice>,
    pub radio_items: Vec<RadioItem>,
    pub goals: Vec<GoalMetric>,
    pub hot_clips: Vec<Clip>,
    pub selected_notice: Option<usize>,
    /// Index of the notice shown in the detail popup
    pub open_notice: Option<usize>,
}

impl HomeState {
    pub fn new(
        notices: Vec<Notice>,
        radio_items: Vec<RadioItem>,
        goals: Vec<GoalMetric>,
        hot_clips: Vec<Clip>,
    ) -> Self {
        let selected_notice = if notices.is_empty() { None } else { Some(0) };
        Self {
            notices,
            radio_items,
            goals,
            hot_clips,
            selected_notice,
            open_notice: None,
        }
    }

    pub fn selected_notice(&self) -> Option<&Notice> {
        self.selected_notice.and_then(|i| self.notices.get(i))
    }

    pub fn opened_notice(&self) -> Option<&Notice> {
        self.open_notice.and_then(|i| self.notices.get(i))
    }

    pub fn is_popup_open(&self) -> bool {
        self.opened_notice().is_some()
    }

    pub fn update(&mut self, msg: HomeMsg) -> Vec<Cmd> {
        match msg {
            HomeMsg::SelectNextNotice => {
                if !self.notices.is_empty() {
                    let last = self.notices.len() - 1;
                    self.selected_notice = Some(match self.selected_notice {
                        Some(i) => (i + 1).min(last),
                        None => 0,
                    });
                }
                vec![]
            }
            HomeMsg::SelectPrevNotice => {
                if !self.notices.is_empty() {
                    self.selected_notice =
                        Some(self.selected_notice.map_or(0, |i| i.saturating_sub(1)));
                }
                vec![]
            }
            HomeMsg::OpenNotice => {
                if self.selected_notice().is_some() {
                    self.open_notice = self.selected_notice;
                }
                vec![]
            }
            HomeMsg::CloseNotice => {
                self.open_notice = None;
                vec![]
            }
        }
    }
}
