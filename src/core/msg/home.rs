use serde::{Deserialize, Serialize};

/// Home dashboard messages for HomeState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeMsg {
    SelectNextNotice,
    SelectPrevNotice,
    /// Opens the detail popup of the selected notice
    OpenNotice,
    CloseNotice,
}
