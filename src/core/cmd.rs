use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents the side effects requested by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),

    // Account
    Logout,

    // Logging related
    LogError { message: String },
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(mut commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Short name used in execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui::Resize",
            Cmd::Logout => "Logout",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(_) => "Batch",
            Cmd::None => "None",
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            Cmd::Tui(..) => 0,
            Cmd::Logout => 1,
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,
            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(Cmd::priority).min().unwrap_or(255),
            Cmd::None => 255,
        }
    }
}
