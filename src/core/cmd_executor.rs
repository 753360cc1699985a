use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Command executor that carries out the side effects requested by `update`
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(tx) => tx.send(tui_cmd.clone())?,
                None => log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}"),
            },

            Cmd::Logout => {
                // there is no session to end
                log::info!("logout clicked");
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, highest priority first
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut ordered: Vec<&Cmd> = commands.iter().collect();
        ordered.sort_by_key(|cmd| cmd.priority());

        ordered
            .into_iter()
            .map(|cmd| match self.execute_command(cmd) {
                Ok(()) => format!("✓ Executed: {}", cmd.name()),
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    error_msg
                }
            })
            .collect()
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_tui_sender: self.tui_sender.is_some(),
            is_tui_sender_closed: self.tui_sender.as_ref().map(|tx| tx.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub has_tui_sender: bool,
    pub is_tui_sender_closed: Option<bool>,
}
