use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{event_source::EventSource, Event, Frame, TuiLike},
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// Drives the Elm runtime from terminal events and renders after each change
pub struct AppRunner<T: TuiLike + 'static> {
    runtime: Runtime,
    tui: Arc<Mutex<T>>,
    event_source: EventSource,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    components: Components,
}

impl<T: TuiLike + 'static> AppRunner<T> {
    /// Runner reading its events from the terminal itself
    pub fn new(state: AppState, tui: Arc<Mutex<T>>) -> Result<Self> {
        let source: Arc<Mutex<dyn TuiLike + Send>> = Arc::<Mutex<T>>::clone(&tui);
        Self::new_with_events(state, tui, EventSource::real(source))
    }

    /// Runner with an injected event source, e.g. a scripted test queue
    pub fn new_with_events(
        state: AppState,
        tui: Arc<Mutex<T>>,
        event_source: EventSource,
    ) -> Result<Self> {
        let mut runtime = Runtime::new_with_executor(state);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx)?;

        Ok(Self {
            runtime,
            tui,
            event_source,
            tui_cmd_rx,
            components: Components::new(),
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run the main loop until the state asks to quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        while self.step().await? {}

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Handles one terminal event. Returns `false` once the app should quit.
    pub async fn step(&mut self) -> Result<bool> {
        let event = self.event_source.next().await;
        let needs_render = match event {
            // an exhausted source means the terminal is gone
            None => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
            Some(event) => self.forward_event(event),
        };

        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        self.apply_tui_commands().await?;

        if self.runtime.state().system.should_suspend {
            self.tui.lock().await.suspend()?;
            self.runtime.send_raw_msg(RawMsg::Resume);
            self.runtime.run_update_cycle()?;
            self.render().await?;
        }

        if self.runtime.state().system.should_quit {
            return Ok(false);
        }

        if needs_render {
            self.render().await?;
        }
        Ok(true)
    }

    /// Queues the raw message for an event; tells whether a redraw is due
    fn forward_event(&mut self, event: Event) -> bool {
        let raw = match event {
            Event::Quit | Event::Closed => RawMsg::Quit,
            Event::Tick => RawMsg::Tick,
            Event::Render => return true,
            Event::Resize(w, h) => RawMsg::Resize(w, h),
            Event::Key(key) => RawMsg::Key(key),
            Event::Error => RawMsg::Error("terminal event error".to_string()),
            Event::Init | Event::FocusGained | Event::FocusLost => return true,
        };
        let needs_render = !raw.is_frequent();
        self.runtime.send_raw_msg(raw);
        needs_render
    }

    async fn apply_tui_commands(&mut self) -> Result<()> {
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        let mut guard = self.tui.lock().await;
        guard.draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))?;
        Ok(())
    }
}
