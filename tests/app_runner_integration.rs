use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::Rect;
use tokio::sync::Mutex;

use meowbuddy::{
    core::state::{AppState, Page},
    infrastructure::{
        config::Config,
        fixtures::{EmbeddedFixtures, FixtureSource},
        tui::{event_source::EventSource, test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
};

fn initial_state() -> Result<AppState> {
    Ok(AppState::new(EmbeddedFixtures.load()?, Config::from_defaults()?))
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
}

fn enter() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()))
}

/// Runner over a 100x30 test terminal fed with `events`
fn runner(
    events: impl IntoIterator<Item = Event>,
) -> Result<(AppRunner<TestTui>, Arc<Mutex<TestTui>>)> {
    let tui = Arc::new(Mutex::new(TestTui::new(100, 30)?));
    let runner = AppRunner::new_with_events(
        initial_state()?,
        Arc::clone(&tui),
        EventSource::test(events),
    )?;
    Ok((runner, tui))
}

#[tokio::test]
async fn test_run_renders_home_and_quits_when_events_run_out() -> Result<()> {
    let (mut runner, tui) = runner([])?;

    runner.run().await?;

    let tui = tui.lock().await;
    let screen = tui.screen_text();
    assert!(screen.contains("MeowBuddy"));
    assert!(screen.contains("Latest notices"));
    assert!(screen.contains("Goal progress"));
    assert!(tui.draw_count() >= 1);
    assert!(!tui.is_entered());
    assert!(runner.runtime().state().system.should_quit);
    Ok(())
}

#[tokio::test]
async fn test_inventory_page_shows_owned_items() -> Result<()> {
    let (mut runner, tui) = runner([key('2')])?;

    assert!(runner.step().await?);

    let screen = tui.lock().await.screen_text();
    assert_eq!(runner.runtime().state().current_page(), Page::Inventory);
    assert!(screen.contains("My items"));
    assert!(screen.contains("Equipped"));
    assert!(!screen.contains("Purchase]"));
    Ok(())
}

#[tokio::test]
async fn test_purchase_from_shop() -> Result<()> {
    let (mut runner, tui) = runner([key('2'), key('s'), enter()])?;

    for _ in 0..3 {
        assert!(runner.step().await?);
    }

    let state = runner.runtime().state();
    assert!(state.inventory.owned.iter().any(|item| item.id == "skin-shop-1"));
    assert!(state.inventory.shop.iter().all(|item| item.id != "skin-shop-1"));
    assert!(state
        .system
        .status_message
        .as_deref()
        .is_some_and(|message| message.starts_with("[Purchased]")));

    let screen = tui.lock().await.screen_text();
    assert!(screen.contains("[Purchase]"));
    assert!(screen.contains("[Purchased]"));
    Ok(())
}

#[tokio::test]
async fn test_logout_from_settings() -> Result<()> {
    let (mut runner, tui) = runner([key('3'), enter()])?;

    assert!(runner.step().await?);
    assert!(tui.lock().await.screen_text().contains("Log out"));
    assert!(runner.step().await?);

    assert!(tui.lock().await.screen_text().contains("Logged out"));
    Ok(())
}

#[tokio::test]
async fn test_resize_event_resizes_terminal() -> Result<()> {
    let (mut runner, tui) = runner([Event::Resize(120, 40)])?;

    assert!(runner.step().await?);

    assert_eq!(tui.lock().await.size(), Rect::new(0, 0, 120, 40));
    Ok(())
}

#[tokio::test]
async fn test_suspend_and_resume() -> Result<()> {
    let ctrl_z = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
    let (mut runner, tui) = runner([ctrl_z])?;

    assert!(runner.step().await?);

    assert_eq!(tui.lock().await.suspend_count(), 1);
    assert!(!runner.runtime().state().system.should_suspend);
    Ok(())
}

#[tokio::test]
async fn test_quit_key_stops_the_loop() -> Result<()> {
    let (mut runner, _tui) = runner([key('q'), key('2')])?;

    assert!(!runner.step().await?);
    assert_eq!(runner.runtime().state().current_page(), Page::Home);
    Ok(())
}

#[tokio::test]
async fn test_notice_popup_opens_and_closes() -> Result<()> {
    let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()));
    let (mut runner, tui) = runner([enter(), esc])?;

    assert!(runner.step().await?);
    assert!(tui.lock().await.screen_text().contains("Esc to close"));

    assert!(runner.step().await?);
    assert!(!tui.lock().await.screen_text().contains("Esc to close"));
    Ok(())
}
