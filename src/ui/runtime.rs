use crate::config::Config;
use crate::ledger::Friend;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Runs the interactive session until the user quits.
pub fn run(config: &Config, friends: Vec<Friend>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.defaults.tick_rate_ms);
    let mut app = App::with_friends(config, friends);
    let events = EventHandler::new(tick_rate);
    tracing::info!(friends = app.registry().len(), "Session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            // Redraw happens at the top of the loop.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!(friends = app.registry().len(), "Session ended");
    Ok(())
}
