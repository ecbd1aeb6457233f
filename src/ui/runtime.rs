use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

pub fn run(config: Config) -> anyhow::Result<()> {
    let tick_rate = config.ui.tick_rate();
    let mut app = App::new(config, Instant::now())?;
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(?tick_rate, "Terminal UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app, Instant::now()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            // The next draw picks up the new size; ticks only drive animation.
            Ok(AppEvent::Resize(..)) | Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Terminal UI stopped");
    Ok(())
}
