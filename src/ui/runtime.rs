use std::io;
use std::time::{Duration, Instant};

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(100);

pub fn run(mut app: App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    tracing::info!(fields = app.fields().len(), "demo started");

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        // Wake up in time for the earliest pending parse.
        let now = Instant::now();
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).min(TICK_RATE))
            .unwrap_or(TICK_RATE);

        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => app.on_key(key, Instant::now()),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
        app.on_tick(Instant::now());
    }

    app.shutdown();
    drop(guard);
    tracing::info!("demo stopped");
    Ok(())
}
