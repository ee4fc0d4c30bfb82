use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::config;
use crate::ui;

/// Main terminal event loop: dispatches engine events, draws, and handles
/// input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.tick_ms);

    loop {
        app.tick();
        terminal.draw(|f| ui::draw(f, app, settings))?;

        if app.should_quit {
            return Ok(());
        }

        if !event::poll(tick)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            KeyCode::Char(' ') | KeyCode::Char('p') => app.toggle_play_pause(),
            KeyCode::Char('s') => app.stop(),
            KeyCode::Char('l') | KeyCode::Right => app.seek_forward(),
            KeyCode::Char('h') | KeyCode::Left => app.seek_backward(),
            _ => {}
        }
    }
}
