use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::engine::DeviceFactory;
use crate::environment;
use crate::track::{MediaTrack, Track};

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, rejected) = settings::load_settings();
    logging::init(&settings.log);
    if let Some(err) = rejected {
        log::warn!("config ignored: {err}");
    }

    let source = env::args()
        .nth(1)
        .ok_or("usage: cadenza <file or file:// url>")?;

    let caps = environment::capabilities();
    log::info!(
        "known formats: {}",
        caps.formats().collect::<Vec<_>>().join(", ")
    );
    let output = environment::open_output()?;

    let mut track = MediaTrack::new(
        source,
        settings.playback.preload,
        DeviceFactory::new(output.mixer().clone()),
    );
    track.set_id(1);
    if !track.can_play_current_format() {
        log::warn!("{} may not be playable", track.source());
    }
    if settings.playback.autoplay {
        track.play();
    }
    let mut app = App::new(Box::new(track), settings.playback.seek_step_seconds);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);
    app.track.stop();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
