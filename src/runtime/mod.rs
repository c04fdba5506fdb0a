use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::RodioEngine;
use crate::player::Player;

mod event_loop;
mod logging;
mod settings;

pub use event_loop::EventLoopState;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings.log);

    let engine = RodioEngine::new()?;
    let mut player = Player::new(engine);
    let mut state = EventLoopState::default();

    // Optional starting directory on the command line.
    if let Some(dir) = env::args().nth(1).map(PathBuf::from) {
        match player.load_directory(&dir, &settings.library) {
            Ok(()) => state.current_dir = Some(dir),
            Err(e) => {
                tracing::warn!("initial scan of {} failed: {e}", dir.display());
                state.message = Some(e.to_string());
            }
        }
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut player, &mut state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
