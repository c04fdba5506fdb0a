use std::io::Stdout;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::AudioEngine;
use crate::config::Settings;
use crate::player::{Player, PlayerError};
use crate::ui;

/// Outcome of closing the directory prompt. A cancelled prompt never
/// reaches the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorySelection {
    Chosen(PathBuf),
    Cancelled,
}

/// Per-loop UI state that lives outside the player: the directory prompt
/// buffer, the last user-visible message, and the directory on display.
#[derive(Default)]
pub struct EventLoopState {
    pub prompt: Option<String>,
    pub message: Option<String>,
    pub current_dir: Option<PathBuf>,
}

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &Settings,
    player: &mut Player<impl AudioEngine>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, player, state, &settings.ui))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        if state.prompt.is_some() {
            handle_prompt_key(key.code, settings, player, state);
            continue;
        }

        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Char('o') => {
                state.prompt = Some(String::new());
            }
            KeyCode::Char('j') | KeyCode::Down => player.select_next(),
            KeyCode::Char('k') | KeyCode::Up => player.select_prev(),
            KeyCode::Enter => report(state, player.play()),
            KeyCode::Char(' ') | KeyCode::Char('p') => report(state, player.toggle()),
            KeyCode::Char('l') | KeyCode::Right => report(state, player.next()),
            KeyCode::Char('h') | KeyCode::Left => report(state, player.prev()),
            KeyCode::Char('s') => player.stop(),
            _ => {}
        }
    }

    Ok(())
}

fn handle_prompt_key(
    code: KeyCode,
    settings: &Settings,
    player: &mut Player<impl AudioEngine>,
    state: &mut EventLoopState,
) {
    match code {
        KeyCode::Esc => {
            state.prompt = None;
        }
        KeyCode::Backspace => {
            if let Some(buffer) = state.prompt.as_mut() {
                buffer.pop();
            }
        }
        KeyCode::Enter => match close_prompt(state.prompt.take()) {
            DirectorySelection::Chosen(dir) => {
                match player.load_directory(&dir, &settings.library) {
                    Ok(()) => {
                        state.current_dir = Some(dir);
                        state.message = None;
                    }
                    Err(e) => {
                        tracing::warn!("directory load of {} failed: {e}", dir.display());
                        state.message = Some(e.to_string());
                    }
                }
            }
            DirectorySelection::Cancelled => {}
        },
        KeyCode::Char(c) if !c.is_control() => {
            if let Some(buffer) = state.prompt.as_mut() {
                buffer.push(c);
            }
        }
        _ => {}
    }
}

/// Translate the prompt buffer into an explicit selection result. An empty
/// or whitespace-only buffer counts as cancelling.
fn close_prompt(buffer: Option<String>) -> DirectorySelection {
    match buffer {
        Some(b) if !b.trim().is_empty() => DirectorySelection::Chosen(PathBuf::from(b.trim())),
        _ => DirectorySelection::Cancelled,
    }
}

/// Record a transport failure for the status line; successes clear it.
fn report(state: &mut EventLoopState, result: Result<(), PlayerError>) {
    match result {
        Ok(()) => state.message = None,
        Err(e) => {
            tracing::warn!("transport command failed: {e}");
            state.message = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_counts_as_cancelled() {
        assert_eq!(close_prompt(None), DirectorySelection::Cancelled);
        assert_eq!(close_prompt(Some(String::new())), DirectorySelection::Cancelled);
        assert_eq!(close_prompt(Some("   ".into())), DirectorySelection::Cancelled);
    }

    #[test]
    fn prompt_paths_are_trimmed() {
        assert_eq!(
            close_prompt(Some("  /tmp/music  ".into())),
            DirectorySelection::Chosen(PathBuf::from("/tmp/music"))
        );
    }
}
