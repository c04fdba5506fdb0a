//! ratatui rendering.
//!
//! Everything here is a pure view over the player and event-loop state;
//! drawing never mutates either.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::audio::AudioEngine;
use crate::config::UiSettings;
use crate::library::Track;
use crate::player::{PlaybackState, Player};
use crate::runtime::EventLoopState;

/// Render the controls help text.
fn controls_text() -> String {
    [
        "[j/k] up/down",
        "[enter] play selected",
        "[space/p] play/pause",
        "[h/l] prev/next",
        "[s] stop",
        "[o] open directory",
        "[q] quit",
    ]
    .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The transport glyph mirrors the engine state, never the other way round.
fn transport_text(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Playing => "▶ Playing",
        PlaybackState::Paused => "⏸ Paused",
        PlaybackState::Stopped => "■ Stopped",
    }
}

/// Build the "Song:" text from tag fields, tolerating a missing artist.
fn now_playing_text(track: &Track) -> String {
    match track.artist.as_deref() {
        Some(artist) => format!("{} - {}", artist, track.title),
        None => track.title.clone(),
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<E: AudioEngine>(
    frame: &mut Frame,
    player: &Player<E>,
    state: &EventLoopState,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" minim ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box: the directory prompt replaces the transport line while open.
    let status = if let Some(buffer) = &state.prompt {
        format!("Open directory: {buffer}_ (enter to scan, esc to cancel)")
    } else {
        let mut parts: Vec<String> = Vec::new();
        parts.push(transport_text(player.state).to_string());

        if let Some(track) = player.now_playing_track() {
            let song = now_playing_text(track);
            match track.duration {
                Some(d) => parts.push(format!("Song: {} [{}]", song, format_mmss(d))),
                None => parts.push(format!("Song: {song}")),
            }
        }

        if let Some(dir) = &state.current_dir {
            parts.push(format!("Dir: {}", dir.display()));
        }

        if let Some(msg) = &state.message {
            parts.push(format!("! {msg}"));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding::new(1, 0, 0, 0))
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Main list
    if player.has_tracks() {
        let items: Vec<ListItem> = player
            .tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                if player.now_playing == Some(i) {
                    ListItem::new(format!("♪ {}", track.display))
                        .style(Style::default().add_modifier(Modifier::BOLD))
                } else {
                    ListItem::new(track.display.as_str())
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" tracks "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut list_state = ratatui::widgets::ListState::default();
        list_state.select(player.selected);
        frame.render_stateful_widget(list, chunks[2], &mut list_state);
    } else {
        let empty = Paragraph::new("No tracks loaded. Press [o] and type a directory path.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" tracks "));
        frame.render_widget(empty, chunks[2]);
    }

    // Footer
    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::new(1, 0, 0, 0)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_mmss_pads_minutes_and_seconds() {
        assert_eq!(format_mmss(Duration::from_secs(0)), "00:00");
        assert_eq!(format_mmss(Duration::from_secs(61)), "01:01");
        assert_eq!(format_mmss(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn now_playing_text_tolerates_a_missing_artist() {
        let mut track = Track {
            path: std::path::PathBuf::from("/tmp/song.mp3"),
            title: "Song".into(),
            artist: None,
            duration: None,
            display: "Song".into(),
        };
        assert_eq!(now_playing_text(&track), "Song");

        track.artist = Some("Artist".into());
        assert_eq!(now_playing_text(&track), "Artist - Song");
    }
}
