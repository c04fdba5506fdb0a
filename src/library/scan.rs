use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

/// Errors surfaced when a directory cannot be turned into a playlist.
///
/// Both kinds are non-fatal: callers keep whatever playlist they had.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("failed to read {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

fn matches_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim().trim_start_matches('.');
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

fn make_display(title: &str, artist: Option<&str>) -> String {
    match artist {
        Some(a) if !a.trim().is_empty() => format!("{} - {}", a.trim(), title),
        _ => title.to_string(),
    }
}

/// Enumerate the immediate children of `dir`, keeping regular files whose
/// extension matches `settings.extension` (case-insensitive).
///
/// Tracks come back in directory iteration order; no sorting is applied, so
/// the playlist mirrors what the filesystem reports. Titles come from tags
/// when the file has readable ones, otherwise from the file stem.
pub fn scan_dir(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut tracks: Vec<Track> = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links)
    {
        let entry = entry.map_err(|e| ScanError::Unreadable {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() || !matches_extension(path, &settings.extension) {
            continue;
        }

        let default_title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();

        let mut title = default_title;
        let mut artist: Option<String> = None;
        let mut duration: Option<Duration> = None;

        if let Ok(tagged) = lofty::read_from_path(path) {
            duration = Some(tagged.properties().duration());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.get_string(ItemKey::TrackTitle) {
                    if !v.trim().is_empty() {
                        title = v.to_string();
                    }
                }
                if let Some(v) = tag.get_string(ItemKey::TrackArtist) {
                    let v = v.trim();
                    if !v.is_empty() {
                        artist = Some(v.to_string());
                    }
                }
            }
        }

        let display = make_display(&title, artist.as_deref());

        tracks.push(Track {
            path: path.to_path_buf(),
            title,
            artist,
            duration,
            display,
        });
    }

    tracing::debug!("scanned {}: {} track(s)", dir.display(), tracks.len());
    Ok(tracks)
}
