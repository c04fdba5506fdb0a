use std::path::PathBuf;
use std::time::Duration;

/// One playable file: where it lives on disk plus what the list shows.
#[derive(Debug, Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub duration: Option<Duration>,
    pub display: String,
}
