use super::*;
use crate::config::LibrarySettings;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn scan_dir_keeps_only_the_configured_extension() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("b.mp3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("a.txt"), b"ignore me").unwrap();
    fs::write(dir.path().join("a.mp3"), b"not a real mp3").unwrap();

    let tracks = scan_dir(dir.path(), &LibrarySettings::default()).unwrap();

    let mut names: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn scan_dir_accepts_uppercase_extensions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("loud.MP3"), b"not a real mp3").unwrap();

    let tracks = scan_dir(dir.path(), &LibrarySettings::default()).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].display, "loud");
}

#[test]
fn scan_dir_does_not_recurse_into_subdirectories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("child.mp3"), b"not real").unwrap();

    let tracks = scan_dir(dir.path(), &LibrarySettings::default()).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].display, "root");
}

#[test]
fn scan_dir_falls_back_to_file_stem_for_untagged_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("untitled.mp3"), b"no tags here").unwrap();

    let tracks = scan_dir(dir.path(), &LibrarySettings::default()).unwrap();
    assert_eq!(tracks[0].title, "untitled");
    assert_eq!(tracks[0].display, "untitled");
    assert_eq!(tracks[0].artist, None);
}

#[test]
fn scan_dir_rejects_paths_that_are_not_directories() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("song.mp3");
    fs::write(&file, b"not real").unwrap();

    assert!(matches!(
        scan_dir(&file, &LibrarySettings::default()),
        Err(ScanError::NotADirectory(_))
    ));
    assert!(matches!(
        scan_dir(Path::new("/definitely/not/here"), &LibrarySettings::default()),
        Err(ScanError::NotADirectory(_))
    ));
}

#[test]
fn scan_dir_ignores_directories_named_like_tracks() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("folder.mp3")).unwrap();
    fs::write(dir.path().join("real.mp3"), b"not real").unwrap();

    let tracks = scan_dir(dir.path(), &LibrarySettings::default()).unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].display, "real");
}
