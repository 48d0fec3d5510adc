use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::LibrarySettings;

use super::model::Track;
use super::title::title_from_path;

/// Lowercased extensions from the settings, without dots or blanks.
fn audio_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| extensions.contains(&ext))
}

/// Dotfiles below the scan root. The root itself is always walked.
fn is_hidden_entry(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Build a track for a single file, titled according to `settings`.
pub fn track_from_path(path: &Path, settings: &LibrarySettings) -> Track {
    Track::new(title_from_path(path, settings.tag_titles), path)
}

/// Collect the audio files below `dir` as tracks, sorted by path.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let extensions = audio_extensions(settings);
    let max_depth = match (settings.recursive, settings.max_depth) {
        (false, _) => 1,
        (true, Some(d)) => d,
        (true, None) => usize::MAX,
    };

    let mut tracks: Vec<Track> = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| settings.include_hidden || !is_hidden_entry(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() || e.path().is_file())
        .filter(|e| has_extension(e.path(), &extensions))
        .map(|e| track_from_path(e.path(), settings))
        .collect();

    tracks.sort_by(|a, b| a.path().cmp(b.path()));
    debug!(dir = %dir.display(), found = tracks.len(), "scanned directory");
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn touch(path: PathBuf) -> PathBuf {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"not real audio").unwrap();
        path
    }

    fn paths(tracks: &[Track]) -> Vec<&Path> {
        tracks.iter().map(|t| t.path()).collect()
    }

    #[test]
    fn configured_extensions_are_normalized_once() {
        let settings = LibrarySettings {
            extensions: vec![" .Opus ".into(), "".into(), "MP3".into()],
            ..LibrarySettings::default()
        };
        let exts = audio_extensions(&settings);
        assert_eq!(exts, vec!["opus".to_string(), "mp3".to_string()]);
        assert!(has_extension(Path::new("x/a.OPUS"), &exts));
        assert!(!has_extension(Path::new("x/a.flac"), &exts));
        assert!(!has_extension(Path::new("x/mp3"), &exts));
    }

    #[test]
    fn results_are_ordered_by_path_even_when_titles_repeat() {
        let dir = tempdir().unwrap();
        let later = touch(dir.path().join("b-side").join("Intro.mp3"));
        let earlier = touch(dir.path().join("a-side").join("Intro.mp3"));
        let top = touch(dir.path().join("top.ogg"));
        touch(dir.path().join("cover.jpg"));

        let tracks = scan(dir.path(), &LibrarySettings::default());

        assert_eq!(
            paths(&tracks),
            vec![earlier.as_path(), later.as_path(), top.as_path()]
        );
        assert_eq!(tracks[0].title(), "Intro");
        assert_eq!(tracks[1].title(), "Intro");
    }

    #[test]
    fn tag_titles_setting_reaches_scanned_tracks() {
        let dir = tempdir().unwrap();
        touch(dir.path().join("untagged.wav"));

        let settings = LibrarySettings {
            tag_titles: true,
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title(), "untagged");
    }

    #[test]
    fn hidden_directories_are_pruned_but_a_hidden_root_is_still_walked() {
        let dir = tempdir().unwrap();
        let root = dir.path().join(".music");
        let visible = touch(root.join("song.mp3"));
        touch(root.join(".secret.mp3"));
        touch(root.join(".cache").join("inside.mp3"));

        let settings = LibrarySettings {
            include_hidden: false,
            ..LibrarySettings::default()
        };
        let tracks = scan(&root, &settings);
        assert_eq!(paths(&tracks), vec![visible.as_path()]);

        assert_eq!(scan(&root, &LibrarySettings::default()).len(), 3);
    }

    #[test]
    fn recursion_off_beats_max_depth() {
        let dir = tempdir().unwrap();
        let root = touch(dir.path().join("root.mp3"));
        touch(dir.path().join("d1").join("one.mp3"));
        touch(dir.path().join("d1").join("d2").join("two.mp3"));

        let flat = LibrarySettings {
            recursive: false,
            max_depth: Some(5),
            ..LibrarySettings::default()
        };
        assert_eq!(paths(&scan(dir.path(), &flat)), vec![root.as_path()]);

        let capped = LibrarySettings {
            max_depth: Some(2),
            ..LibrarySettings::default()
        };
        let titles: Vec<String> = scan(dir.path(), &capped)
            .iter()
            .map(|t| t.title().to_string())
            .collect();
        assert_eq!(titles, vec!["one".to_string(), "root".to_string()]);
    }
}
