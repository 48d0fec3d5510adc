use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::Player;
use crate::audio::AudioBackend;
use crate::config::LibrarySettings;
use crate::library::{scan, track_from_path};

/// Add the files and directories given on the command line.
///
/// Directories are scanned for audio files; plain paths are added as-is.
/// Returns how many tracks were added.
pub fn preload<B: AudioBackend>(
    player: &mut Player<B>,
    paths: &[PathBuf],
    settings: &LibrarySettings,
) -> usize {
    let mut added = 0;
    for path in paths {
        let tracks = if path.is_dir() {
            scan(path, settings)
        } else {
            vec![track_from_path(path, settings)]
        };

        for track in tracks {
            match player.push_track(track) {
                Ok(_) => added += 1,
                Err(e) => warn!("skipping startup path: {e}"),
            }
        }
    }
    if !paths.is_empty() {
        info!(added, "preloaded tracks");
    }
    added
}
