use std::path::PathBuf;

use crate::audio::BackendError;

/// Why a player operation was skipped. None of these are fatal.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("collection '{0}' already exists")]
    CollectionExists(String),
    #[error("collection '{0}' not found")]
    CollectionNotFound(String),
    #[error("track '{0}' not found")]
    TrackNotFound(String),
    #[error("no tracks available")]
    NoTracks,
    #[error("nothing is playing")]
    NothingPlaying,
    #[error(transparent)]
    Backend(#[from] BackendError),
}
