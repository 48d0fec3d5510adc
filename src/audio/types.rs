//! Backend trait and error type shared by the audio subsystem.

use std::path::{Path, PathBuf};

/// The narrow surface the player needs from an audio output.
///
/// A backend is initialized by its constructor and released by `shutdown`
/// (implementations also release on drop). Playback calls are fire-and-forget.
pub trait AudioBackend {
    /// Replace whatever is loaded with the file at `path`, paused at its start.
    fn load(&mut self, path: &Path) -> Result<(), BackendError>;
    /// Start playing the loaded file.
    fn play(&mut self);
    /// Pause the loaded file.
    fn pause(&mut self);
    /// Continue a paused file.
    fn resume(&mut self);
    /// Stop playback and release the output device.
    fn shutdown(&mut self);
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("no audio output device: {0}")]
    Device(#[from] rodio::StreamError),
    #[error("audio output was already shut down")]
    Closed,
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },
}
