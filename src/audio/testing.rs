//! A backend that records calls instead of producing sound.

use std::path::{Path, PathBuf};

use super::types::{AudioBackend, BackendError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Load(PathBuf),
    Play,
    Pause,
    Resume,
    Shutdown,
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<Call>,
    /// When set, every `load` fails as if the file could not be opened.
    pub fail_loads: bool,
    /// Paths whose `load` fails even when `fail_loads` is off.
    pub broken: Vec<PathBuf>,
}

impl AudioBackend for RecordingBackend {
    fn load(&mut self, path: &Path) -> Result<(), BackendError> {
        if self.fail_loads || self.broken.iter().any(|b| b == path) {
            return Err(BackendError::Open {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            });
        }
        self.calls.push(Call::Load(path.to_path_buf()));
        Ok(())
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn resume(&mut self) {
        self.calls.push(Call::Resume);
    }

    fn shutdown(&mut self) {
        self.calls.push(Call::Shutdown);
    }
}
