use std::path::Path;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info};

use crate::config::AudioSettings;

use super::sink::create_sink;
use super::types::{AudioBackend, BackendError};

/// Plays files on the default output device through `rodio`.
///
/// One sink is alive at a time; loading a new file stops the previous one.
pub struct RodioBackend {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    volume: f32,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open(settings: &AudioSettings) -> Result<Self, BackendError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped, which would land in the middle of the menu.
        stream.log_on_drop(false);
        info!(volume = settings.volume, "audio output opened");

        Ok(Self {
            stream: Some(stream),
            sink: None,
            volume: settings.volume,
        })
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<(), BackendError> {
        let stream = self.stream.as_ref().ok_or(BackendError::Closed)?;
        let sink = create_sink(stream, path)?;
        sink.set_volume(self.volume);

        if let Some(old) = self.sink.replace(sink) {
            old.stop();
        }
        debug!(path = %path.display(), "loaded");
        Ok(())
    }

    fn play(&mut self) {
        if let Some(ref s) = self.sink {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(ref s) = self.sink {
            s.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(ref s) = self.sink {
            s.play();
        }
    }

    fn shutdown(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        if self.stream.take().is_some() {
            info!("audio output released");
        }
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.shutdown();
    }
}
