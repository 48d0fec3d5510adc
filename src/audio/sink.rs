//! Utilities for creating `rodio` sinks from files on disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use super::types::BackendError;

/// Open and decode the file at `path`.
pub(super) fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, BackendError> {
    let file = File::open(path).map_err(|source| BackendError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| BackendError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a paused `Sink` on `stream` holding the decoded file at `path`.
pub(super) fn create_sink(stream: &OutputStream, path: &Path) -> Result<Sink, BackendError> {
    let source = open_source(path)?;
    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
