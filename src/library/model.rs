use std::fmt;
use std::path::{Path, PathBuf};

/// Position of a track in the player's master list.
///
/// Tracks are never removed, so an id stays valid for the lifetime of the
/// player that issued it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub(crate) usize);

impl TrackId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single playable item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    title: String,
    path: PathBuf,
}

impl Track {
    pub fn new(title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// A named playlist referencing tracks of the master list.
///
/// Order is insertion order. The same track may be added more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    name: String,
    tracks: Vec<TrackId>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[TrackId] {
        &self.tracks
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, id: TrackId) -> bool {
        self.tracks.contains(&id)
    }

    /// Append `id` to the end of the collection.
    pub fn add_track(&mut self, id: TrackId) {
        self.tracks.push(id);
    }

    /// Remove the first occurrence of `id`. Returns `false` when it was not present.
    #[allow(dead_code)]
    pub fn remove_track(&mut self, id: TrackId) -> bool {
        match self.tracks.iter().position(|&t| t == id) {
            Some(pos) => {
                self.tracks.remove(pos);
                true
            }
            None => false,
        }
    }
}
