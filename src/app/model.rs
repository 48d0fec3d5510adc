//! Application model types: `Player` and `PlaybackState`.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::audio::AudioBackend;
use crate::library::{Collection, Track, TrackId};

use super::error::PlayerError;

/// The playback state of the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing has been loaded yet.
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Owns the master track list, the collections and the audio backend.
///
/// Tracks are only ever appended, so `current_index` stays in bounds once the
/// list is non-empty.
pub struct Player<B: AudioBackend> {
    backend: B,
    tracks: Vec<Track>,
    collections: Vec<Collection>,
    current_index: usize,
    state: PlaybackState,
}

impl<B: AudioBackend> Player<B> {
    /// Create an empty player driving `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            tracks: Vec::new(),
            collections: Vec::new(),
            current_index: 0,
            state: PlaybackState::Stopped,
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.index())
    }

    #[cfg(test)]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Collections in creation order.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name() == name)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current_index)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// First track whose title matches `title` exactly.
    pub fn find_track(&self, title: &str) -> Option<TrackId> {
        self.tracks
            .iter()
            .position(|t| t.title() == title)
            .map(TrackId)
    }

    /// Add a track titled `title` for the file at `path`.
    ///
    /// The path must exist; otherwise nothing changes.
    pub fn add_track(
        &mut self,
        title: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<TrackId, PlayerError> {
        self.push_track(Track::new(title, path))
    }

    /// Append an already built track, with the same existence check as `add_track`.
    pub fn push_track(&mut self, track: Track) -> Result<TrackId, PlayerError> {
        if !track.path().exists() {
            warn!(path = %track.path().display(), "file not found");
            return Err(PlayerError::FileNotFound(track.path().to_path_buf()));
        }
        let id = TrackId(self.tracks.len());
        info!(title = track.title(), path = %track.path().display(), "track added");
        self.tracks.push(track);
        Ok(id)
    }

    /// Create an empty collection called `name`.
    pub fn create_collection(&mut self, name: &str) -> Result<&Collection, PlayerError> {
        if self.collection(name).is_some() {
            return Err(PlayerError::CollectionExists(name.to_string()));
        }
        self.collections.push(Collection::new(name));
        info!(name, "collection created");
        Ok(&self.collections[self.collections.len() - 1])
    }

    fn resolve(
        &mut self,
        track_title: &str,
        collection_name: &str,
    ) -> Result<(TrackId, &mut Collection), PlayerError> {
        let pos = self
            .collections
            .iter()
            .position(|c| c.name() == collection_name)
            .ok_or_else(|| PlayerError::CollectionNotFound(collection_name.to_string()))?;
        let id = self
            .find_track(track_title)
            .ok_or_else(|| PlayerError::TrackNotFound(track_title.to_string()))?;
        Ok((id, &mut self.collections[pos]))
    }

    /// Add the first track titled `track_title` to the collection `collection_name`.
    pub fn add_to_collection(
        &mut self,
        track_title: &str,
        collection_name: &str,
    ) -> Result<TrackId, PlayerError> {
        let (id, collection) = self.resolve(track_title, collection_name)?;
        collection.add_track(id);
        debug!(track = track_title, collection = collection_name, "added to collection");
        Ok(id)
    }

    /// Load the current track and start it from the beginning.
    ///
    /// A load failure leaves the playback state as it was.
    pub fn play(&mut self) -> Result<&Track, PlayerError> {
        self.play_at(self.current_index)
    }

    /// Load and start the track at `index`. The index only becomes current
    /// once the backend has accepted the file.
    fn play_at(&mut self, index: usize) -> Result<&Track, PlayerError> {
        let Some(track) = self.tracks.get(index) else {
            return Err(PlayerError::NoTracks);
        };
        if let Err(e) = self.backend.load(track.path()) {
            warn!(index, title = track.title(), "load failed: {e}");
            return Err(e.into());
        }
        self.backend.play();
        self.current_index = index;
        self.state = PlaybackState::Playing;
        info!(index, title = track.title(), "playing");
        Ok(track)
    }

    /// Pause while playing, resume while paused.
    ///
    /// Before anything has been played there is nothing to pause or resume,
    /// so the backend is left alone.
    pub fn pause(&mut self) -> Result<PlaybackState, PlayerError> {
        self.state = match self.state {
            PlaybackState::Playing => {
                self.backend.pause();
                PlaybackState::Paused
            }
            PlaybackState::Paused => {
                self.backend.resume();
                PlaybackState::Playing
            }
            PlaybackState::Stopped => return Err(PlayerError::NothingPlaying),
        };
        debug!(state = ?self.state, "pause toggled");
        Ok(self.state)
    }

    /// Start playback when stopped, otherwise pause or resume.
    pub fn toggle_playback(&mut self) -> Result<PlaybackState, PlayerError> {
        match self.state {
            PlaybackState::Stopped => self.play().map(|_| PlaybackState::Playing),
            PlaybackState::Playing | PlaybackState::Paused => self.pause(),
        }
    }

    /// Move to the next track, wrapping to the first, and play it.
    pub fn next_track(&mut self) -> Result<&Track, PlayerError> {
        if self.tracks.is_empty() {
            return Err(PlayerError::NoTracks);
        }
        self.play_at((self.current_index + 1) % self.tracks.len())
    }

    /// Move to the previous track, wrapping to the last, and play it.
    pub fn previous_track(&mut self) -> Result<&Track, PlayerError> {
        if self.tracks.is_empty() {
            return Err(PlayerError::NoTracks);
        }
        let len = self.tracks.len();
        self.play_at((self.current_index + len - 1) % len)
    }

    /// Stop playback and release the audio backend.
    pub fn shutdown(&mut self) {
        self.state = PlaybackState::Stopped;
        self.backend.shutdown();
    }
}
