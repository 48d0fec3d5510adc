//! Text rendering helpers for the console menu.
//!
//! Everything here returns lines; the event loop decides where they go.

use crate::app::{PlaybackState, Player};
use crate::audio::AudioBackend;
use crate::runtime::Command;

/// The numbered menu, one line per command.
pub fn menu_lines() -> Vec<String> {
    let mut lines = vec!["Choose an action:".to_string()];
    lines.extend(
        Command::ALL
            .iter()
            .map(|c| format!("{}. {}", c.number(), c.label())),
    );
    lines
}

/// The master list, 1-based. The current track is marked while it is loaded.
pub fn track_lines<B: AudioBackend>(player: &Player<B>) -> Vec<String> {
    if player.tracks().is_empty() {
        return vec!["No tracks available".to_string()];
    }

    let marker = match player.state() {
        PlaybackState::Stopped => None,
        PlaybackState::Playing => Some("playing"),
        PlaybackState::Paused => Some("paused"),
    };

    let mut lines = vec![String::new(), "Tracks:".to_string()];
    for (i, track) in player.tracks().iter().enumerate() {
        match marker {
            Some(m) if i == player.current_index() => {
                lines.push(format!("{}. {} ({m})", i + 1, track.title()))
            }
            _ => lines.push(format!("{}. {}", i + 1, track.title())),
        }
    }
    lines
}

/// Every collection in creation order followed by its track titles.
pub fn collection_lines<B: AudioBackend>(player: &Player<B>) -> Vec<String> {
    if player.collections().is_empty() {
        return vec!["No collections available".to_string()];
    }

    let mut lines = vec![String::new(), "Collections:".to_string()];
    for collection in player.collections() {
        lines.push(String::new());
        lines.push(format!("Collection '{}':", collection.name()));
        lines.extend(
            collection
                .tracks()
                .iter()
                .filter_map(|&id| player.track(id))
                .map(|t| format!("- {}", t.title())),
        );
    }
    lines
}
