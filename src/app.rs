//! Application module: the player model that owns the track list, the
//! collections and the audio backend.

mod error;
mod model;

pub use error::PlayerError;
pub use model::*;
