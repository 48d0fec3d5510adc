//! Track library: the track and collection value types, plus helpers that
//! turn filesystem paths into tracks.

mod model;
mod scan;
mod title;

pub use model::*;
pub use scan::{scan, track_from_path};
pub use title::title_from_path;
