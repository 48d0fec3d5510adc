//! Audio output.
//!
//! The player talks to sound hardware through the [`AudioBackend`] trait;
//! [`RodioBackend`] is the real implementation.

mod player;
mod sink;
mod types;

pub use player::RodioBackend;
pub use types::*;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests;
