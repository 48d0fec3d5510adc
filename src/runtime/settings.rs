use std::path::Path;

use anyhow::{Context, anyhow};
use tracing::warn;

use crate::config;

/// Load settings for this run.
///
/// A config file named on the command line must load and validate. The default
/// location is optional: failures there fall back to defaults with a warning.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<config::Settings> {
    if let Some(path) = explicit {
        let s = config::Settings::load_from(Some(path), true)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        s.validate()
            .map_err(|msg| anyhow!("invalid config {}: {msg}", path.display()))?;
        return Ok(s);
    }

    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                Ok(config::Settings::default())
            } else {
                Ok(s)
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            warn!("failed to load config, using defaults: {e}");
            Ok(config::Settings::default())
        }
    }
}
