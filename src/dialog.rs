//! File selection for menu entry 2.

use std::path::PathBuf;

use tracing::debug;

use crate::config::{DialogSettings, LibrarySettings};

/// Something that lets the user choose files interactively.
pub trait FilePicker {
    /// The chosen paths, empty when the user cancelled.
    fn pick_files(&self) -> Vec<PathBuf>;
}

/// The platform's native multi-select file dialog.
pub struct NativeDialog {
    title: String,
    /// Offered in order; the first one is selected when the dialog opens.
    filters: Vec<(String, Vec<String>)>,
}

const ALL_FILES: &str = "All files";

impl NativeDialog {
    pub fn from_settings(dialog: &DialogSettings, library: &LibrarySettings) -> Self {
        let audio: Vec<String> = library
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            title: dialog.title.clone(),
            filters: vec![
                (dialog.filter_name.clone(), audio),
                (ALL_FILES.to_string(), vec!["*".to_string()]),
            ],
        }
    }
}

impl FilePicker for NativeDialog {
    fn pick_files(&self) -> Vec<PathBuf> {
        let picked = self
            .filters
            .iter()
            .fold(rfd::FileDialog::new().set_title(&self.title), |d, (name, exts)| {
                d.add_filter(name, exts.as_slice())
            })
            .pick_files()
            .unwrap_or_default();
        debug!(count = picked.len(), "file dialog closed");
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_dialog_normalizes_extensions() {
        let library = LibrarySettings {
            extensions: vec![".mp3".into(), " wav ".into(), "".into()],
            ..LibrarySettings::default()
        };
        let d = NativeDialog::from_settings(&DialogSettings::default(), &library);
        assert_eq!(d.title, "Select music files");
        assert_eq!(d.filters[0].0, "Audio files");
        assert_eq!(d.filters[0].1, vec!["mp3".to_string(), "wav".to_string()]);
    }

    #[test]
    fn all_files_filter_comes_after_the_audio_filter() {
        let dialog = DialogSettings {
            filter_name: "Music".into(),
            ..DialogSettings::default()
        };
        let d = NativeDialog::from_settings(&dialog, &LibrarySettings::default());
        let names: Vec<&str> = d.filters.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Music", "All files"]);
        assert_eq!(d.filters[1].1, vec!["*".to_string()]);
    }
}
