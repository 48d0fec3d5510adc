use std::path::Path;

use lofty::prelude::*;

/// Derive a display title for the file at `path`.
///
/// The file name without its extension is used unless `use_tags` is set and
/// the file carries a non-empty title tag.
pub fn title_from_path(path: &Path, use_tags: bool) -> String {
    if use_tags {
        if let Some(title) = tag_title(path) {
            return title;
        }
    }

    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("UNKNOWN")
        .to_string()
}

fn tag_title(path: &Path) -> Option<String> {
    let tagged = lofty::read_from_path(path).ok()?;
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag())?;
    let title = tag.title()?;
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
