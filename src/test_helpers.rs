//! Shared test utilities.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let showcase = load_showcase(tmp.path()).unwrap();
//! let drafts = find_section(&showcase, "Drafts");
//! assert_eq!(valid_ids(&drafts.items).len(), 3);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::{Section, Showcase};
use crate::types::MediaItem;

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// Build media items from ids; an empty string stands for a missing id.
pub fn items(ids: &[&str]) -> Vec<MediaItem> {
    ids.iter().map(|id| MediaItem::new(*id)).collect()
}

/// Find a section by exact title. Panics if not found.
pub fn find_section<'a>(showcase: &'a Showcase, title: &str) -> &'a Section {
    showcase
        .sections
        .iter()
        .find(|s| s.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = showcase.sections.iter().map(|s| s.title.as_str()).collect();
            panic!("section '{title}' not found. Available: {titles:?}")
        })
}

/// Ids of the items that will be rendered.
pub fn valid_ids(items: &[MediaItem]) -> Vec<&str> {
    items
        .iter()
        .filter(|i| i.is_valid())
        .map(|i| i.id.as_str())
        .collect()
}
