//! Showcase content loading.
//!
//! The content root holds `projects.toml` (the galleries) and an optional
//! `config.toml` (see [`config`](crate::config)):
//!
//! ```text
//! content/
//! ├── config.toml        # Layout, marquee and color overrides (optional)
//! └── projects.toml      # Page chrome and gallery sections
//! ```
//!
//! ## projects.toml
//!
//! ```toml
//! title = "Projects"
//! headline = "The designs that turn vision into a bold reality"
//!
//! [cta]
//! text = "Get In Touch Today"
//! href = "/contact"
//!
//! [[sections]]
//! title = "Teasers"
//! archive = { text = "View All Teasers", href = "/contact" }
//! items = [{ id = "QGsa5QB5gK4" }, { videoId = "5fR4MErzYeI" }]
//! ```
//!
//! Items are validated later by the layout engine: an item without an id is
//! loaded here and skipped with a warning there.

use crate::types::{Link, MediaItem};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PROJECTS_FILE: &str = "projects.toml";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in {0}: {1}")]
    Toml(PathBuf, toml::de::Error),
    #[error("No projects.toml found in {0}")]
    NotFound(PathBuf),
}

/// The whole showcase page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Showcase {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Large header text above the galleries.
    #[serde(default)]
    pub headline: Option<String>,
    /// Header call-to-action button.
    #[serde(default)]
    pub cta: Option<Link>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

fn default_title() -> String {
    "Projects".to_string()
}

/// One titled gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub title: String,
    /// Button under the gallery linking to the full archive.
    #[serde(default)]
    pub archive: Option<Link>,
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

impl Showcase {
    /// Find a section by title, ignoring ASCII case.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.title.eq_ignore_ascii_case(title))
    }
}

pub fn parse_showcase(path: &Path, content: &str) -> Result<Showcase, ContentError> {
    toml::from_str(content).map_err(|e| ContentError::Toml(path.to_path_buf(), e))
}

/// Load `projects.toml` from the content root.
pub fn load_showcase(root: &Path) -> Result<Showcase, ContentError> {
    let path = root.join(PROJECTS_FILE);
    if !path.exists() {
        return Err(ContentError::NotFound(root.to_path_buf()));
    }
    let content = fs::read_to_string(&path)?;
    let showcase = parse_showcase(&path, &content)?;
    tracing::debug!(
        path = %path.display(),
        sections = showcase.sections.len(),
        "loaded showcase"
    );
    Ok(showcase)
}
