//! Shared types used across loading, layout, and generation.
//!
//! These are deserialized from `projects.toml` and handed unchanged to the
//! layout engine and the page renderer.

use serde::{Deserialize, Serialize};

/// One video in a gallery.
///
/// The id is the platform video identifier (`QGsa5QB5gK4`). An item whose id
/// is missing or blank is kept in the loaded list but never rendered; the
/// layout engine drops it with a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(default, alias = "videoId")]
    pub id: String,
}

impl MediaItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Whether this item can be rendered (id present and not blank).
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// A labelled link used for the page call-to-action and section archive buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub text: String,
    pub href: String,
}
