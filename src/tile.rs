//! Media tile: one video embed and its load lifecycle.
//!
//! ```text
//!            EmbedLoaded
//! Loading ─────────────────▶ Loaded
//!    │
//!    │ EmbedFailed
//!    ▼
//! Errored ── ThumbnailFailed (first) ──▶ fallback thumbnail
//! ```
//!
//! Loading shows a spinner over a transparent embed. Loaded fades the embed
//! in. Errored drops the embed for the primary thumbnail and a full-surface
//! link to the watch page. If the primary thumbnail fails, the tile switches
//! to the fallback exactly once and then stays there, broken or not. Nothing
//! is retried and no error leaves the tile.

use serde::Serialize;

const EMBED_BASE: &str = "https://www.youtube.com/embed";
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";
const WATCH_BASE: &str = "https://www.youtube.com/watch";

pub fn embed_url(id: &str) -> String {
    format!("{EMBED_BASE}/{id}?controls=1&modestbranding=1&rel=0&showinfo=0")
}

pub fn primary_thumbnail(id: &str) -> String {
    format!("{THUMBNAIL_BASE}/{id}/maxresdefault.jpg")
}

pub fn fallback_thumbnail(id: &str) -> String {
    format!("{THUMBNAIL_BASE}/{id}/hqdefault.jpg")
}

/// Canonical watch page, opened by the click-through on an errored tile.
pub fn watch_url(id: &str) -> String {
    format!("{WATCH_BASE}?v={id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileLoadState {
    Loading,
    Loaded,
    Errored,
}

impl TileLoadState {
    pub fn as_str(self) -> &'static str {
        match self {
            TileLoadState::Loading => "loading",
            TileLoadState::Loaded => "loaded",
            TileLoadState::Errored => "errored",
        }
    }
}

/// Load/error signals reported by the browsing runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    EmbedLoaded,
    EmbedFailed,
    ThumbnailLoaded,
    ThumbnailFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThumbnailSource {
    Primary,
    Fallback,
}

/// State of one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTile {
    id: String,
    display_index: usize,
    state: TileLoadState,
    thumbnail: ThumbnailSource,
    thumbnail_loaded: bool,
}

impl MediaTile {
    pub fn new(id: impl Into<String>, display_index: usize) -> Self {
        Self {
            id: id.into(),
            display_index,
            state: TileLoadState::Loading,
            thumbnail: ThumbnailSource::Primary,
            thumbnail_loaded: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> TileLoadState {
        self.state
    }

    pub fn thumbnail_loaded(&self) -> bool {
        self.thumbnail_loaded
    }

    /// Apply an event. Returns `false` when the event does not apply in the
    /// current state and was ignored.
    pub fn apply(&mut self, event: TileEvent) -> bool {
        match (self.state, event) {
            (TileLoadState::Loading, TileEvent::EmbedLoaded) => {
                self.state = TileLoadState::Loaded;
                true
            }
            (TileLoadState::Loading, TileEvent::EmbedFailed) => {
                tracing::debug!(id = %self.id, "embed failed, showing thumbnail");
                self.state = TileLoadState::Errored;
                true
            }
            (TileLoadState::Errored, TileEvent::ThumbnailLoaded) => {
                self.thumbnail_loaded = true;
                true
            }
            (TileLoadState::Errored, TileEvent::ThumbnailFailed)
                if self.thumbnail == ThumbnailSource::Primary =>
            {
                self.thumbnail = ThumbnailSource::Fallback;
                self.thumbnail_loaded = false;
                true
            }
            _ => false,
        }
    }

    /// Source of the thumbnail currently shown, if any.
    pub fn thumbnail_src(&self) -> Option<String> {
        if self.state != TileLoadState::Errored {
            return None;
        }
        Some(match self.thumbnail {
            ThumbnailSource::Primary => primary_thumbnail(&self.id),
            ThumbnailSource::Fallback => fallback_thumbnail(&self.id),
        })
    }

    /// What the tile shows in its current state.
    pub fn view(&self) -> TileView {
        let label = self.display_index + 1;
        let embed = match self.state {
            TileLoadState::Errored => None,
            state => Some(EmbedView {
                src: embed_url(&self.id),
                title: format!("Project Video {label}"),
                visible: state == TileLoadState::Loaded,
            }),
        };
        let thumbnail = self.thumbnail_src().map(|src| ThumbnailView {
            src,
            fallback_src: fallback_thumbnail(&self.id),
            alt: format!("Video {label} thumbnail"),
            loaded: self.thumbnail_loaded,
        });
        let click_through = (self.state == TileLoadState::Errored).then(|| ClickThrough {
            href: watch_url(&self.id),
            label: format!("Watch video {label} on YouTube"),
        });
        TileView {
            state: self.state,
            show_spinner: self.state == TileLoadState::Loading,
            embed,
            thumbnail,
            click_through,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedView {
    pub src: String,
    pub title: String,
    /// Fully opaque once loaded; transparent while loading.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailView {
    pub src: String,
    pub fallback_src: String,
    pub alt: String,
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickThrough {
    pub href: String,
    pub label: String,
}

/// Visible parts of a tile for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub state: TileLoadState,
    pub show_spinner: bool,
    pub embed: Option<EmbedView>,
    pub thumbnail: Option<ThumbnailView>,
    pub click_through: Option<ClickThrough>,
}
