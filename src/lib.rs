//! # Showreel
//!
//! A static site generator for video portfolio showcases. A content directory
//! describes one "Projects" page: a headline, a call-to-action, and titled
//! sections of video ids. Each section becomes a gallery of embedded videos.
//!
//! # Architecture
//!
//! ```text
//! content/projects.toml ─┐
//! content/config.toml  ──┼─▶ GalleryEngine per section ─▶ maud ─▶ dist/index.html
//! animation::init()    ──┘
//! ```
//!
//! Layout is computed ahead of time. For every tile the engine produces the
//! transform it takes in each hover role, and the page carries all of them.
//! The inline runtime script only swaps precomputed values and reacts to
//! load/error events, so the math stays in pure, unit-tested Rust.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Fanned-stack offsets, z-order, hover ownership, marquee repetition |
//! | [`tile`] | Video URLs and the Loading → Loaded/Errored tile lifecycle |
//! | [`animation`] | One-time preset registry, easing curves, one-shot entrance |
//! | [`generate`] | Page composition and HTML rendering with Maud |
//! | [`content`] | `projects.toml` loading |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared content types (`MediaItem`, `Link`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Two Presentations, One Document
//!
//! Both the desktop fanned stack and the mobile marquee are rendered for every
//! section and a media query picks one. There is no viewport detection at
//! build time and nothing to re-render on resize.
//!
//! ## Skip, Never Fail
//!
//! An item without an id is dropped with a `tracing` warning. Embed and
//! thumbnail failures degrade a tile to a clickable thumbnail. None of these
//! reach the caller as errors; only unreadable content or config does.
//!
//! ## Index Mode
//!
//! When items are skipped, offsets can be computed over the compacted list
//! (default, symmetric stack) or over original positions (`index_mode =
//! "original"`), which leaves visual gaps where items were dropped.

pub mod animation;
pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod output;
pub mod tile;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
