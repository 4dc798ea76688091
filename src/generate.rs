//! HTML page generation.
//!
//! Loads the content root, runs one [`GalleryEngine`] per section and renders
//! the showcase page with [maud](https://maud.lambda.xyz/).
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── index.html        # Header, call-to-action, one gallery per section
//! ```
//!
//! The page is self-contained: CSS and the runtime script are inlined.
//!
//! ## Galleries
//!
//! Each section renders both presentations and CSS picks one by viewport width:
//!
//! - `.gallery-desktop`: the fanned stack. Every `.video-container` carries the
//!   transforms the layout engine computed for each hover role
//!   (`data-transform-rest`, `-active`, `-yield`) and starts in its
//!   pre-entrance style.
//! - `.gallery-marquee`: the repeated band.
//!
//! ## Runtime
//!
//! `static/gallery.js` does no layout math. It reveals elements once when they
//! cross their `data-enter-margin` threshold, swaps the precomputed transforms
//! on pointer enter/leave, and mirrors the [`MediaTile`] transitions on
//! embed and thumbnail load/error events. The errored markup comes from a
//! `<template>` rendered here from the errored tile view.

use crate::animation::{self, Animations};
use crate::config::{self, SiteConfig};
use crate::content::{self, Section, Showcase};
use crate::layout::{DesktopTile, GalleryEngine, GalleryView, MarqueeView};
use crate::tile::{MediaTile, TileEvent, TileLoadState, TileView};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/gallery.js");

const EMPTY_GALLERY_TEXT: &str = "No videos available";

/// What was rendered for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub title: String,
    /// Ids of the rendered tiles, in order.
    pub tiles: Vec<String>,
    /// Items dropped for a missing id.
    pub skipped: usize,
    pub marquee_tiles: usize,
}

#[derive(Debug)]
pub struct GenerateReport {
    pub page: PathBuf,
    pub sections: Vec<SectionReport>,
}

/// Load content and config from `source_dir` and write `index.html` to `output_dir`.
pub fn generate(source_dir: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source_dir)?;
    let showcase = content::load_showcase(source_dir)?;
    let animations = animation::init();

    let (page, sections) = render_showcase(&showcase, &config, animations);

    fs::create_dir_all(output_dir)?;
    let page_path = output_dir.join("index.html");
    fs::write(&page_path, page.into_string())?;
    tracing::debug!(path = %page_path.display(), "wrote page");

    Ok(GenerateReport {
        page: page_path,
        sections,
    })
}

/// Load and lay out every section without writing anything.
pub fn check(source_dir: &Path) -> Result<Vec<SectionReport>, GenerateError> {
    let config = config::load_config(source_dir)?;
    let showcase = content::load_showcase(source_dir)?;
    let animations = animation::init();

    Ok(showcase
        .sections
        .iter()
        .map(|section| {
            let engine = GalleryEngine::new(&section.items, &config.layout, animations);
            section_report(section, &engine, &config)
        })
        .collect())
}

fn section_report(section: &Section, engine: &GalleryEngine, config: &SiteConfig) -> SectionReport {
    SectionReport {
        title: section.title.clone(),
        tiles: engine.slots().iter().map(|s| s.id.clone()).collect(),
        skipped: engine.skipped(),
        marquee_tiles: engine.marquee(&config.marquee).tile_count(),
    }
}

/// Full stylesheet: config-derived custom properties, then the static sheet.
pub fn build_css(config: &SiteConfig, animations: &Animations) -> String {
    [
        config::generate_color_css(&config.colors),
        config::generate_layout_css(&config.layout, &config.marquee),
        animations.hover_css(),
        CSS_STATIC.to_string(),
    ]
    .join("\n\n")
}

/// Render the whole page and report what each section produced.
pub fn render_showcase(
    showcase: &Showcase,
    config: &SiteConfig,
    animations: &Animations,
) -> (Markup, Vec<SectionReport>) {
    let css = build_css(config, animations);
    let mut reports = Vec::with_capacity(showcase.sections.len());
    let mut sections = Vec::with_capacity(showcase.sections.len());

    for (index, section) in showcase.sections.iter().enumerate() {
        let engine = GalleryEngine::new(&section.items, &config.layout, animations);
        reports.push(section_report(section, &engine, config));
        sections.push(render_section(index, section, &engine, config, animations));
    }

    let content = html! {
        div.cinematic-overlay {}
        main.projects-page {
            (page_header(showcase))
            @for section in &sections {
                (section)
            }
        }
        script { (PreEscaped(JS)) }
    };

    (base_document(&showcase.title, &css, content), reports)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Headline and call-to-action above the galleries
fn page_header(showcase: &Showcase) -> Markup {
    html! {
        header.page-header {
            div.floating-panel {
                @if let Some(headline) = &showcase.headline {
                    h1.headline { (headline) }
                }
                @if let Some(cta) = &showcase.cta {
                    div.cta-row {
                        a.btn-pill href=(cta.href) {
                            span { (cta.text) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders one titled gallery section
fn render_section(
    index: usize,
    section: &Section,
    engine: &GalleryEngine,
    config: &SiteConfig,
    animations: &Animations,
) -> Markup {
    html! {
        section.showcase-section {
            header.section-header {
                h2.section-title
                    style=(animations.title_initial_style(index))
                    data-enter-margin=(animations.title_entrance.trigger.root_margin())
                    data-transform-rest="translateY(0px)" {
                    (section.title)
                }
            }
            (render_gallery(engine, config, animations))
            @if let Some(archive) = &section.archive {
                div.archive-row {
                    a.archive-button href=(archive.href) { (archive.text) }
                }
            }
        }
    }
}

/// Renders both gallery presentations, or the placeholder when nothing is visible
pub fn render_gallery(
    engine: &GalleryEngine,
    config: &SiteConfig,
    animations: &Animations,
) -> Markup {
    match engine.desktop() {
        GalleryView::Empty => render_placeholder(),
        GalleryView::Desktop(tiles) => {
            let margin = animations.tile_entrance.trigger.root_margin();
            html! {
                div.gallery {
                    (render_desktop(&tiles, &margin))
                    (render_marquee(engine, &engine.marquee(&config.marquee)))
                }
            }
        }
    }
}

fn render_placeholder() -> Markup {
    html! {
        div.gallery-empty {
            p { (EMPTY_GALLERY_TEXT) }
        }
    }
}

/// Fanned stack. Containers start in their pre-entrance style.
fn render_desktop(tiles: &[DesktopTile], enter_margin: &str) -> Markup {
    html! {
        div.gallery-desktop {
            div.fan-stack data-hover-group {
                @for tile in tiles {
                    div.video-container
                        data-position=(tile.slot.position)
                        data-enter-margin=(enter_margin)
                        data-transform-rest=(tile.states.rest.to_css())
                        data-transform-active=(tile.states.active.to_css())
                        data-transform-yield=(tile.states.yielding.to_css())
                        style=(tile.states.enter.style()) {
                        (render_tile(
                            &MediaTile::new(&tile.slot.id, tile.display_index),
                            tile.hovered,
                        ))
                    }
                }
            }
        }
    }
}

/// Looping band; copies after the first are hidden from assistive tech.
fn render_marquee(engine: &GalleryEngine, view: &MarqueeView) -> Markup {
    let blocks = match view {
        MarqueeView::Empty => return html! {},
        MarqueeView::Band(blocks) => blocks,
    };
    html! {
        div.gallery-marquee {
            div.marquee {
                @for block in blocks {
                    div.marquee-track
                        data-repeat=(block.repeat_index)
                        aria-hidden=[(block.repeat_index > 0).then_some("true")] {
                        @for slot in &block.slots {
                            div.marquee-item {
                                (render_tile(
                                    &MediaTile::new(&slot.id, engine.display_index(slot)),
                                    false,
                                ))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders a tile in its current state. A loading tile also carries the
/// markup of its errored state for the runtime to swap in.
pub fn render_tile(tile: &MediaTile, hovered: bool) -> Markup {
    let view = tile.view();
    let errored = (view.state == TileLoadState::Loading).then(|| {
        let mut failed = tile.clone();
        failed.apply(TileEvent::EmbedFailed);
        failed.view()
    });

    html! {
        div.tile data-id=(tile.id()) data-state=(view.state.as_str()) data-hovered[hovered] {
            div.tile-inner {
                (render_tile_body(&view))
            }
            @if let Some(errored) = &errored {
                template.tile-errored {
                    (render_tile_body(errored))
                }
            }
        }
    }
}

fn render_tile_body(view: &TileView) -> Markup {
    html! {
        @if view.show_spinner {
            div.tile-spinner {
                div.loading-spinner {}
            }
        }
        @if let Some(thumb) = &view.thumbnail {
            div.tile-fallback {
                img.tile-thumbnail
                    src=(thumb.src)
                    data-fallback=(thumb.fallback_src)
                    data-loaded[thumb.loaded]
                    alt=(thumb.alt);
                div.tile-fallback-overlay {
                    div.play-badge {
                        div.play-icon {}
                    }
                    p { "Watch on YouTube" }
                }
            }
        }
        @if let Some(embed) = &view.embed {
            iframe.tile-embed
                src=(embed.src)
                title=(embed.title)
                data-visible[embed.visible]
                frameborder="0"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                allowfullscreen
                loading="lazy" {}
        }
        @if let Some(link) = &view.click_through {
            a.tile-watch href=(link.href) target="_blank" rel="noopener" aria-label=(link.label) {}
        }
        div.tile-shade {}
    }
}

// ============================================================================
// Tests
// ============================================================================
