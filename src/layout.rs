//! Gallery layout engine.
//!
//! Turns an ordered list of [`MediaItem`]s plus the current hover index into
//! per-tile render instructions for the two responsive presentations.
//!
//! ## Desktop fanned stack
//!
//! With `n` tiles and `mid = n / 2`, the tile at index `i` rests at
//!
//! ```text
//! base_offset(i) = max_height - |i - mid| * step        (120 - |i - mid| * 20)
//! offset(i)      = -base_offset(i)                      nothing hovered
//!                = -hover_lift                          i is hovered
//!                = 0                                    another tile is hovered
//! z_priority(i)  = n - i
//! ```
//!
//! Tiles far from the middle get a negative `base_offset` and sink below the
//! baseline. Every tile shares the same perspective and Y rotation.
//! Transition delay is `i * stagger_ms`, so the entrance cascades left to
//! right.
//!
//! ## Mobile marquee
//!
//! The visible list is repeated `repeat` times in one horizontal band. No
//! per-tile math applies.
//!
//! ## Hover ownership
//!
//! A [`GalleryEngine`] is the only owner of the hover index. Tiles receive it
//! read-only through [`TileProps`] and ask for changes with a
//! [`HoverRequest`]. Each request fully replaces the hover state and every
//! transform is recomputed from scratch, so out-of-order enter/leave pairs
//! settle on the last request.

use crate::animation::{Animations, Easing};
use crate::config::{IndexMode, LayoutConfig, MarqueeConfig};
use crate::types::MediaItem;
use serde::Serialize;

/// A renderable item with its place in the source and filtered lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub id: String,
    /// Index in the unfiltered source list.
    pub source_index: usize,
    /// Index among renderable items.
    pub position: usize,
}

/// Drop items without an id, logging each one, and number the rest.
pub fn filter_items(items: &[MediaItem]) -> Vec<Slot> {
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| {
            if item.is_valid() {
                true
            } else {
                tracing::warn!(index, ?item, "media item is missing an id, skipping");
                false
            }
        })
        .enumerate()
        .map(|(position, (source_index, item))| Slot {
            id: item.id.clone(),
            source_index,
            position,
        })
        .collect()
}

/// Resting lift of the tile at `index` before negation.
pub fn base_offset(index: usize, count: usize, config: &LayoutConfig) -> i32 {
    let mid = count / 2;
    let distance = i32::try_from(index.abs_diff(mid)).unwrap_or(i32::MAX);
    config
        .max_height
        .saturating_sub(distance.saturating_mul(config.step))
}

/// Stacking priority; earlier tiles stack above later ones.
pub fn z_priority(index: usize, count: usize) -> i32 {
    i32::try_from(count.saturating_sub(index)).unwrap_or(i32::MAX)
}

/// How a tile relates to the current hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HoverRole {
    /// Nothing is hovered.
    Idle,
    /// This tile is hovered.
    Active,
    /// Another tile is hovered.
    Yielding,
}

impl HoverRole {
    pub fn of(index: usize, hovered: Option<usize>) -> Self {
        match hovered {
            None => HoverRole::Idle,
            Some(h) if h == index => HoverRole::Active,
            Some(_) => HoverRole::Yielding,
        }
    }
}

/// Vertical offset (px, negative is up) of the tile at `index`.
pub fn y_offset(index: usize, count: usize, hovered: Option<usize>, config: &LayoutConfig) -> i32 {
    offset_for_role(index, count, HoverRole::of(index, hovered), config)
}

fn offset_for_role(index: usize, count: usize, role: HoverRole, config: &LayoutConfig) -> i32 {
    match role {
        HoverRole::Active => config.hover_lift.saturating_neg(),
        HoverRole::Yielding => 0,
        HoverRole::Idle => base_offset(index, count, config).saturating_neg(),
    }
}

/// Everything [`compute_transform`] depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformInput {
    pub index: usize,
    pub count: usize,
    pub hovered: Option<usize>,
}

/// Transition timing attached to a desktop tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub transform_ms: u32,
    pub transform_easing: Easing,
    pub opacity_ms: u32,
    pub opacity_easing: Easing,
    pub delay_ms: u32,
}

impl Transition {
    pub fn to_css(&self) -> String {
        format!(
            "transform {}ms {}, opacity {}ms {}",
            self.transform_ms,
            self.transform_easing.to_css(),
            self.opacity_ms,
            self.opacity_easing.to_css(),
        )
    }
}

/// Target visual state of one desktop tile. The browser interpolates
/// between successive values through CSS transitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transform {
    pub perspective_px: u32,
    pub rotate_y_deg: i32,
    pub translate_y_px: i32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub transition: Transition,
}

impl Transform {
    /// The CSS `transform` value.
    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateY({}deg) translateY({}px) scale({})",
            self.perspective_px, self.rotate_y_deg, self.translate_y_px, self.scale
        )
    }

    /// Full inline style for the tile container.
    pub fn style(&self) -> String {
        format!(
            "z-index: {}; transform: {}; opacity: {}; transition: {}; transition-delay: {}ms;",
            self.z_index,
            self.to_css(),
            self.opacity,
            self.transition.to_css(),
            self.transition.delay_ms,
        )
    }
}

/// Compute the resting transform of one desktop tile.
pub fn compute_transform(input: &TransformInput, config: &LayoutConfig) -> Transform {
    transform_for_role(
        input.index,
        input.count,
        HoverRole::of(input.index, input.hovered),
        config,
    )
}

fn transform_for_role(
    index: usize,
    count: usize,
    role: HoverRole,
    config: &LayoutConfig,
) -> Transform {
    Transform {
        perspective_px: config.perspective_px,
        rotate_y_deg: config.rotate_y_deg,
        translate_y_px: offset_for_role(index, count, role, config),
        scale: 1.0,
        opacity: 1.0,
        z_index: z_priority(index, count),
        transition: Transition {
            transform_ms: config.transform_ms,
            transform_easing: Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
            opacity_ms: config.opacity_ms,
            opacity_easing: Easing::Ease,
            delay_ms: stagger_delay(index, config.stagger_ms),
        },
    }
}

/// Transition delay of the tile at `index`, clamped at `u32::MAX` ms.
pub fn stagger_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

/// A change of hover requested by a tile, addressed by visible position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverRequest {
    Enter(usize),
    Leave(usize),
}

/// Read-only props handed to one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProps<'a> {
    pub id: &'a str,
    pub position: usize,
    pub hovered: bool,
    /// Zero-based label index (`Project Video {display_index + 1}`).
    pub display_index: usize,
}

/// Precomputed transforms for every state a desktop tile can be in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformSet {
    /// Before the entrance trigger fires.
    pub enter: Transform,
    pub rest: Transform,
    pub active: Transform,
    pub yielding: Transform,
}

/// One desktop tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesktopTile {
    pub slot: Slot,
    /// Index used for offsets and labels; see [`IndexMode`].
    pub display_index: usize,
    pub hovered: bool,
    /// Target under the current hover state.
    pub current: Transform,
    pub states: TransformSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GalleryView {
    /// Nothing to show; render the "no items" placeholder.
    Empty,
    Desktop(Vec<DesktopTile>),
}

impl GalleryView {
    pub fn tiles(&self) -> &[DesktopTile] {
        match self {
            GalleryView::Empty => &[],
            GalleryView::Desktop(tiles) => tiles,
        }
    }
}

/// One copy of the list inside the marquee band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarqueeBlock {
    pub repeat_index: usize,
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MarqueeView {
    Empty,
    Band(Vec<MarqueeBlock>),
}

impl MarqueeView {
    pub fn tile_count(&self) -> usize {
        match self {
            MarqueeView::Empty => 0,
            MarqueeView::Band(blocks) => blocks.iter().map(|b| b.slots.len()).sum(),
        }
    }
}

/// Layout state for one gallery.
#[derive(Debug)]
pub struct GalleryEngine<'a> {
    slots: Vec<Slot>,
    source_len: usize,
    hovered: Option<usize>,
    config: &'a LayoutConfig,
    animations: &'a Animations,
}

impl<'a> GalleryEngine<'a> {
    pub fn new(items: &[MediaItem], config: &'a LayoutConfig, animations: &'a Animations) -> Self {
        Self {
            slots: filter_items(items),
            source_len: items.len(),
            hovered: None,
            config,
            animations,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of source items dropped for a missing id.
    pub fn skipped(&self) -> usize {
        self.source_len - self.slots.len()
    }

    /// Visible position of the hovered tile.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Apply a hover request. Returns whether the hover state changed.
    ///
    /// Entering a position outside the visible range is ignored. Leaving
    /// always clears hover.
    pub fn handle(&mut self, request: HoverRequest) -> bool {
        let next = match request {
            HoverRequest::Enter(position) if position < self.slots.len() => Some(position),
            HoverRequest::Enter(position) => {
                tracing::debug!(position, "hover outside gallery ignored");
                return false;
            }
            HoverRequest::Leave(_) => None,
        };
        let changed = next != self.hovered;
        if changed {
            tracing::debug!(from = ?self.hovered, to = ?next, "hover changed");
        }
        self.hovered = next;
        changed
    }

    pub fn tile_props(&self, position: usize) -> Option<TileProps<'_>> {
        let slot = self.slots.get(position)?;
        Some(TileProps {
            id: &slot.id,
            position,
            hovered: self.hovered == Some(position),
            display_index: self.display_index(slot),
        })
    }

    /// Index fed into the offset math and tile labels for this slot.
    pub fn display_index(&self, slot: &Slot) -> usize {
        match self.config.index_mode {
            IndexMode::Compacted => slot.position,
            IndexMode::Original => slot.source_index,
        }
    }

    fn layout_count(&self) -> usize {
        match self.config.index_mode {
            IndexMode::Compacted => self.slots.len(),
            IndexMode::Original => self.source_len,
        }
    }

    /// Desktop render instructions under the current hover state.
    pub fn desktop(&self) -> GalleryView {
        if self.slots.is_empty() {
            return GalleryView::Empty;
        }
        let count = self.layout_count();
        let hovered = self
            .hovered
            .and_then(|p| self.slots.get(p))
            .map(|slot| self.display_index(slot));

        let tiles = self
            .slots
            .iter()
            .map(|slot| {
                let index = self.display_index(slot);
                let rest = transform_for_role(index, count, HoverRole::Idle, self.config);
                let states = TransformSet {
                    enter: self.animations.tile_entrance.initial(&rest),
                    active: transform_for_role(index, count, HoverRole::Active, self.config),
                    yielding: transform_for_role(index, count, HoverRole::Yielding, self.config),
                    rest,
                };
                let current = compute_transform(
                    &TransformInput {
                        index,
                        count,
                        hovered,
                    },
                    self.config,
                );
                DesktopTile {
                    slot: slot.clone(),
                    display_index: index,
                    hovered: self.hovered == Some(slot.position),
                    current,
                    states,
                }
            })
            .collect();
        GalleryView::Desktop(tiles)
    }

    /// Mobile marquee band.
    pub fn marquee(&self, config: &MarqueeConfig) -> MarqueeView {
        if self.slots.is_empty() {
            return MarqueeView::Empty;
        }
        let blocks = (0..config.repeat)
            .map(|repeat_index| MarqueeBlock {
                repeat_index,
                slots: self.slots.clone(),
            })
            .collect();
        MarqueeView::Band(blocks)
    }
}
