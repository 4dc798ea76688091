//! Animation presets and one-shot entrance state.
//!
//! The presets are registered once per process by [`init`]. The composition
//! root calls it before building any [`GalleryEngine`](crate::layout::GalleryEngine);
//! the engine constructor takes the returned `&Animations`, so an engine can
//! only exist after registration. Further calls return the same registry.
//!
//! ## Entrance
//!
//! Tiles and section titles start hidden and offset downward, and settle into
//! their resting transform the first time their region crosses a visibility
//! threshold near the bottom of the viewport (`top 85%` for tiles, `top 90%`
//! for titles). [`Entrance`] models that one-way switch. If the trigger never
//! fires the element keeps its pre-entrance transform.

use crate::layout::Transform;
use serde::Serialize;
use std::sync::OnceLock;

/// Timing curve, rendered as a CSS `<easing-function>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Easing {
    Linear,
    Ease,
    /// Quadratic ease-out.
    Power2Out,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn to_css(self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::Ease => "ease".to_string(),
            Easing::Power2Out => "cubic-bezier(0.5, 1, 0.89, 1)".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Visibility threshold: fires when the element's top edge crosses
/// `viewport_fraction` of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollTrigger {
    pub viewport_fraction: f32,
}

impl ScrollTrigger {
    /// `IntersectionObserver` root margin equivalent to the threshold.
    ///
    /// `top 85%` shrinks the bottom of the observed root by 15%.
    pub fn root_margin(&self) -> String {
        let inset = ((1.0 - self.viewport_fraction) * 100.0).round() as i32;
        format!("0px 0px -{inset}% 0px")
    }
}

/// Starting point of an entrance, relative to the resting transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntrancePreset {
    pub from_opacity: f32,
    pub from_scale: f32,
    /// Extra downward offset (px) added to the resting offset.
    pub from_offset_px: i32,
    pub trigger: ScrollTrigger,
}

impl EntrancePreset {
    /// The pre-entrance transform for an element resting at `rest`.
    pub fn initial(&self, rest: &Transform) -> Transform {
        Transform {
            translate_y_px: rest.translate_y_px + self.from_offset_px,
            scale: self.from_scale,
            opacity: self.from_opacity,
            ..rest.clone()
        }
    }
}

/// Duration, curve and per-element stagger for a one-off transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timing {
    pub duration_ms: u32,
    pub easing: Easing,
    pub stagger_ms: u32,
}

/// Scale applied to a tile's inner content while hovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoverScale {
    pub scale: f32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl HoverScale {
    /// Inner-content transform for the given hover flag.
    pub fn transform(&self, hovered: bool) -> String {
        if hovered {
            format!("scale({})", self.scale)
        } else {
            "scale(1)".to_string()
        }
    }
}

/// Process-wide animation registry.
#[derive(Debug, Serialize)]
pub struct Animations {
    pub tile_entrance: EntrancePreset,
    pub title_entrance: EntrancePreset,
    pub title_timing: Timing,
    pub hover_scale: HoverScale,
}

impl Animations {
    fn stock() -> Self {
        Self {
            tile_entrance: EntrancePreset {
                from_opacity: 0.0,
                from_scale: 0.95,
                from_offset_px: 30,
                trigger: ScrollTrigger {
                    viewport_fraction: 0.85,
                },
            },
            title_entrance: EntrancePreset {
                from_opacity: 0.0,
                from_scale: 1.0,
                from_offset_px: 20,
                trigger: ScrollTrigger {
                    viewport_fraction: 0.90,
                },
            },
            title_timing: Timing {
                duration_ms: 800,
                easing: Easing::Power2Out,
                stagger_ms: 150,
            },
            hover_scale: HoverScale {
                scale: 1.05,
                duration_ms: 300,
                easing: Easing::Power2Out,
            },
        }
    }

    /// Inline style for the `index`-th section title before its entrance.
    pub fn title_initial_style(&self, index: usize) -> String {
        let t = &self.title_timing;
        let easing = t.easing.to_css();
        format!(
            "opacity: {opacity}; transform: translateY({y}px); \
             transition: opacity {d}ms {easing}, transform {d}ms {easing}; \
             transition-delay: {delay}ms;",
            opacity = self.title_entrance.from_opacity,
            y = self.title_entrance.from_offset_px,
            d = t.duration_ms,
            delay = crate::layout::stagger_delay(index, t.stagger_ms),
        )
    }

    /// CSS for the hover scale of tile content.
    pub fn hover_css(&self) -> String {
        let h = &self.hover_scale;
        format!(
            r#".tile-inner {{
    transform: {rest};
    transition: transform {d}ms {easing};
}}

.tile[data-hovered] .tile-inner {{
    transform: {lifted};
}}"#,
            rest = h.transform(false),
            lifted = h.transform(true),
            d = h.duration_ms,
            easing = h.easing.to_css(),
        )
    }
}

static ANIMATIONS: OnceLock<Animations> = OnceLock::new();

/// Register the animation presets. Idempotent; every call returns the same registry.
pub fn init() -> &'static Animations {
    ANIMATIONS.get_or_init(|| {
        tracing::debug!("registering animation presets");
        Animations::stock()
    })
}

/// One-time entrance of a mounted element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    Pending,
    Played,
}

impl Entrance {
    /// Signal that the visibility trigger fired. Returns `true` only the first time.
    pub fn fire(&mut self) -> bool {
        match self {
            Entrance::Pending => {
                *self = Entrance::Played;
                true
            }
            Entrance::Played => false,
        }
    }

    pub fn is_played(&self) -> bool {
        matches!(self, Entrance::Played)
    }

    /// The transform to show now: pre-entrance until played, then `rest`.
    pub fn current(&self, preset: &EntrancePreset, rest: &Transform) -> Transform {
        match self {
            Entrance::Pending => preset.initial(rest),
            Entrance::Played => rest.clone(),
        }
    }
}
