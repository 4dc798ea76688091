//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by a user config file in the content root. Every key is
//! optional; the defaults reproduce the reference fanned-stack look.
//!
//! ## Configuration Options
//!
//! ```toml
//! [layout]
//! breakpoint_px = 768         # Desktop layout at and above this width
//! max_height = 120            # Lift of the middle tile when nothing is hovered
//! step = 20                   # Lift lost per position away from the middle
//! hover_lift = 120            # Lift of the hovered tile
//! perspective_px = 5000
//! rotate_y_deg = -45
//! transform_ms = 200          # Hover transform transition
//! opacity_ms = 600            # Opacity transition
//! stagger_ms = 50             # Per-index transition delay
//! index_mode = "compacted"    # or "original"
//!
//! [marquee]
//! repeat = 4                  # Copies of the list in the mobile band
//! duration_s = 40             # One full loop
//! gap = "1rem"
//!
//! [colors]
//! background = "#050505"
//! text = "#f5f5f5"
//! text_muted = "#9a9a9a"
//! accent = "#d3fd50"
//! accent_text = "#050505"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Desktop fanned-stack geometry and timing.
    pub layout: LayoutConfig,
    /// Mobile marquee band.
    pub marquee: MarqueeConfig,
    /// Page colors.
    pub colors: ColorConfig,
}

/// Bound on lift and step magnitudes (px).
const MAX_LAYOUT_PX: u32 = 10_000;
/// Bound on transition durations and per-index delay (ms).
const MAX_DURATION_MS: u32 = 10_000;

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.breakpoint_px == 0 {
            return Err(ConfigError::Validation(
                "layout.breakpoint_px must be non-zero".into(),
            ));
        }
        if self.layout.perspective_px == 0 {
            return Err(ConfigError::Validation(
                "layout.perspective_px must be non-zero".into(),
            ));
        }
        for (name, value) in [
            ("layout.max_height", self.layout.max_height),
            ("layout.step", self.layout.step),
            ("layout.hover_lift", self.layout.hover_lift),
        ] {
            if value.unsigned_abs() > MAX_LAYOUT_PX {
                return Err(ConfigError::Validation(format!(
                    "{name} must be within ±{MAX_LAYOUT_PX}"
                )));
            }
        }
        for (name, value) in [
            ("layout.transform_ms", self.layout.transform_ms),
            ("layout.opacity_ms", self.layout.opacity_ms),
            ("layout.stagger_ms", self.layout.stagger_ms),
        ] {
            if value > MAX_DURATION_MS {
                return Err(ConfigError::Validation(format!(
                    "{name} must be at most {MAX_DURATION_MS}"
                )));
            }
        }
        if self.marquee.repeat == 0 {
            return Err(ConfigError::Validation(
                "marquee.repeat must be at least 1".into(),
            ));
        }
        if self.marquee.duration_s == 0 {
            return Err(ConfigError::Validation(
                "marquee.duration_s must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Which index the desktop layout feeds into the offset and z-order math
/// when some items were dropped for a missing id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexMode {
    /// Positions in the filtered list; the stack stays symmetric.
    #[default]
    Compacted,
    /// Positions in the unfiltered list; dropped items leave gaps.
    Original,
}

/// Desktop fanned-stack settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Viewport width (px) at and above which the fanned stack is shown.
    pub breakpoint_px: u32,
    /// Resting lift of the middle tile (px).
    pub max_height: i32,
    /// Lift lost per position of distance from the middle (px).
    pub step: i32,
    /// Lift of the hovered tile (px).
    pub hover_lift: i32,
    pub perspective_px: u32,
    pub rotate_y_deg: i32,
    pub transform_ms: u32,
    pub opacity_ms: u32,
    /// Transition delay added per index (ms).
    pub stagger_ms: u32,
    pub index_mode: IndexMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            max_height: 120,
            step: 20,
            hover_lift: 120,
            perspective_px: 5000,
            rotate_y_deg: -45,
            transform_ms: 200,
            opacity_ms: 600,
            stagger_ms: 50,
            index_mode: IndexMode::Compacted,
        }
    }
}

/// Mobile marquee settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarqueeConfig {
    /// How many copies of the list make up the band.
    pub repeat: usize,
    /// Seconds for one full loop.
    pub duration_s: u32,
    /// Gap between tiles (CSS value).
    pub gap: String,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            repeat: 4,
            duration_s: 40,
            gap: "1rem".to_string(),
        }
    }
}

/// Page color scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    pub text: String,
    /// Placeholder and secondary text.
    pub text_muted: String,
    /// Call-to-action and archive button background.
    pub accent: String,
    pub accent_text: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#050505".to_string(),
            text: "#f5f5f5".to_string(),
            text_muted: "#9a9a9a".to_string(),
            accent: "#d3fd50".to_string(),
            accent_text: "#050505".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, on top of stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Showreel Configuration
# ======================
# All settings are optional. Values shown below are the defaults.
# Place this file next to projects.toml in the content directory.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Desktop fanned stack
# ---------------------------------------------------------------------------
[layout]
# Viewport width (px) at and above which the fanned stack replaces the marquee.
breakpoint_px = 768

# Resting lift of the middle tile, and the lift lost per position away from it.
# Tiles far from the middle may end up below the baseline.
max_height = 120
step = 20

# Lift of the hovered tile. Every other tile drops to the baseline.
hover_lift = 120

# 3D transform applied to every tile.
perspective_px = 5000
rotate_y_deg = -45

# Transition timings in milliseconds. Each tile's transition is delayed by
# index * stagger_ms.
transform_ms = 200
opacity_ms = 600
stagger_ms = 50

# Which position feeds the offset math when items are skipped for a missing id:
#   "compacted" - position among rendered tiles (symmetric stack)
#   "original"  - position in projects.toml (skipped items leave gaps)
index_mode = "compacted"

# ---------------------------------------------------------------------------
# Mobile marquee
# ---------------------------------------------------------------------------
[marquee]
# Copies of the list in the scrolling band.
repeat = 4

# Seconds for one full loop.
duration_s = 40

# Gap between tiles (CSS value).
gap = "1rem"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#050505"
text = "#f5f5f5"
text_muted = "#9a9a9a"
accent = "#d3fd50"
accent_text = "#050505"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {bg};
    --color-text: {text};
    --color-text-muted: {muted};
    --color-accent: {accent};
    --color-accent-text: {accent_text};
}}"#,
        bg = colors.background,
        text = colors.text,
        muted = colors.text_muted,
        accent = colors.accent,
        accent_text = colors.accent_text,
    )
}

/// Generate the responsive switch between the two gallery presentations
/// plus the marquee custom properties.
pub fn generate_layout_css(layout: &LayoutConfig, marquee: &MarqueeConfig) -> String {
    format!(
        r#":root {{
    --marquee-duration: {duration}s;
    --marquee-gap: {gap};
}}

.gallery-desktop {{ display: none; }}
.gallery-marquee {{ display: block; }}

@media (min-width: {breakpoint}px) {{
    .gallery-desktop {{ display: block; }}
    .gallery-marquee {{ display: none; }}
}}"#,
        duration = marquee.duration_s,
        gap = marquee.gap,
        breakpoint = layout.breakpoint_px,
    )
}
