//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.
//!
//! ## Build / Check
//!
//! ```text
//! 001 Teasers (11 videos)
//!     001 QGsa5QB5gK4
//!     002 5fR4MErzYeI
//! 003 Drafts (3 videos, 2 skipped)
//!     ...
//! 004 Coming Soon (empty)
//!
//! Generated 4 sections, 34 tiles → dist/index.html
//! ```
//!
//! ## Layout
//!
//! ```text
//! Teasers (desktop, hover: none)
//!  pos  id             z  offset  delay
//!  001  QGsa5QB5gK4   11    -20     0ms
//! ```

use crate::generate::{GenerateReport, SectionReport};
use crate::layout::GalleryView;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn section_header(index: usize, section: &SectionReport) -> String {
    let count = section.tiles.len();
    let detail = match (count, section.skipped) {
        (0, 0) => "empty".to_string(),
        (n, 0) => format!("{n} videos"),
        (n, skipped) => format!("{n} videos, {skipped} skipped"),
    };
    format!("{} {} ({})", format_index(index), section.title, detail)
}

/// Format the per-section inventory shared by `build` and `check`.
pub fn format_sections(sections: &[SectionReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        lines.push(section_header(i + 1, section));
        for (j, id) in section.tiles.iter().enumerate() {
            lines.push(format!("{}{} {}", indent(1), format_index(j + 1), id));
        }
    }
    lines
}

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = format_sections(&report.sections);
    let tiles: usize = report.sections.iter().map(|s| s.tiles.len()).sum();
    lines.push(String::new());
    lines.push(format!(
        "Generated {} sections, {} tiles → {}",
        report.sections.len(),
        tiles,
        report.page.display()
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

pub fn print_check_output(sections: &[SectionReport]) {
    for line in format_sections(sections) {
        println!("{}", line);
    }
}

/// Format the desktop layout of one section as a table.
pub fn format_layout_table(title: &str, hovered: Option<usize>, view: &GalleryView) -> Vec<String> {
    let hover = match hovered {
        Some(p) => format_index(p + 1),
        None => "none".to_string(),
    };
    let mut lines = vec![format!("{title} (desktop, hover: {hover})")];

    let tiles = match view {
        GalleryView::Empty => {
            lines.push(format!("{}No videos available", indent(1)));
            return lines;
        }
        GalleryView::Desktop(tiles) => tiles,
    };

    lines.push(format!(
        " {:<4} {:<13} {:>3} {:>7} {:>7}",
        "pos", "id", "z", "offset", "delay"
    ));
    for tile in tiles {
        let marker = if tile.hovered { "*" } else { " " };
        lines.push(format!(
            "{}{:<4} {:<13} {:>3} {:>7} {:>5}ms",
            marker,
            format_index(tile.slot.position + 1),
            tile.slot.id,
            tile.current.z_index,
            tile.current.translate_y_px,
            tile.current.transition.delay_ms,
        ));
    }
    lines
}

pub fn print_layout_table(title: &str, hovered: Option<usize>, view: &GalleryView) {
    for line in format_layout_table(title, hovered, view) {
        println!("{}", line);
    }
}
