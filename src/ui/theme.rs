//! Color theme constants for the traceview UI.
//!
//! Minimal dark palette; series colors cycle per panel.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for focused/important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for hints and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Axis line and label color
pub const COLOR_AXIS: Color = Color::Gray;

/// Cycled trace colors, one per series within a panel
pub const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::LightBlue,
    Color::LightRed,
];

/// Color for the n-th series of a panel.
pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
