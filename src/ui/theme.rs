//! Color theme constants.
//!
//! Minimal dark palette used across the whole interface.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the active destination
pub const COLOR_ACCENT: Color = Color::White;

/// Brand mark in the navigation bar
pub const COLOR_BRAND: Color = Color::White;

/// Section headings
pub const COLOR_HEADING: Color = Color::LightCyan;

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Positive metrics and success states
pub const COLOR_METRIC: Color = Color::LightGreen;

/// Tag pills and badges
pub const COLOR_TAG: Color = Color::Rgb(0, 122, 204);

/// Toast overlay text
pub const COLOR_TOAST: Color = Color::Black;

/// Toast overlay background
pub const COLOR_TOAST_BG: Color = Color::LightGreen;

/// Skill gauge fill
pub const COLOR_GAUGE: Color = Color::White;

/// Skill gauge track
pub const COLOR_GAUGE_BG: Color = Color::DarkGray;
