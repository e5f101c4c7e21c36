//! Marquee color theme for dark terminals.

use ratatui::style::Color;

/// Background & Surface colors
pub const BG_DARK: Color = Color::Rgb(16, 20, 24); // #101418 - Near black
pub const BG_SURFACE: Color = Color::Rgb(22, 30, 36); // #161E24 - Panel background
pub const BG_ELEVATED: Color = Color::Rgb(30, 44, 52); // #1E2C34 - Selected row

/// Primary - Cyan (header, focus)
pub const PRIMARY: Color = Color::Rgb(34, 211, 238); // #22D3EE - Cyan
pub const PRIMARY_DIM: Color = Color::Rgb(21, 94, 117); // #155E75 - Deep cyan

/// Accent - Gold (nominations)
pub const ACCENT: Color = Color::Rgb(250, 204, 21); // #FACC15 - Gold

/// Text colors
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 232, 235); // #E6E8EB - High contrast
pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175); // #9CA3AF - Secondary text
pub const TEXT_MUTED: Color = Color::Rgb(100, 108, 118); // #646C76 - Muted text

/// Semantic colors
pub const SUCCESS: Color = Color::Rgb(118, 218, 133); // #76DA85 - Green
pub const ERROR: Color = Color::Rgb(248, 113, 113); // #F87171 - Red
pub const INFO: Color = Color::Rgb(96, 165, 250); // #60A5FA - Blue

/// Border colors
pub const BORDER_DIM: Color = Color::Rgb(48, 56, 64); // #303840 - Subtle border
pub const BORDER_FOCUS: Color = PRIMARY; // Focus indicator

/// Color for the nomination counter: gold once the list is full.
pub fn nomination_color(count: usize, limit: usize) -> Color {
    if count >= limit {
        ACCENT
    } else if count > 0 {
        SUCCESS
    } else {
        TEXT_MUTED
    }
}
