//! Display, layout and timing configuration constants.
//!
//! All screen coordinates are fixed for the 320x240 landscape ST7789 panel.
//! They are grouped here so the rendering code receives them as parameters
//! (see [`CellGeometry`]) instead of hard-coding them.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::{Point, Size};

use crate::colors::{BACKGROUND, HIGHLIGHT};
use crate::link::Credentials;
use crate::text::{CellGeometry, Palette};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (after rotation to landscape).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Font used for the time digits and the loading label.
pub const FONT: &MonoFont<'static> = &profont::PROFONT_24_POINT;

/// Horizontal advance of one glyph cell.
///
/// Must equal the font's fixed advance or neighbouring digits overlap.
pub const GLYPH_ADVANCE: u32 = FONT.character_size.width + FONT.character_spacing;

/// Height of one glyph cell.
pub const GLYPH_HEIGHT: u32 = FONT.character_size.height;

/// Distance from the top of a glyph cell to the text baseline.
///
/// Text positions are baseline positions, like a GFX text cursor.
pub const GLYPH_BASELINE: u32 = FONT.baseline;

// =============================================================================
// Time Display
// =============================================================================

/// Left edge of the first time glyph cell.
pub const TIME_LEFT_PAD: i32 = 80;

/// Baseline of the time glyph row.
pub const TIME_TOP_PAD: i32 = 123;

/// Monospaced grid for the `HH:MM:SS` string.
pub const TIME_CELLS: CellGeometry = CellGeometry::new(TIME_LEFT_PAD, TIME_TOP_PAD, GLYPH_ADVANCE);

/// Palette for the time string and loading text.
pub const PALETTE: Palette = Palette::new(BACKGROUND, HIGHLIGHT);

// =============================================================================
// Sprites
// =============================================================================

/// Width of every sprite frame.
pub const SPRITE_WIDTH: u32 = 27;

/// Height of every sprite frame.
pub const SPRITE_HEIGHT: u32 = 40;

/// Pixel count of one sprite frame.
pub const SPRITE_PIXELS: usize = (SPRITE_WIDTH * SPRITE_HEIGHT) as usize;

/// Upper bound for any frame handed to the decoder (64x64).
pub const MAX_SPRITE_PIXELS: usize = 64 * 64;

/// Top-left of the sprite, horizontally centered above the bottom edge.
pub const SPRITE_ORIGIN: Point = Point::new(((SCREEN_WIDTH - SPRITE_WIDTH) / 2) as i32, 150);

/// Size of every sprite frame.
pub const SPRITE_SIZE: Size = Size::new(SPRITE_WIDTH, SPRITE_HEIGHT);

// =============================================================================
// Start-up Phase
// =============================================================================

/// Label printed while waiting for the link.
pub const LOADING_LABEL: &str = "loading";

/// Baseline start of the loading label. Progress dots follow it on the same row.
pub const LOADING_LABEL_POS: Point = Point::new(100, 100);

/// The dot indicator advances once every this many connection polls.
pub const DOT_CADENCE: u32 = 5;

/// Number of dots shown before the indicator clears and restarts.
pub const DOT_MAX: u32 = 4;

/// Pause between connection polls in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 10;

// =============================================================================
// Steady State
// =============================================================================

/// Pause between clock ticks in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 100;

/// Local time offset from UTC in seconds (UTC-4).
pub const UTC_OFFSET_SECS: i32 = -4 * 3600;

// =============================================================================
// Network Credentials
// =============================================================================

/// Link credentials, fixed at build time.
///
/// Set `CLOCK_WIFI_SSID` / `CLOCK_WIFI_PASSWORD` in the environment before
/// building. There is no runtime way to change them.
pub const CREDENTIALS: Credentials = Credentials::new(
    match option_env!("CLOCK_WIFI_SSID") {
        Some(ssid) => ssid,
        None => "sprite-clock",
    },
    match option_env!("CLOCK_WIFI_PASSWORD") {
        Some(password) => password,
        None => "",
    },
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_fits_on_screen() {
        assert!(SPRITE_ORIGIN.x >= 0);
        assert!(SPRITE_ORIGIN.x as u32 + SPRITE_WIDTH <= SCREEN_WIDTH);
        assert!(SPRITE_ORIGIN.y as u32 + SPRITE_HEIGHT <= SCREEN_HEIGHT);
        assert!(SPRITE_PIXELS <= MAX_SPRITE_PIXELS);
    }

    #[test]
    fn test_time_row_fits_on_screen() {
        let right_edge = TIME_LEFT_PAD as u32 + 8 * GLYPH_ADVANCE;
        assert!(right_edge <= SCREEN_WIDTH, "time string overflows: {right_edge}");
        assert!(TIME_TOP_PAD >= GLYPH_BASELINE as i32);
    }

    #[test]
    fn test_time_row_stays_above_sprite() {
        let row_bottom = TIME_TOP_PAD - GLYPH_BASELINE as i32 + GLYPH_HEIGHT as i32;
        assert!(row_bottom <= SPRITE_ORIGIN.y, "time row ends at {row_bottom}");
    }

    #[test]
    fn test_glyph_advance_matches_font() {
        assert_eq!(GLYPH_ADVANCE, FONT.character_size.width + FONT.character_spacing);
    }
}
