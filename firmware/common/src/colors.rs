//! Color constants for the clock face.
//!
//! The palette is deliberately tiny: everything is drawn either in the
//! background color (erase) or the highlight color (time digits, loading text).
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ST7789 panel, so sprite words are blitted
//! without conversion.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Screen background and glyph erase color.
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Cyan (0, 63, 31). Time digits and the loading label.
pub const HIGHLIGHT: Rgb565 = Rgb565::CYAN;

// =============================================================================
// Sprite Colors
// =============================================================================

/// Sprite figure outline.
pub const SPRITE_BODY: Rgb565 = Rgb565::WHITE;

/// Sprite head fill.
pub const SPRITE_HEAD: Rgb565 = Rgb565::YELLOW;

/// Orange accent for the runner's scarf. RGB565: (31, 32, 0).
pub const SPRITE_ACCENT: Rgb565 = Rgb565::new(31, 32, 0);
