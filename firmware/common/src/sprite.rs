//! Sprite frames in read-only storage and the decode-then-blit path.
//!
//! A [`SpriteFrame`] never changes. Its pixels live either as native `u16`
//! words or as big-endian byte pairs (the layout raw RGB565 assets have when
//! they are placed in flash with `include_bytes!`). Drawing a frame decodes it
//! into a transient [`FrameBuffer`] on the stack and hands that to the surface
//! in a single [`Surface::blit`] call.
//!
//! # Clipping
//!
//! A frame placed partly outside the surface is clipped: only the visible
//! sub-rectangle is decoded and blitted. A frame placed entirely outside the
//! surface produces no draw call at all.

use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::debug;

use crate::config::MAX_SPRITE_PIXELS;
use crate::surface::Surface;

// =============================================================================
// Pixel Storage
// =============================================================================

/// Backing memory of a sprite frame.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PixelStorage {
    /// Native RGB565 words, read directly.
    Words(&'static [u16]),
    /// Big-endian RGB565 byte pairs, read one word at a time.
    BigEndianBytes(&'static [u8]),
}

impl PixelStorage {
    /// Number of pixels stored.
    pub const fn len(&self) -> usize {
        match self {
            Self::Words(words) => words.len(),
            Self::BigEndianBytes(bytes) => bytes.len() / 2,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.len() == 0 }

    /// Read the raw RGB565 word for pixel `index`.
    #[inline]
    pub fn read_word(
        &self,
        index: usize,
    ) -> u16 {
        match self {
            Self::Words(words) => words[index],
            Self::BigEndianBytes(bytes) => u16::from_be_bytes([bytes[2 * index], bytes[2 * index + 1]]),
        }
    }
}

// =============================================================================
// Sprite Frame
// =============================================================================

/// Immutable, row-major RGB565 image.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    size: Size,
    storage: PixelStorage,
}

impl SpriteFrame {
    /// Frame over native words.
    ///
    /// # Panics
    ///
    /// If `words` does not hold exactly `width * height` pixels, or the frame
    /// exceeds [`MAX_SPRITE_PIXELS`]. In a `const`/`static` this fails the build.
    pub const fn from_words(
        width: u32,
        height: u32,
        words: &'static [u16],
    ) -> Self {
        Self::new(width, height, PixelStorage::Words(words))
    }

    /// Frame over big-endian byte pairs. Same panics as [`Self::from_words`];
    /// an odd byte count is rejected too.
    pub const fn from_be_bytes(
        width: u32,
        height: u32,
        bytes: &'static [u8],
    ) -> Self {
        assert!(bytes.len() % 2 == 0, "sprite byte data must hold whole RGB565 words");
        Self::new(width, height, PixelStorage::BigEndianBytes(bytes))
    }

    const fn new(
        width: u32,
        height: u32,
        storage: PixelStorage,
    ) -> Self {
        let pixels = (width * height) as usize;
        assert!(storage.len() == pixels, "sprite pixel count must equal width * height");
        assert!(pixels <= MAX_SPRITE_PIXELS, "sprite exceeds MAX_SPRITE_PIXELS");
        Self {
            size: Size::new(width, height),
            storage,
        }
    }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    #[inline]
    pub const fn storage(&self) -> &PixelStorage { &self.storage }

    /// Color at `(x, y)`. Panics when out of range.
    #[inline]
    pub fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> Rgb565 {
        assert!(x < self.size.width && y < self.size.height, "pixel outside sprite");
        let index = (y * self.size.width + x) as usize;
        Rgb565::from(RawU16::new(self.storage.read_word(index)))
    }
}

impl fmt::Debug for SpriteFrame {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let medium = match self.storage {
            PixelStorage::Words(_) => "words",
            PixelStorage::BigEndianBytes(_) => "be-bytes",
        };
        write!(f, "SpriteFrame({}x{}, {medium})", self.size.width, self.size.height)
    }
}

// =============================================================================
// Frame Buffer
// =============================================================================

/// Transient staging buffer between read-only frame data and the display.
pub struct FrameBuffer {
    size: Size,
    pixels: Vec<Rgb565, MAX_SPRITE_PIXELS>,
}

impl FrameBuffer {
    /// Decode a whole frame.
    pub fn decode(frame: &SpriteFrame) -> Self { Self::decode_region(frame, Rectangle::new(Point::zero(), frame.size())) }

    /// Decode the part of `frame` inside `region` (frame-local coordinates).
    ///
    /// `region` is first intersected with the frame, so the result never
    /// reads past the stored data.
    pub fn decode_region(
        frame: &SpriteFrame,
        region: Rectangle,
    ) -> Self {
        let region = region.intersection(&Rectangle::new(Point::zero(), frame.size()));
        let mut pixels = Vec::new();

        for y in region.rows() {
            for x in region.columns() {
                // Capacity is guaranteed by the frame constructors.
                let _ = pixels.push(frame.pixel(x as u32, y as u32));
            }
        }

        Self {
            size: region.size,
            pixels,
        }
    }

    #[inline]
    pub const fn size(&self) -> Size { self.size }

    #[inline]
    pub fn pixels(&self) -> &[Rgb565] { &self.pixels }
}

// =============================================================================
// Blit
// =============================================================================

/// Draw `frame` with its top-left corner at `origin`.
///
/// Returns `Ok(false)` when the frame is entirely off-screen and nothing was
/// drawn.
pub fn blit_frame<S: Surface>(
    surface: &mut S,
    frame: &SpriteFrame,
    origin: Point,
) -> Result<bool, S::Error> {
    let placed = Rectangle::new(origin, frame.size());
    let visible = placed.intersection(&surface.bounds());

    if visible.is_zero_sized() {
        debug!("sprite at ({}, {}) is off-screen, skipped", origin.x, origin.y);
        return Ok(false);
    }
    if visible != placed {
        debug!(
            "sprite at ({}, {}) clipped to {}x{}",
            origin.x, origin.y, visible.size.width, visible.size.height
        );
    }

    let buffer = FrameBuffer::decode_region(frame, Rectangle::new(visible.top_left - origin, visible.size));
    surface.blit(visible, buffer.pixels())?;
    Ok(true)
}

// =============================================================================
// Tests
// =============================================================================
