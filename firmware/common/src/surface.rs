//! Display surface collaborator and its `embedded-graphics` adapter.
//!
//! The core never talks to a panel driver directly. It decides *what* to draw
//! and hands that to a [`Surface`]; [`GraphicsSurface`] turns those calls into
//! `embedded-graphics` primitives on any RGB565 [`DrawTarget`].
//!
//! Text positions are baseline positions and [`Surface::print`] returns the
//! cursor after the printed text, so callers can keep appending glyphs the way
//! a GFX-style text cursor works.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

/// Drawing operations the clock face needs from a display.
pub trait Surface {
    type Error;

    /// Visible area of the display.
    fn bounds(&self) -> Rectangle;

    /// Fill the whole display with one color.
    fn clear(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Draw `text` with its baseline starting at `position`.
    ///
    /// Only glyph pixels are touched. Returns the cursor after the text.
    fn print(
        &mut self,
        text: &str,
        position: Point,
        color: Rgb565,
    ) -> Result<Point, Self::Error>;

    /// Draw a single character. See [`Surface::print`].
    fn print_char(
        &mut self,
        ch: char,
        position: Point,
        color: Rgb565,
    ) -> Result<Point, Self::Error> {
        let mut buf = [0u8; 4];
        self.print(ch.encode_utf8(&mut buf), position, color)
    }

    /// Fill a rectangle with one color.
    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Copy `pixels` (row-major, exactly `area.size` of them) into `area`.
    fn blit(
        &mut self,
        area: Rectangle,
        pixels: &[Rgb565],
    ) -> Result<(), Self::Error>;

    /// Present everything drawn since the last flush.
    ///
    /// Direct-write panels need nothing here; buffered targets override it.
    fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
}

/// [`Surface`] over an `embedded-graphics` draw target with a monospaced font.
pub struct GraphicsSurface<D> {
    target: D,
    font: &'static MonoFont<'static>,
}

impl<D> GraphicsSurface<D> {
    pub const fn new(
        target: D,
        font: &'static MonoFont<'static>,
    ) -> Self {
        Self { target, font }
    }

    #[inline]
    pub const fn target(&self) -> &D { &self.target }

    #[inline]
    pub fn target_mut(&mut self) -> &mut D { &mut self.target }

    pub fn into_inner(self) -> D { self.target }
}

impl<D> Surface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn bounds(&self) -> Rectangle { self.target.bounding_box() }

    fn clear(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.target.clear(color)
    }

    fn print(
        &mut self,
        text: &str,
        position: Point,
        color: Rgb565,
    ) -> Result<Point, Self::Error> {
        let style = MonoTextStyle::new(self.font, color);
        Text::with_baseline(text, position, style, Baseline::Alphabetic).draw(&mut self.target)
    }

    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.target.fill_solid(&area, color)
    }

    fn blit(
        &mut self,
        area: Rectangle,
        pixels: &[Rgb565],
    ) -> Result<(), Self::Error> {
        self.target.fill_contiguous(&area, pixels.iter().copied())
    }
}

// =============================================================================
// Tests
// =============================================================================
