//! Differential rendering of the `HH:MM:SS` time string.
//!
//! Redrawing the whole string every tick flickers and wastes SPI bandwidth.
//! Instead [`TimeRenderer`] remembers the string currently on screen and, for
//! each glyph cell that changed, prints the old glyph in the background color
//! (erasing exactly its pixels) and then the new glyph in the highlight color.
//! Unchanged cells get no draw calls at all.
//!
//! | Transition            | Cells redrawn | Draw calls |
//! |-----------------------|---------------|------------|
//! | first render (blank)  | 8             | 16         |
//! | `10:15:29 → 10:15:30` | 2             | 4          |
//! | `10:59:59 → 11:00:00` | 5             | 10         |
//! | time unavailable      | 0             | 0          |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use log::{debug, warn};

use crate::surface::Surface;
use crate::time::{TimeOfDay, TimeString, TimeUnavailable};

/// Fixed monospaced grid the time string is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGeometry {
    /// X of the first cell.
    pub left_pad: i32,
    /// Baseline Y of the row.
    pub top_pad: i32,
    /// Distance between cells; must match the font's advance.
    pub glyph_advance: u32,
}

impl CellGeometry {
    pub const fn new(
        left_pad: i32,
        top_pad: i32,
        glyph_advance: u32,
    ) -> Self {
        Self {
            left_pad,
            top_pad,
            glyph_advance,
        }
    }

    /// Text position of cell `index`.
    #[inline]
    pub const fn cell_origin(
        &self,
        index: usize,
    ) -> Point {
        Point::new(self.left_pad + index as i32 * self.glyph_advance as i32, self.top_pad)
    }
}

/// Erase and draw colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub highlight: Rgb565,
}

impl Palette {
    pub const fn new(
        background: Rgb565,
        highlight: Rgb565,
    ) -> Self {
        Self { background, highlight }
    }
}

/// Owns the last-drawn time string and redraws only what changed.
pub struct TimeRenderer {
    previous: TimeString,
    geometry: CellGeometry,
    palette: Palette,
}

impl TimeRenderer {
    /// Starts from [`TimeString::BLANK`] so the first render draws every cell.
    pub const fn new(
        geometry: CellGeometry,
        palette: Palette,
    ) -> Self {
        Self {
            previous: TimeString::BLANK,
            geometry,
            palette,
        }
    }

    /// The string currently on screen.
    #[inline]
    pub const fn rendered(&self) -> &TimeString { &self.previous }

    /// Call after the screen was cleared behind the renderer's back.
    pub fn forget(&mut self) { self.previous = TimeString::BLANK; }

    /// Redraw the cells where `next` differs from what is on screen.
    ///
    /// Returns the number of cells redrawn. A cell is recorded as shown only
    /// after both its erase and draw succeeded, so after an error the
    /// remaining cells are picked up again by the next call.
    pub fn render<S: Surface>(
        &mut self,
        next: &TimeString,
        surface: &mut S,
    ) -> Result<usize, S::Error> {
        let mut redrawn = 0;

        for index in next.changed_cells(&self.previous) {
            let old = self.previous.cell(index);
            let new = next.cell(index);
            let origin = self.geometry.cell_origin(index);
            surface.print_char(old, origin, self.palette.background)?;
            surface.print_char(new, origin, self.palette.highlight)?;
            self.previous.set_cell(index, next.as_bytes()[index]);
            redrawn += 1;
        }

        self.previous = *next;
        if redrawn > 0 {
            debug!("{}", next);
        }
        Ok(redrawn)
    }

    /// Render a time source reading.
    ///
    /// When the time is unavailable nothing is drawn and the previous string
    /// stays on screen.
    pub fn update<S: Surface>(
        &mut self,
        reading: Result<TimeOfDay, TimeUnavailable>,
        surface: &mut S,
    ) -> Result<usize, S::Error> {
        match reading {
            Ok(time) => self.render(&TimeString::from_time(time), surface),
            Err(err) => {
                warn!("{}", err);
                Ok(0)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
