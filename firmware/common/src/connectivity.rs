//! Start-up wait for the network link.
//!
//! The wait has no retry limit and no timeout. Each poll that finds the link down advances the
//! loading sprite, and every [`DOT_CADENCE`]th poll advances the dot
//! indicator after the loading label.
//!
//! ```text
//!            status() == NotConnected
//!            ┌──────────────────────┐
//!            │  blit loading frame  │
//!            │  maybe advance dots  │
//!            ▼                      │
//!        ┌─────────┐ ───────────────┘
//!  ────► │ Waiting │
//!        └─────────┘
//!             │ status() == Connected
//!             ▼
//!        ┌───────────┐
//!        │ Connected │ (terminal)
//!        └───────────┘
//! ```

use core::fmt::Debug;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::animation::Animation;
use crate::config::{DOT_CADENCE, DOT_MAX, GLYPH_ADVANCE, GLYPH_BASELINE, GLYPH_HEIGHT, POLL_INTERVAL_MS};
use crate::error::{ClockError, Stage};
use crate::link::Link;
use crate::surface::Surface;
use crate::text::Palette;

/// State of the connectivity wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitState {
    Waiting,
    Connected,
}

// =============================================================================
// Dot Progress Indicator
// =============================================================================

/// Row of up to [`DOT_MAX`] dots that grows one dot per advance, then clears.
pub struct DotProgress {
    origin: Point,
    cursor: Point,
    dots: u32,
    palette: Palette,
}

impl DotProgress {
    /// `origin` is the text cursor right after the loading label.
    pub const fn new(
        origin: Point,
        palette: Palette,
    ) -> Self {
        Self {
            origin,
            cursor: origin,
            dots: 0,
            palette,
        }
    }

    /// Dots currently shown.
    #[inline]
    pub const fn dots(&self) -> u32 { self.dots }

    /// Area covered by a full row of dots.
    pub const fn area(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.origin.x, self.origin.y - GLYPH_BASELINE as i32),
            Size::new(DOT_MAX * GLYPH_ADVANCE, GLYPH_HEIGHT),
        )
    }

    /// Append one dot, or clear the row when it is already full.
    pub fn advance<S: Surface>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        if self.dots == DOT_MAX {
            surface.fill_rect(self.area(), self.palette.background)?;
            self.cursor = self.origin;
            self.dots = 0;
        } else {
            self.cursor = surface.print_char('.', self.cursor, self.palette.highlight)?;
            self.dots += 1;
        }
        Ok(())
    }
}

// =============================================================================
// Wait State Machine
// =============================================================================

/// Polls the link until it connects, animating the loading screen meanwhile.
pub struct ConnectivityWait<'a> {
    loading: &'a mut Animation,
    dots: DotProgress,
    sprite_origin: Point,
    state: WaitState,
    failed_polls: u32,
}

impl<'a> ConnectivityWait<'a> {
    /// `loading` keeps its cursor across waits; `dot_origin` is where the
    /// first dot goes.
    pub const fn new(
        loading: &'a mut Animation,
        dot_origin: Point,
        sprite_origin: Point,
        palette: Palette,
    ) -> Self {
        Self {
            loading,
            dots: DotProgress::new(dot_origin, palette),
            sprite_origin,
            state: WaitState::Waiting,
            failed_polls: 0,
        }
    }

    #[inline]
    pub const fn state(&self) -> WaitState { self.state }

    /// Polls that found the link down so far.
    #[inline]
    pub const fn failed_polls(&self) -> u32 { self.failed_polls }

    #[inline]
    pub const fn dots(&self) -> &DotProgress { &self.dots }

    /// One iteration: poll the link and, if it is still down, animate.
    ///
    /// Once connected this is a no-op that keeps returning
    /// [`WaitState::Connected`] without polling again.
    pub fn poll_once<L, S>(
        &mut self,
        link: &mut L,
        surface: &mut S,
    ) -> Result<WaitState, ClockError<S::Error>>
    where
        L: Link,
        S: Surface,
    {
        if self.state == WaitState::Connected {
            return Ok(WaitState::Connected);
        }

        if link.status().is_connected() {
            info!("Link connected after {} polls", self.failed_polls);
            self.state = WaitState::Connected;
            return Ok(WaitState::Connected);
        }
        self.failed_polls = self.failed_polls.wrapping_add(1);

        let tick = self.loading.cursor().tick_count;
        self.loading
            .advance_and_blit(surface, self.sprite_origin)
            .map_err(ClockError::at(Stage::Sprite))?;

        if tick % DOT_CADENCE == 0 {
            self.dots.advance(surface).map_err(ClockError::at(Stage::Progress))?;
        }

        surface.flush().map_err(ClockError::at(Stage::Flush))?;
        Ok(WaitState::Waiting)
    }

    /// Poll every [`POLL_INTERVAL_MS`] until the link is up.
    ///
    /// Display errors are logged and the wait goes on. Returns the number of
    /// polls that found the link down.
    pub fn run<L, S, D>(
        &mut self,
        link: &mut L,
        surface: &mut S,
        delay: &mut D,
    ) -> u32
    where
        L: Link,
        S: Surface,
        S::Error: Debug,
        D: DelayNs,
    {
        loop {
            match self.poll_once(link, surface) {
                Ok(WaitState::Connected) => return self.failed_polls,
                Ok(WaitState::Waiting) => {}
                Err(err) => warn!("{}", err),
            }
            delay.delay_ms(POLL_INTERVAL_MS);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
