//! The clock face: start-up sequence and steady-state tick loop.
//!
//! # Start-up
//!
//! 1. Clear the screen and print the loading label
//! 2. Ask the link to connect, then wait for it (see [`crate::connectivity`])
//! 3. Clear the screen again once connected
//!
//! # Steady state
//!
//! Every [`TICK_INTERVAL_MS`]: redraw the changed time cells, blit the next
//! running frame, present the frame and sleep. The tick interval is much
//! shorter than a second so the sprite animates smoothly, while the time text
//! only changes once per second and most ticks redraw no cells at all.

use core::fmt::Debug;

use embedded_graphics::prelude::Point;
use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::animation::Animation;
use crate::config::{LOADING_LABEL, LOADING_LABEL_POS, PALETTE, SPRITE_ORIGIN, TICK_INTERVAL_MS, TIME_CELLS};
use crate::connectivity::ConnectivityWait;
use crate::error::{ClockError, Stage};
use crate::link::{Credentials, Link};
use crate::sprites::{LOADING, RUNNING};
use crate::surface::Surface;
use crate::text::{CellGeometry, Palette, TimeRenderer};
use crate::time::TimeSource;

/// Everything the clock keeps between ticks.
pub struct ClockFace {
    renderer: TimeRenderer,
    loading: Animation,
    running: Animation,
    palette: Palette,
    sprite_origin: Point,
}

impl ClockFace {
    /// Face with the default layout from [`crate::config`].
    pub const fn new() -> Self { Self::with_layout(TIME_CELLS, PALETTE, SPRITE_ORIGIN) }

    pub const fn with_layout(
        cells: CellGeometry,
        palette: Palette,
        sprite_origin: Point,
    ) -> Self {
        Self {
            renderer: TimeRenderer::new(cells, palette),
            loading: Animation::new(&LOADING),
            running: Animation::new(&RUNNING),
            palette,
            sprite_origin,
        }
    }

    #[inline]
    pub const fn renderer(&self) -> &TimeRenderer { &self.renderer }

    #[inline]
    pub const fn loading(&self) -> &Animation { &self.loading }

    #[inline]
    pub const fn running(&self) -> &Animation { &self.running }

    /// Loading screen plus connectivity wait. Returns once the link is up,
    /// with the number of polls that found it down.
    ///
    /// Errors while drawing the loading screen or the final clear are
    /// returned; errors during the wait itself are logged and ignored.
    pub fn start<L, S, D>(
        &mut self,
        link: &mut L,
        credentials: &Credentials,
        surface: &mut S,
        delay: &mut D,
    ) -> Result<u32, ClockError<S::Error>>
    where
        L: Link,
        S: Surface,
        S::Error: Debug,
        D: DelayNs,
    {
        surface.clear(self.palette.background).map_err(ClockError::at(Stage::Setup))?;
        let dot_origin = surface
            .print(LOADING_LABEL, LOADING_LABEL_POS, self.palette.highlight)
            .map_err(ClockError::at(Stage::Setup))?;

        info!("Connecting to {}", credentials.ssid);
        link.begin(credentials);

        let failed_polls =
            ConnectivityWait::new(&mut self.loading, dot_origin, self.sprite_origin, self.palette).run(link, surface, delay);

        surface.clear(self.palette.background).map_err(ClockError::at(Stage::Setup))?;
        self.renderer.forget();
        Ok(failed_polls)
    }

    /// One steady-state iteration, without the sleep.
    ///
    /// Returns the number of time cells redrawn. An unavailable time only
    /// skips the text; the sprite still advances.
    pub fn tick<T, S>(
        &mut self,
        time: &mut T,
        surface: &mut S,
    ) -> Result<usize, ClockError<S::Error>>
    where
        T: TimeSource,
        S: Surface,
    {
        let redrawn = self
            .renderer
            .update(time.local_time(), surface)
            .map_err(ClockError::at(Stage::TimeText))?;
        self.running
            .advance_and_blit(surface, self.sprite_origin)
            .map_err(ClockError::at(Stage::Sprite))?;
        surface.flush().map_err(ClockError::at(Stage::Flush))?;
        Ok(redrawn)
    }

    /// Tick forever, sleeping [`TICK_INTERVAL_MS`] between ticks.
    pub fn run<T, S, D>(
        &mut self,
        time: &mut T,
        surface: &mut S,
        delay: &mut D,
    ) -> !
    where
        T: TimeSource,
        S: Surface,
        S::Error: Debug,
        D: DelayNs,
    {
        loop {
            if let Err(err) = self.tick(time, surface) {
                warn!("{}", err);
            }
            delay.delay_ms(TICK_INTERVAL_MS);
        }
    }
}

impl Default for ClockFace {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::colors::{BACKGROUND, HIGHLIGHT};
    use crate::config::{GLYPH_ADVANCE, POLL_INTERVAL_MS};
    use crate::link::LinkStatus;
    use crate::testing::{CountingDelay, DrawOp, RecordingSurface, ScriptedLink, ScriptedTime, SurfaceFault, hms};
    use crate::time::{TimeString, TimeUnavailable};

    const CREDS: Credentials = Credentials::new("net", "hunter2");

    #[test]
    fn test_start_sequence() {
        let mut face = ClockFace::new();
        let mut surface = RecordingSurface::new();
        let mut link = ScriptedLink::new(&[LinkStatus::NotConnected, LinkStatus::NotConnected, LinkStatus::Connected]);
        let mut delay = CountingDelay::default();

        let failed = face.start(&mut link, &CREDS, &mut surface, &mut delay).unwrap();

        assert_eq!(failed, 2);
        assert_eq!(link.begun_with, Some(CREDS));
        assert_eq!(surface.ops.first(), Some(&DrawOp::Clear(BACKGROUND)));
        assert_eq!(
            surface.ops[1],
            DrawOp::Print {
                text: "loading".into(),
                position: LOADING_LABEL_POS,
                color: HIGHLIGHT,
            }
        );
        assert_eq!(surface.ops.last(), Some(&DrawOp::Clear(BACKGROUND)));
        assert_eq!(surface.blits().len(), 2);
        assert_eq!(delay.sleeps_ms, vec![POLL_INTERVAL_MS; 2]);
    }

    #[test]
    fn test_first_dot_follows_label() {
        let mut face = ClockFace::new();
        let mut surface = RecordingSurface::new();
        let mut delay = CountingDelay::default();

        face.start(&mut ScriptedLink::connecting_after(1), &CREDS, &mut surface, &mut delay).unwrap();

        let label_end = LOADING_LABEL_POS + Point::new((LOADING_LABEL.len() as u32 * GLYPH_ADVANCE) as i32, 0);
        let dot = surface.prints().into_iter().find(|(text, ..)| text == ".").unwrap();
        assert_eq!(dot.1, label_end);
    }

    #[test]
    fn test_start_setup_error_is_returned() {
        let mut face = ClockFace::new();
        let mut surface = RecordingSurface::failing_after(1);
        let mut link = ScriptedLink::connecting_after(0);
        let mut delay = CountingDelay::default();

        let err = face.start(&mut link, &CREDS, &mut surface, &mut delay).unwrap_err();
        assert_eq!(err, ClockError::new(Stage::Setup, SurfaceFault));
        assert_eq!(link.begun_with, None);
    }

    #[test]
    fn test_tick_draws_text_then_sprite_then_flushes() {
        let mut face = ClockFace::new();
        let mut surface = RecordingSurface::new();
        let mut time = ScriptedTime::new(&[Ok(hms(12, 34, 56))]);

        assert_eq!(face.tick(&mut time, &mut surface).unwrap(), 8);

        let kinds: Vec<&str> = surface
            .ops
            .iter()
            .map(|op| match op {
                DrawOp::Print { .. } => "print",
                DrawOp::Blit { .. } => "blit",
                DrawOp::Flush => "flush",
                _ => "other",
            })
            .collect();
        let mut expected = vec!["print"; 16];
        expected.extend(["blit", "flush"]);
        assert_eq!(kinds, expected);
        assert_eq!(face.renderer().rendered(), &TimeString::from_time(hms(12, 34, 56)));
    }

    #[test]
    fn test_tick_redraws_only_changed_cells() {
        let mut face = ClockFace::new();
        let mut surface = RecordingSurface::new();
        let mut time = ScriptedTime::new(&[Ok(hms(10, 15, 29)), Ok(hms(10, 15, 29)), Ok(hms(10, 15, 30))]);

        assert_eq!(face.tick(&mut time, &mut surface).unwrap(), 8);
        assert_eq!(face.tick(&mut time, &mut surface).unwrap(), 0);
        assert_eq!(face.tick(&mut time, &mut surface).unwrap(), 2);
    }

    #[test]
    fn test_sprite_advances_when_time_unavailable() {
        let mut face = ClockFace::new();
        let mut surface = RecordingSurface::new();
        let mut time = ScriptedTime::new(&[Err(TimeUnavailable)]);

        assert_eq!(face.tick(&mut time, &mut surface).unwrap(), 0);
        assert!(surface.prints().is_empty());
        assert_eq!(surface.blits().len(), 1);
        assert_eq!(face.running().cursor().tick_count, 1);
    }

    #[test]
    fn test_running_cursor_persists_across_ticks() {
        let mut face = ClockFace::new();
        let mut surface = RecordingSurface::new();
        let mut time = ScriptedTime::new(&[]);

        for _ in 0..5 {
            face.tick(&mut time, &mut surface).unwrap();
        }
        assert_eq!(face.running().cursor().sequence_index, 5 % RUNNING.len());
        assert_eq!(face.loading().cursor().tick_count, 0);
    }

    #[test]
    fn test_tick_error_names_stage() {
        let mut face = ClockFace::new();
        let mut surface = RecordingSurface::failing_after(16);
        let mut time = ScriptedTime::new(&[Ok(hms(1, 2, 3))]);

        let err = face.tick(&mut time, &mut surface).unwrap_err();
        assert_eq!(err.stage, Stage::Sprite);
    }

    #[test]
    fn test_start_resets_rendered_text() {
        let mut face = ClockFace::new();
        let mut surface = RecordingSurface::new();
        let mut delay = CountingDelay::default();

        face.tick(&mut ScriptedTime::new(&[Ok(hms(9, 0, 0))]), &mut surface).unwrap();
        face.start(&mut ScriptedLink::connecting_after(0), &CREDS, &mut surface, &mut delay).unwrap();
        assert_eq!(face.renderer().rendered(), &TimeString::BLANK);
    }
}
