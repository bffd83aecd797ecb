//! Test doubles for the collaborator traits.

use std::collections::VecDeque;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;

use crate::config::{GLYPH_ADVANCE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::link::{Credentials, Link, LinkStatus};
use crate::surface::Surface;
use crate::time::{TimeOfDay, TimeSource, TimeUnavailable};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Rgb565),
    Print { text: String, position: Point, color: Rgb565 },
    FillRect { area: Rectangle, color: Rgb565 },
    Blit { area: Rectangle, pixels: Vec<Rgb565> },
    Flush,
}

/// Error returned once a [`RecordingSurface`] runs out of allowed draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceFault;

/// Records every call; optionally fails after a number of successful ones.
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    bounds: Rectangle,
    remaining: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            bounds: Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            remaining: None,
        }
    }

    /// Fail every call after `ok_calls` successful ones.
    pub fn failing_after(ok_calls: usize) -> Self {
        Self {
            remaining: Some(ok_calls),
            ..Self::new()
        }
    }

    pub fn prints(&self) -> Vec<(String, Point, Rgb565)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Print { text, position, color } => Some((text.clone(), *position, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn blits(&self) -> Vec<(Rectangle, Vec<Rgb565>)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Blit { area, pixels } => Some((*area, pixels.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(Rectangle, Rgb565)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { area, color } => Some((*area, *color)),
                _ => None,
            })
            .collect()
    }

    /// Everything except flushes.
    pub fn draw_count(&self) -> usize { self.ops.iter().filter(|op| **op != DrawOp::Flush).count() }

    pub fn reset(&mut self) { self.ops.clear(); }

    fn record(
        &mut self,
        op: DrawOp,
    ) -> Result<(), SurfaceFault> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return Err(SurfaceFault);
            }
            *remaining -= 1;
        }
        self.ops.push(op);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    type Error = SurfaceFault;

    fn bounds(&self) -> Rectangle { self.bounds }

    fn clear(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.record(DrawOp::Clear(color))
    }

    fn print(
        &mut self,
        text: &str,
        position: Point,
        color: Rgb565,
    ) -> Result<Point, Self::Error> {
        self.record(DrawOp::Print {
            text: text.to_string(),
            position,
            color,
        })?;
        Ok(position + Point::new((text.chars().count() as u32 * GLYPH_ADVANCE) as i32, 0))
    }

    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.record(DrawOp::FillRect { area, color })
    }

    fn blit(
        &mut self,
        area: Rectangle,
        pixels: &[Rgb565],
    ) -> Result<(), Self::Error> {
        assert_eq!(pixels.len(), (area.size.width * area.size.height) as usize, "blit size mismatch");
        self.record(DrawOp::Blit {
            area,
            pixels: pixels.to_vec(),
        })
    }

    fn flush(&mut self) -> Result<(), Self::Error> { self.record(DrawOp::Flush) }
}

/// Link that replays a fixed sequence of statuses, then stays connected.
pub struct ScriptedLink {
    script: VecDeque<LinkStatus>,
    pub begun_with: Option<Credentials>,
    pub polls: usize,
}

impl ScriptedLink {
    pub fn new(script: &[LinkStatus]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            begun_with: None,
            polls: 0,
        }
    }

    /// Not connected for `failures` polls, then connected.
    pub fn connecting_after(failures: usize) -> Self {
        let mut script = vec![LinkStatus::NotConnected; failures];
        script.push(LinkStatus::Connected);
        Self::new(&script)
    }
}

impl Link for ScriptedLink {
    fn begin(
        &mut self,
        credentials: &Credentials,
    ) {
        self.begun_with = Some(*credentials);
    }

    fn status(&mut self) -> LinkStatus {
        self.polls += 1;
        self.script.pop_front().unwrap_or(LinkStatus::Connected)
    }
}

/// Time source that replays readings, then reports unavailable.
pub struct ScriptedTime {
    script: VecDeque<Result<TimeOfDay, TimeUnavailable>>,
}

impl ScriptedTime {
    pub fn new(script: &[Result<TimeOfDay, TimeUnavailable>]) -> Self {
        Self {
            script: script.iter().copied().collect(),
        }
    }
}

impl TimeSource for ScriptedTime {
    fn local_time(&mut self) -> Result<TimeOfDay, TimeUnavailable> { self.script.pop_front().unwrap_or(Err(TimeUnavailable)) }
}

/// Records requested sleeps instead of sleeping.
#[derive(Default)]
pub struct CountingDelay {
    pub sleeps_ms: Vec<u32>,
}

impl DelayNs for CountingDelay {
    fn delay_ns(
        &mut self,
        _ns: u32,
    ) {
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.sleeps_ms.push(ms);
    }
}

/// Shorthand for a valid time of day in tests.
pub fn hms(
    hour: u8,
    minute: u8,
    second: u8,
) -> TimeOfDay {
    TimeOfDay::new(hour, minute, second).unwrap()
}
