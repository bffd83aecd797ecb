//! Window-backed drawing surface.

use std::convert::Infallible;
use std::process;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use sprite_clock_common::config::{FONT, SCREEN_HEIGHT, SCREEN_WIDTH};
use sprite_clock_common::{GraphicsSurface, Surface};
use tracing::info;

/// Off-screen framebuffer plus the SDL window that shows it.
///
/// Drawing goes to the framebuffer; [`Surface::flush`] copies it to the window
/// and handles window events. Closing the window exits the process, since the
/// clock loops never return.
pub struct SimulatorSurface {
    inner: GraphicsSurface<SimulatorDisplay<Rgb565>>,
    window: Window,
}

impl SimulatorSurface {
    pub fn new(scale: u32) -> Self {
        let display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let output_settings = OutputSettingsBuilder::new().scale(scale).build();
        Self {
            inner: GraphicsSurface::new(display, FONT),
            window: Window::new("Sprite Clock Sim", &output_settings),
        }
    }
}

impl Surface for SimulatorSurface {
    type Error = Infallible;

    fn bounds(&self) -> Rectangle { self.inner.bounds() }

    fn clear(
        &mut self,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.inner.clear(color)
    }

    fn print(
        &mut self,
        text: &str,
        position: Point,
        color: Rgb565,
    ) -> Result<Point, Self::Error> {
        self.inner.print(text, position, color)
    }

    fn fill_rect(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.inner.fill_rect(area, color)
    }

    fn blit(
        &mut self,
        area: Rectangle,
        pixels: &[Rgb565],
    ) -> Result<(), Self::Error> {
        self.inner.blit(area, pixels)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.window.update(self.inner.target());
        if self.window.events().any(|event| matches!(event, SimulatorEvent::Quit)) {
            info!("Window closed");
            process::exit(0);
        }
        Ok(())
    }
}
