//! Blocking delay for the desktop build.
//!
//! The core sleeps through `embedded_hal::delay::DelayNs`; on the host that
//! is just `std::thread::sleep`.

use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// [`DelayNs`] backed by the OS scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
