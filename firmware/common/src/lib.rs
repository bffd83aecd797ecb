//! Core of the sprite clock face.
//!
//! This crate contains the platform-agnostic logic shared between the desktop
//! simulator and any hardware build:
//!
//! - [`sprite`]: Frame decoding from read-only pixel storage and the blit path
//! - [`animation`]: Cyclic sprite sequencing with independent cursors
//! - [`text`]: Differential (per glyph cell) time string rendering
//! - [`connectivity`]: Start-up wait for the network link with loading animation
//! - [`clock`]: Start-up sequence and the steady-state tick loop
//!
//! Collaborators (display, network link, time source) are reached only through
//! the traits in [`surface`], [`link`] and [`time`]; sleeping goes through
//! [`embedded_hal::delay::DelayNs`].
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests, so the same code runs on the host
//! test harness and on the microcontroller.
//!
//! ```bash
//! cargo test -p sprite-clock-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animation;
pub mod clock;
pub mod colors;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod link;
pub mod sprite;
pub mod sprites;
pub mod surface;
pub mod text;
pub mod time;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use animation::{Animation, AnimationCursor, SpriteSequence};
pub use clock::ClockFace;
pub use connectivity::{ConnectivityWait, WaitState};
pub use error::ClockError;
pub use link::{Credentials, Link, LinkStatus};
pub use sprite::{FrameBuffer, SpriteFrame};
pub use surface::{GraphicsSurface, Surface};
pub use text::{CellGeometry, Palette, TimeRenderer};
pub use time::{TimeOfDay, TimeSource, TimeString, TimeUnavailable};
