//! Sprite clock simulator for desktop.
//!
//! Runs the clock face from `sprite-clock-common` in an SDL window, with a
//! simulated network link and the host clock as time source.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p sprite-clock-simulator -- --connect-after 300
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod link;
mod surface;
mod timing;

use std::num::NonZeroU32;

use clap::Parser;
use sprite_clock_common::ClockFace;
use sprite_clock_common::config::{CREDENTIALS, UTC_OFFSET_SECS};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::link::{SimulatedLink, WallClock};
use crate::surface::SimulatorSurface;
use crate::timing::StdDelay;

/// Sprite clock desktop simulator
#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Run the sprite clock face in a desktop window")]
#[command(version)]
struct Args {
    /// Window pixel scale
    #[arg(long, default_value = "2")]
    scale: u32,

    /// Link status polls that report "not connected" before the link comes up
    #[arg(long, default_value = "250")]
    connect_after: u32,

    /// Make every n-th time reading fail
    #[arg(long)]
    fail_time_every: Option<NonZeroU32>,

    /// Local offset from UTC in seconds
    #[arg(long, default_value_t = UTC_OFFSET_SECS, allow_hyphen_values = true)]
    utc_offset: i32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    info!("Sprite clock simulator v{}", env!("CARGO_PKG_VERSION"));
    info!(?args, "Starting");

    let mut surface = SimulatorSurface::new(args.scale);
    let mut link = SimulatedLink::new(args.connect_after);
    let mut clock = WallClock::new(args.utc_offset, link.connected_flag(), args.fail_time_every);
    let mut delay = StdDelay;

    let mut face = ClockFace::new();
    match face.start(&mut link, &CREDENTIALS, &mut surface, &mut delay) {
        Ok(failed_polls) => info!(failed_polls, "Link up, entering clock loop"),
        Err(err) => error!("{}", err),
    }

    face.run(&mut clock, &mut surface, &mut delay)
}
