//! Fake network link and wall-clock time source.

use std::cell::Cell;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use sprite_clock_common::time::SECONDS_PER_DAY;
use sprite_clock_common::{Credentials, Link, LinkStatus, TimeOfDay, TimeSource, TimeUnavailable};
use tracing::{debug, info};

/// Link that comes up after a fixed number of status polls.
pub struct SimulatedLink {
    connect_after: u32,
    polls: u32,
    begun: bool,
    connected: Rc<Cell<bool>>,
}

impl SimulatedLink {
    pub fn new(connect_after: u32) -> Self {
        Self {
            connect_after,
            polls: 0,
            begun: false,
            connected: Rc::new(Cell::new(false)),
        }
    }

    /// Flag that turns true once the link reports connected.
    pub fn connected_flag(&self) -> Rc<Cell<bool>> { Rc::clone(&self.connected) }
}

impl Link for SimulatedLink {
    fn begin(
        &mut self,
        credentials: &Credentials,
    ) {
        info!(?credentials, "Joining network");
        self.begun = true;
        self.polls = 0;
    }

    fn status(&mut self) -> LinkStatus {
        if !self.begun {
            return LinkStatus::NotConnected;
        }
        if self.polls < self.connect_after {
            self.polls += 1;
            return LinkStatus::NotConnected;
        }
        self.connected.set(true);
        LinkStatus::Connected
    }
}

/// Host clock shifted by a fixed UTC offset.
///
/// Unavailable until the link is connected, like a network time client that
/// has not synced yet. With `fail_every` set, every n-th reading fails too.
pub struct WallClock {
    utc_offset_secs: i32,
    synced: Rc<Cell<bool>>,
    fail_every: Option<NonZeroU32>,
    queries: u32,
}

impl WallClock {
    pub fn new(
        utc_offset_secs: i32,
        synced: Rc<Cell<bool>>,
        fail_every: Option<NonZeroU32>,
    ) -> Self {
        Self {
            utc_offset_secs,
            synced,
            fail_every,
            queries: 0,
        }
    }
}

impl TimeSource for WallClock {
    fn local_time(&mut self) -> Result<TimeOfDay, TimeUnavailable> {
        if !self.synced.get() {
            return Err(TimeUnavailable);
        }

        self.queries = self.queries.wrapping_add(1);
        if self.fail_every.is_some_and(|n| self.queries.is_multiple_of(n.get())) {
            debug!(query = self.queries, "Injected time failure");
            return Err(TimeUnavailable);
        }

        let unix = SystemTime::now().duration_since(UNIX_EPOCH).map_err(|_| TimeUnavailable)?.as_secs() as i64;
        Ok(local_time_of_day(unix, self.utc_offset_secs))
    }
}

/// Time of day for a Unix timestamp at the given UTC offset.
fn local_time_of_day(
    unix_secs: i64,
    utc_offset_secs: i32,
) -> TimeOfDay {
    let seconds = (unix_secs + i64::from(utc_offset_secs)).rem_euclid(i64::from(SECONDS_PER_DAY));
    TimeOfDay::from_seconds_of_day(seconds as u32)
}
