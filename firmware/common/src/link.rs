//! Network link collaborator.
//!
//! The clock needs a network only for time sync, so the link interface is
//! reduced to "start connecting" and "are we connected yet".

/// Link credentials, fixed at build time.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub ssid: &'static str,
    pub password: &'static str,
}

impl Credentials {
    pub const fn new(
        ssid: &'static str,
        password: &'static str,
    ) -> Self {
        Self { ssid, password }
    }
}

// The password never reaches logs.
impl core::fmt::Debug for Credentials {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .finish()
    }
}

/// Result of a connection status poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStatus {
    Connected,
    NotConnected,
}

impl LinkStatus {
    #[inline]
    pub const fn is_connected(self) -> bool { matches!(self, Self::Connected) }
}

/// Network connection primitive.
pub trait Link {
    /// Start connecting with the given credentials. Does not block.
    fn begin(
        &mut self,
        credentials: &Credentials,
    );

    /// Poll the current connection status.
    fn status(&mut self) -> LinkStatus;
}
