//! Error type for the clock loops.
//!
//! The only hard failures are display errors. They are tagged with the stage
//! that hit them so the forever loops can log something useful and carry on.

use core::fmt;

/// Which part of a tick or poll was drawing when the surface failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Screen clear or label at start-up / after connecting.
    Setup,
    /// Differential time string redraw.
    TimeText,
    /// Sprite frame blit.
    Sprite,
    /// Loading dot indicator.
    Progress,
    /// Presenting the finished frame.
    Flush,
}

impl Stage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::TimeText => "time text",
            Self::Sprite => "sprite",
            Self::Progress => "progress dots",
            Self::Flush => "flush",
        }
    }
}

/// A surface error raised while the clock was drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockError<E> {
    pub stage: Stage,
    pub source: E,
}

impl<E> ClockError<E> {
    pub const fn new(
        stage: Stage,
        source: E,
    ) -> Self {
        Self { stage, source }
    }

    /// Adapter for `map_err`.
    pub fn at(stage: Stage) -> impl FnOnce(E) -> Self { move |source| Self::new(stage, source) }
}

impl<E: fmt::Debug> fmt::Display for ClockError<E> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "display error during {}: {:?}", self.stage.label(), self.source)
    }
}

impl<E: fmt::Debug> core::error::Error for ClockError<E> {}
