//! Cyclic sprite sequencing.
//!
//! An [`Animation`] pairs a [`SpriteSequence`] with its own
//! [`AnimationCursor`]. Each [`Animation::advance`] returns the frame under
//! the cursor and moves the cursor on, wrapping at the end of the sequence.
//! Cursors are never rewound: an animation that is paused (because another
//! phase is active) resumes from wherever it stopped.

use embedded_graphics::prelude::Point;

use crate::sprite::{SpriteFrame, blit_frame};
use crate::surface::Surface;

/// Named, non-empty, ordered list of frames.
#[derive(Debug)]
pub struct SpriteSequence {
    name: &'static str,
    frames: &'static [SpriteFrame],
}

impl SpriteSequence {
    /// # Panics
    ///
    /// If `frames` is empty (a build failure when used in a `static`).
    pub const fn new(
        name: &'static str,
        frames: &'static [SpriteFrame],
    ) -> Self {
        assert!(!frames.is_empty(), "sprite sequence needs at least one frame");
        Self { name, frames }
    }

    #[inline]
    pub const fn name(&self) -> &'static str { self.name }

    #[inline]
    pub const fn len(&self) -> usize { self.frames.len() }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.frames.is_empty() }

    #[inline]
    pub const fn frames(&self) -> &'static [SpriteFrame] { self.frames }
}

/// Position of an animation within its sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationCursor {
    /// Index of the frame the next advance returns.
    pub sequence_index: usize,
    /// Number of advances so far (wrapping).
    pub tick_count: u32,
}

impl AnimationCursor {
    pub const fn new() -> Self {
        Self {
            sequence_index: 0,
            tick_count: 0,
        }
    }

    /// Return the current index and move to the next one modulo `len`.
    fn step(
        &mut self,
        len: usize,
    ) -> usize {
        let current = self.sequence_index;
        self.sequence_index = (current + 1) % len;
        self.tick_count = self.tick_count.wrapping_add(1);
        current
    }
}

/// Endless frame generator over one sequence.
pub struct Animation {
    sequence: &'static SpriteSequence,
    cursor: AnimationCursor,
}

impl Animation {
    /// Start at the first frame.
    pub const fn new(sequence: &'static SpriteSequence) -> Self {
        Self {
            sequence,
            cursor: AnimationCursor::new(),
        }
    }

    /// Frame under the cursor; the cursor moves on by one (wrapping).
    pub fn advance(&mut self) -> &'static SpriteFrame {
        let index = self.cursor.step(self.sequence.len());
        &self.sequence.frames[index]
    }

    /// Advance and draw the frame with its top-left at `origin`.
    pub fn advance_and_blit<S: Surface>(
        &mut self,
        surface: &mut S,
        origin: Point,
    ) -> Result<(), S::Error> {
        let frame = self.advance();
        blit_frame(surface, frame, origin)?;
        Ok(())
    }

    #[inline]
    pub const fn cursor(&self) -> AnimationCursor { self.cursor }

    #[inline]
    pub const fn sequence(&self) -> &'static SpriteSequence { self.sequence }
}

impl Iterator for Animation {
    type Item = &'static SpriteFrame;

    fn next(&mut self) -> Option<Self::Item> { Some(self.advance()) }

    fn size_hint(&self) -> (usize, Option<usize>) { (usize::MAX, None) }
}

// =============================================================================
// Tests
// =============================================================================
