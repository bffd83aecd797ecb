//! Built-in sprite sequences.
//!
//! Frames are rasterised at compile time by the `const fn`s below, so they end
//! up in read-only program memory exactly like converted GIF assets would.
//!
//! - [`RUNNING`]: 4-frame runner, stored as native RGB565 words
//! - [`LOADING`]: 3-frame walker, stored as big-endian RGB565 bytes (the
//!   layout of a raw asset pulled in with `include_bytes!`)

use crate::animation::SpriteSequence;
use crate::config::{SPRITE_HEIGHT, SPRITE_PIXELS, SPRITE_WIDTH};
use crate::sprite::SpriteFrame;

// Raw RGB565 words of the sprite palette (see `colors`).
const RAW_BACKGROUND: u16 = 0x0000;
const RAW_BODY: u16 = 0xFFFF;
const RAW_HEAD: u16 = 0xFFE0;
const RAW_ACCENT: u16 = 0xFC00;

const W: i32 = SPRITE_WIDTH as i32;
const H: i32 = SPRITE_HEIGHT as i32;

type Words = [u16; SPRITE_PIXELS];
type Bytes = [u8; SPRITE_PIXELS * 2];

// =============================================================================
// Poses
// =============================================================================

/// Limb end points for one frame. The figure is centered on x = 13.
#[derive(Clone, Copy)]
struct Pose {
    /// Horizontal lean of the upper body.
    lean: i32,
    /// Vertical bounce of the whole body.
    bob: i32,
    hands: [(i32, i32); 2],
    feet: [(i32, i32); 2],
    scarf: bool,
}

const WALK: [Pose; 3] = [
    Pose {
        lean: 0,
        bob: 0,
        hands: [(9, 22), (17, 22)],
        feet: [(8, 39), (18, 39)],
        scarf: false,
    },
    Pose {
        lean: 0,
        bob: -1,
        hands: [(12, 23), (14, 23)],
        feet: [(12, 39), (15, 39)],
        scarf: false,
    },
    Pose {
        lean: 0,
        bob: 0,
        hands: [(17, 22), (9, 22)],
        feet: [(17, 39), (10, 39)],
        scarf: false,
    },
];

const RUN: [Pose; 4] = [
    Pose {
        lean: 2,
        bob: 0,
        hands: [(22, 14), (6, 22)],
        feet: [(24, 36), (3, 37)],
        scarf: true,
    },
    Pose {
        lean: 2,
        bob: -2,
        hands: [(19, 19), (10, 20)],
        feet: [(18, 38), (9, 33)],
        scarf: true,
    },
    Pose {
        lean: 2,
        bob: 0,
        hands: [(21, 18), (8, 17)],
        feet: [(20, 39), (6, 35)],
        scarf: true,
    },
    Pose {
        lean: 2,
        bob: -1,
        hands: [(16, 22), (12, 16)],
        feet: [(14, 39), (12, 32)],
        scarf: true,
    },
];

// =============================================================================
// Const Rasteriser
// =============================================================================

const fn plot(
    buf: &mut Words,
    x: i32,
    y: i32,
    color: u16,
) {
    if x >= 0 && x < W && y >= 0 && y < H {
        buf[(y * W + x) as usize] = color;
    }
}

/// Bresenham line, both end points inclusive.
const fn line(
    buf: &mut Words,
    from: (i32, i32),
    to: (i32, i32),
    color: u16,
) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(buf, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

const fn disc(
    buf: &mut Words,
    center: (i32, i32),
    radius: i32,
    color: u16,
) {
    let mut dy = -radius;
    while dy <= radius {
        let mut dx = -radius;
        while dx <= radius {
            if dx * dx + dy * dy <= radius * radius {
                plot(buf, center.0 + dx, center.1 + dy, color);
            }
            dx += 1;
        }
        dy += 1;
    }
}

const fn figure(pose: Pose) -> Words {
    let mut buf = [RAW_BACKGROUND; SPRITE_PIXELS];

    let neck = (13 + pose.lean, 13 + pose.bob);
    let hip = (13, 26 + pose.bob);
    let shoulder = (neck.0, neck.1 + 2);

    disc(&mut buf, (neck.0, 7 + pose.bob), 5, RAW_HEAD);

    // Torso is two pixels wide
    line(&mut buf, neck, hip, RAW_BODY);
    line(&mut buf, (neck.0 + 1, neck.1), (hip.0 + 1, hip.1), RAW_BODY);

    line(&mut buf, shoulder, pose.hands[0], RAW_BODY);
    line(&mut buf, shoulder, pose.hands[1], RAW_BODY);
    line(&mut buf, hip, pose.feet[0], RAW_BODY);
    line(&mut buf, hip, pose.feet[1], RAW_BODY);

    if pose.scarf {
        line(&mut buf, (neck.0 - 1, neck.1), (neck.0 - 8, neck.1 - 2 - pose.bob), RAW_ACCENT);
        line(&mut buf, (neck.0 - 1, neck.1 + 1), (neck.0 - 7, neck.1 - pose.bob), RAW_ACCENT);
    }

    buf
}

const fn to_be_bytes(words: &Words) -> Bytes {
    let mut bytes = [0u8; SPRITE_PIXELS * 2];
    let mut i = 0;
    while i < SPRITE_PIXELS {
        let [hi, lo] = words[i].to_be_bytes();
        bytes[2 * i] = hi;
        bytes[2 * i + 1] = lo;
        i += 1;
    }
    bytes
}

// =============================================================================
// Running (native words)
// =============================================================================

static RUN_0: Words = figure(RUN[0]);
static RUN_1: Words = figure(RUN[1]);
static RUN_2: Words = figure(RUN[2]);
static RUN_3: Words = figure(RUN[3]);

static RUNNING_FRAMES: [SpriteFrame; 4] = [
    SpriteFrame::from_words(SPRITE_WIDTH, SPRITE_HEIGHT, &RUN_0),
    SpriteFrame::from_words(SPRITE_WIDTH, SPRITE_HEIGHT, &RUN_1),
    SpriteFrame::from_words(SPRITE_WIDTH, SPRITE_HEIGHT, &RUN_2),
    SpriteFrame::from_words(SPRITE_WIDTH, SPRITE_HEIGHT, &RUN_3),
];

/// Steady-state animation shown under the clock.
pub static RUNNING: SpriteSequence = SpriteSequence::new("running", &RUNNING_FRAMES);

// =============================================================================
// Loading (big-endian bytes)
// =============================================================================

static WALK_0: Bytes = to_be_bytes(&figure(WALK[0]));
static WALK_1: Bytes = to_be_bytes(&figure(WALK[1]));
static WALK_2: Bytes = to_be_bytes(&figure(WALK[2]));

static LOADING_FRAMES: [SpriteFrame; 3] = [
    SpriteFrame::from_be_bytes(SPRITE_WIDTH, SPRITE_HEIGHT, &WALK_0),
    SpriteFrame::from_be_bytes(SPRITE_WIDTH, SPRITE_HEIGHT, &WALK_1),
    SpriteFrame::from_be_bytes(SPRITE_WIDTH, SPRITE_HEIGHT, &WALK_2),
];

/// Start-up animation shown while waiting for the link.
pub static LOADING: SpriteSequence = SpriteSequence::new("loading", &LOADING_FRAMES);

// =============================================================================
// Tests
// =============================================================================
