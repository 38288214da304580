//! Ambient decor: the floating background heart field.
//!
//! Generated once when the app comes up and never again — the field has no
//! lifecycle and reacts to nothing. Each heart loops forever through the
//! same rise-and-drift animation, offset by its own random delay, so the
//! field as a whole never visibly repeats.

use crate::spawn::SpawnContext;
use crate::visuals::{HeartColor, AMBIENT_COLORS};

const SIZE_MIN_PX: f32 = 40.0;
const SIZE_MAX_PX: f32 = 150.0;
const DRIFT_HALF_PX: f32 = 100.0;
const SCALE_MIN: f32 = 0.5;
const SCALE_MAX: f32 = 1.3;
const OPACITY_MIN: f32 = 0.1;
const OPACITY_MAX: f32 = 0.4;
const OPACITY_DAMP: f32 = 0.9;
const ROT_START_HALF_DEG: f32 = 20.0;
const ROT_END_HALF_DEG: f32 = 45.0;
const DURATION_MIN_SECS: f32 = 8.0;
const DURATION_MAX_SECS: f32 = 20.0;
const DELAY_MAX_SECS: f32 = 20.0;

/// Randomized parameters of one floating background heart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientHeart {
    /// Base quad width in pixels.
    pub size_px: f32,
    /// Horizontal start position as a fraction of the window width.
    pub start_x: f32,
    /// Total horizontal drift over one loop, in pixels.
    pub drift_px: f32,
    /// Size multiplier on top of `size_px`.
    pub scale: f32,
    /// Peak opacity.
    pub opacity: f32,
    /// Rotation at the start of a loop, radians.
    pub rot_start: f32,
    /// Rotation at the end of a loop, radians.
    pub rot_end: f32,
    /// Loop length in seconds.
    pub duration_secs: f32,
    /// Start delay in seconds.
    pub delay_secs: f32,
    /// Tint tag.
    pub color: HeartColor,
}

/// Ambient field generation entry point.
pub struct AmbientField;

impl AmbientField {
    /// Generate `count` floating hearts.
    pub fn generate(count: u32, mut ctx: SpawnContext) -> Vec<AmbientHeart> {
        (0..count)
            .map(|_| AmbientHeart {
                size_px: ctx.random_range(SIZE_MIN_PX, SIZE_MAX_PX),
                start_x: ctx.random(),
                drift_px: ctx.random_spread(DRIFT_HALF_PX),
                scale: ctx.random_range(SCALE_MIN, SCALE_MAX),
                opacity: ctx.random_range(OPACITY_MIN, OPACITY_MAX) * OPACITY_DAMP,
                rot_start: ctx.random_spread(ROT_START_HALF_DEG).to_radians(),
                rot_end: ctx.random_spread(ROT_END_HALF_DEG).to_radians(),
                duration_secs: ctx.random_range(DURATION_MIN_SECS, DURATION_MAX_SECS),
                delay_secs: ctx.random_range(0.0, DELAY_MAX_SECS),
                color: *ctx.pick(&AMBIENT_COLORS),
            })
            .collect()
    }
}
