//! Closed-form animation evaluation.
//!
//! All motion in the greeting is parametric: a descriptor plus the time
//! since its animation began fully determines where a heart is, how big it
//! is and how opaque it is. Evaluation happens on the CPU once per frame
//! per heart and feeds the instance buffer; nothing here touches the GPU.
//!
//! Three programs exist:
//! - burst sparks fly outward from their anchor, eased, and fade out once;
//! - ambient hearts rise from below the window to above it on an endless
//!   loop, drifting and rotating as they go;
//! - the center heart pops up once at startup and then pulses gently.

use crate::ambient::AmbientHeart;
use crate::burst::Spark;
use crate::visuals::CENTER_HEART_COLOR;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Easing applied to normalized progress in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ease {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Stronger ease-out used by the burst travel: fast launch, long glide.
    EaseOutCubic,
}

impl Ease {
    /// Apply the easing to a linear factor `t` in `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Ease::Linear => t,
            Ease::EaseIn => t * t,
            Ease::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Where and how to draw one heart sprite this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Center position in window pixels.
    pub pos: Vec2,
    /// Quad width in pixels.
    pub size_px: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// sRGB tint.
    pub color: Vec3,
    /// Opacity, 0–1.
    pub alpha: f32,
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Evaluate a burst spark `elapsed` seconds after its burst spawned.
///
/// Returns `None` once the spark's animation has completed — a finished
/// spark stays invisible rather than snapping back to its anchor.
pub fn burst_spark(spark: &Spark, anchor_px: Vec2, elapsed: f32) -> Option<Placement> {
    let local = elapsed - spark.delay_secs;
    let t = (local / spark.duration_secs).max(0.0);
    if t >= 1.0 {
        return None;
    }

    let eased = Ease::EaseOutCubic.apply(t);
    let dir = Vec2::new(spark.angle.cos(), spark.angle.sin());

    Some(Placement {
        pos: anchor_px + dir * spark.radius * eased,
        size_px: spark.size.px(),
        rotation: 0.0,
        color: spark.color.rgb(),
        alpha: 1.0 - Ease::EaseIn.apply(t),
    })
}

/// Fraction of an ambient loop spent fading in (and again fading out).
const AMBIENT_FADE_FRACTION: f32 = 0.1;

/// Evaluate an ambient heart at `elapsed` seconds since startup.
///
/// `None` while the heart's start delay has not passed. After that the
/// animation loops with period `duration_secs` forever.
pub fn ambient_heart(heart: &AmbientHeart, window: Vec2, elapsed: f32) -> Option<Placement> {
    let local = elapsed - heart.delay_secs;
    if local < 0.0 {
        return None;
    }

    let t = (local / heart.duration_secs).fract();
    let eased = Ease::EaseInOut.apply(t);

    let size = heart.size_px * heart.scale;
    let start_y = window.y + size;
    let end_y = -size;
    let base_x = heart.start_x * window.x;

    let fade_in = (t / AMBIENT_FADE_FRACTION).min(1.0);
    let fade_out = ((1.0 - t) / AMBIENT_FADE_FRACTION).min(1.0);

    Some(Placement {
        pos: Vec2::new(base_x + heart.drift_px * eased, lerp(start_y, end_y, eased)),
        size_px: size,
        rotation: lerp(heart.rot_start, heart.rot_end, t),
        color: heart.color.rgb(),
        alpha: heart.opacity * fade_in.min(fade_out),
    })
}

/// Seconds the center heart takes to pop up to full size.
const CENTER_POP_SECS: f32 = 3.0;
/// Period of the resting pulse after the pop, seconds.
const CENTER_PULSE_SECS: f32 = 3.0;
/// Pulse amplitude as a fraction of the base size.
const CENTER_PULSE_AMPLITUDE: f32 = 0.04;

/// Evaluate the big center heart at `elapsed` seconds since startup.
///
/// Grows from nothing over the pop phase, then settles into a gentle
/// endless pulse.
pub fn center_heart(center_px: Vec2, surface_side_px: f32, elapsed: f32) -> Placement {
    let base = surface_side_px * 0.85;
    let t = (elapsed / CENTER_POP_SECS).min(1.0);
    let pop = Ease::EaseOutCubic.apply(t);

    let pulse = if elapsed > CENTER_POP_SECS {
        let phase = (elapsed - CENTER_POP_SECS) / CENTER_PULSE_SECS;
        1.0 + CENTER_PULSE_AMPLITUDE * (phase * 2.0 * PI).sin()
    } else {
        1.0
    };

    Placement {
        pos: center_px,
        size_px: base * pop * pulse,
        rotation: 0.0,
        color: CENTER_HEART_COLOR,
        alpha: 0.9 * pop,
    }
}
