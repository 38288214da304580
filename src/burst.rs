//! Burst particle field generation.
//!
//! A burst is a one-time radial explosion of heart sparks anchored at an
//! interaction point (or at the surface center for the static startup
//! batch). Generation is pure: all randomness comes from the
//! [`SpawnContext`] passed in, and nothing about timing or rendering leaks
//! in here.
//!
//! Batches are never shared. Every call to [`Burst::generate`] draws a fresh
//! independent batch; two explosions never see the same sparks.
//!
//! ```ignore
//! let batch = Burst::generate(&BurstConfig::default(), Anchor::At(origin), ctx);
//! let sparks: Vec<Spark> = batch.collect();
//! ```

use crate::spawn::SpawnContext;
use crate::visuals::{HeartColor, SparkSize, BURST_COLORS, SPARK_SIZES};
use glam::Vec2;
use std::ops::Range;

/// Where a particle batch is anchored on the interactive surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// The abstract surface center, resolved to pixels at render time.
    Center,
    /// A concrete point in surface-local pixel coordinates.
    At(Vec2),
}

/// Immutable trajectory and appearance parameters of one burst spark.
///
/// A spark travels `radius` pixels outward along `angle` over
/// `duration_secs`, starting `delay_secs` after its burst begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    /// Travel direction in radians, `[0, 2π)`.
    pub angle: f32,
    /// Total travel distance in pixels.
    pub radius: f32,
    /// Travel/fade animation length in seconds.
    pub duration_secs: f32,
    /// Start delay in seconds relative to the burst.
    pub delay_secs: f32,
    /// Tint tag.
    pub color: HeartColor,
    /// Base size tag.
    pub size: SparkSize,
}

/// Parameter ranges for burst generation.
#[derive(Debug, Clone)]
pub struct BurstConfig {
    /// Sparks per burst.
    pub count: u32,
    /// Radial travel distance range in pixels.
    pub radius: Range<f32>,
    /// Animation duration range in seconds.
    pub duration: Range<f32>,
    /// Maximum start delay in seconds (minimum is zero).
    pub delay_max: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 60,
            radius: 350.0..550.0,
            duration: 1.8..2.8,
            delay_max: 0.3,
        }
    }
}

/// Burst generation entry point.
pub struct Burst;

impl Burst {
    /// Generate one batch of sparks for `anchor`.
    ///
    /// Returns a lazy iterator yielding exactly `config.count` sparks. The
    /// iterator owns its context; dropping it part-way simply discards the
    /// undrawn remainder.
    pub fn generate(config: &BurstConfig, anchor: Anchor, ctx: SpawnContext) -> BurstParticles {
        BurstParticles {
            remaining: config.count,
            anchor,
            radius: config.radius.clone(),
            duration: config.duration.clone(),
            delay_max: config.delay_max,
            ctx,
        }
    }
}

/// Lazy, finite spark sequence for one burst.
pub struct BurstParticles {
    remaining: u32,
    anchor: Anchor,
    radius: Range<f32>,
    duration: Range<f32>,
    delay_max: f32,
    ctx: SpawnContext,
}

impl BurstParticles {
    /// The batch's anchor point.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }
}

impl Iterator for BurstParticles {
    type Item = Spark;

    fn next(&mut self) -> Option<Spark> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        Some(Spark {
            angle: self.ctx.random_angle(),
            radius: self.ctx.random_range(self.radius.start, self.radius.end),
            duration_secs: self.ctx.random_range(self.duration.start, self.duration.end),
            delay_secs: self.ctx.random_range(0.0, self.delay_max),
            color: *self.ctx.pick(&BURST_COLORS),
            size: *self.ctx.pick(&SPARK_SIZES),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BurstParticles {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn config() -> BurstConfig {
        BurstConfig::default()
    }

    #[test]
    fn yields_exactly_count_sparks() {
        let batch = Burst::generate(&config(), Anchor::Center, SpawnContext::from_seed(1));
        assert_eq!(batch.len(), 60);
        assert_eq!(batch.count(), 60);
    }

    #[test]
    fn sparks_are_within_configured_bounds() {
        let cfg = config();
        let batch = Burst::generate(&cfg, Anchor::Center, SpawnContext::from_seed(2));
        for spark in batch {
            assert!((0.0..TAU).contains(&spark.angle));
            assert!(cfg.radius.contains(&spark.radius));
            assert!(cfg.duration.contains(&spark.duration_secs));
            assert!((0.0..cfg.delay_max).contains(&spark.delay_secs));
        }
    }

    #[test]
    fn batches_draw_independently() {
        // Distinct seeds stand in for distinct explosion events; the batches
        // must not be copies of one another.
        let a: Vec<Spark> =
            Burst::generate(&config(), Anchor::Center, SpawnContext::from_seed(10)).collect();
        let b: Vec<Spark> =
            Burst::generate(&config(), Anchor::Center, SpawnContext::from_seed(11)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn anchor_is_carried_through() {
        let at = Anchor::At(glam::Vec2::new(12.0, 34.0));
        let batch = Burst::generate(&config(), at, SpawnContext::from_seed(3));
        assert_eq!(batch.anchor(), at);
    }

    #[test]
    fn custom_count_is_respected() {
        let cfg = BurstConfig {
            count: 7,
            ..BurstConfig::default()
        };
        let batch = Burst::generate(&cfg, Anchor::Center, SpawnContext::from_seed(4));
        assert_eq!(batch.count(), 7);
    }
}
