//! Explosion lifecycle management.
//!
//! An explosion is born when an accepted interaction spawns it, stays in the
//! active set for a fixed display duration, and is then retired and dropped.
//! The set is bounded: while it is full, further spawn requests are silently
//! ignored — they are not queued.
//!
//! Retirement deadlines are plain data stored on each entry and swept by
//! [`Explosions::retire_expired`] on the frame tick. Dropping the set drops
//! every entry and its deadline with it, so nothing can fire after teardown.
//!
//! ```ignore
//! let mut explosions = Explosions::new(2, Duration::from_millis(3000), BurstConfig::default());
//! let now = Instant::now();
//! if let Some(id) = explosions.spawn(Vec2::new(120.0, 80.0), now) {
//!     // accepted: play the pop, render explosions.iter() until it retires
//! }
//! ```

use crate::burst::{Anchor, Burst, BurstConfig, Spark};
use crate::spawn::SpawnContext;
use glam::Vec2;
use std::time::{Duration, Instant};

/// One active explosion: an id, an origin, a retirement deadline and the
/// spark batch drawn for it at spawn time.
#[derive(Debug)]
pub struct Explosion {
    id: u64,
    origin: Vec2,
    spawned_at: Instant,
    retire_at: Instant,
    sparks: Vec<Spark>,
}

impl Explosion {
    /// Unique, monotonically increasing id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Origin in surface-local pixel coordinates.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// When the explosion was spawned.
    pub fn spawned_at(&self) -> Instant {
        self.spawned_at
    }

    /// The explosion's own spark batch, drawn once at spawn.
    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }
}

/// Bounded set of concurrently active explosions.
pub struct Explosions {
    cap: usize,
    display: Duration,
    burst: BurstConfig,
    next_id: u64,
    active: Vec<Explosion>,
}

impl Explosions {
    /// Create an empty set with the given concurrency cap and display
    /// duration per explosion.
    pub fn new(cap: usize, display: Duration, burst: BurstConfig) -> Self {
        Self {
            cap,
            display,
            burst,
            next_id: 0,
            active: Vec::with_capacity(cap),
        }
    }

    /// Spawn a new explosion at `origin`.
    ///
    /// Returns the allocated id, or `None` when the set is at capacity — in
    /// which case nothing happens at all: no id is consumed, no entry is
    /// touched, no sound should be played by the caller.
    pub fn spawn(&mut self, origin: Vec2, now: Instant) -> Option<u64> {
        if self.active.len() >= self.cap {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let sparks = Burst::generate(&self.burst, Anchor::At(origin), SpawnContext::new(id)).collect();
        self.active.push(Explosion {
            id,
            origin,
            spawned_at: now,
            retire_at: now + self.display,
            sparks,
        });
        Some(id)
    }

    /// Retire every explosion whose deadline has passed.
    ///
    /// Removal is keyed by id, so entries retiring out of creation order
    /// (deadlines are independent) can never evict the wrong entry. Calling
    /// this repeatedly with the same `now` is a no-op after the first sweep.
    pub fn retire_expired(&mut self, now: Instant) {
        let expired: Vec<u64> = self
            .active
            .iter()
            .filter(|e| e.retire_at <= now)
            .map(|e| e.id)
            .collect();
        for id in expired {
            self.remove_by_id(id);
        }
    }

    fn remove_by_id(&mut self, id: u64) {
        self.active.retain(|e| e.id != id);
    }

    /// Number of currently active explosions.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no explosion is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The configured concurrency cap.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Iterate over the active explosions in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Explosion> {
        self.active.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cap: usize) -> Explosions {
        Explosions::new(cap, Duration::from_millis(3000), BurstConfig::default())
    }

    #[test]
    fn ids_are_sequential_in_arrival_order() {
        let mut ex = set(4);
        let t = Instant::now();
        assert_eq!(ex.spawn(Vec2::ZERO, t), Some(0));
        assert_eq!(ex.spawn(Vec2::ONE, t), Some(1));
        assert_eq!(ex.spawn(Vec2::ZERO, t), Some(2));
    }

    #[test]
    fn spawn_at_capacity_is_a_noop() {
        let mut ex = set(2);
        let t = Instant::now();
        ex.spawn(Vec2::ZERO, t);
        ex.spawn(Vec2::ZERO, t);

        assert_eq!(ex.spawn(Vec2::ZERO, t), None);
        assert_eq!(ex.len(), 2);
        // The rejected request must not burn an id either.
        ex.retire_expired(t + Duration::from_millis(3000));
        assert_eq!(ex.spawn(Vec2::ZERO, t), Some(2));
    }

    #[test]
    fn each_explosion_owns_an_independent_batch() {
        let mut ex = set(2);
        let t = Instant::now();
        ex.spawn(Vec2::ZERO, t);
        ex.spawn(Vec2::new(50.0, 50.0), t);

        let batches: Vec<&[Spark]> = ex.iter().map(|e| e.sparks()).collect();
        assert_eq!(batches[0].len(), 60);
        assert_eq!(batches[1].len(), 60);
        assert_ne!(batches[0], batches[1]);
    }

    #[test]
    fn retirement_removes_exactly_once() {
        let mut ex = set(2);
        let t = Instant::now();
        ex.spawn(Vec2::ZERO, t);

        let deadline = t + Duration::from_millis(3000);
        ex.retire_expired(deadline);
        assert!(ex.is_empty());
        // A second sweep at the same instant must not disturb anything.
        ex.retire_expired(deadline);
        assert!(ex.is_empty());
    }

    #[test]
    fn entries_retire_independently() {
        let mut ex = set(2);
        let t = Instant::now();
        ex.spawn(Vec2::ZERO, t);
        ex.spawn(Vec2::ZERO, t + Duration::from_millis(500));

        // Only the first has expired at t + 3000.
        ex.retire_expired(t + Duration::from_millis(3000));
        let remaining: Vec<u64> = ex.iter().map(|e| e.id()).collect();
        assert_eq!(remaining, vec![1]);

        ex.retire_expired(t + Duration::from_millis(3500));
        assert!(ex.is_empty());
    }

    #[test]
    fn capacity_scenario() {
        // cap 2; spawns at t=0, t=10ms, t=20ms: first two accepted, third
        // dropped; both retire at t=3000ms.
        let mut ex = set(2);
        let t = Instant::now();

        assert_eq!(ex.spawn(Vec2::ZERO, t), Some(0));
        assert_eq!(ex.spawn(Vec2::ZERO, t + Duration::from_millis(10)), Some(1));
        assert_eq!(ex.spawn(Vec2::ZERO, t + Duration::from_millis(20)), None);

        let active: Vec<u64> = ex.iter().map(|e| e.id()).collect();
        assert_eq!(active, vec![0, 1]);

        ex.retire_expired(t + Duration::from_millis(2999));
        assert_eq!(ex.len(), 2);

        ex.retire_expired(t + Duration::from_millis(3010));
        assert!(ex.is_empty());
    }
}
