//! Integration tests for the explosion lifecycle and burst generation.
//!
//! These exercise the public API end to end: the dispatcher-facing spawn
//! path, capacity behavior under a rapid series of interactions, and timed
//! retirement — all with explicit instants, no sleeping.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use heartburst::prelude::*;

fn explosions(cap: usize) -> Explosions {
    Explosions::new(cap, Duration::from_millis(3000), BurstConfig::default())
}

#[test]
fn rapid_interactions_respect_the_cap() {
    // cap = 2; interactions at t=0, t=10ms, t=20ms: ids 0 and 1 accepted,
    // the third dropped; at t=3000ms both are retired.
    let mut ex = explosions(2);
    let t0 = Instant::now();

    assert_eq!(ex.spawn(Vec2::new(10.0, 10.0), t0), Some(0));
    assert_eq!(
        ex.spawn(Vec2::new(20.0, 20.0), t0 + Duration::from_millis(10)),
        Some(1)
    );
    assert_eq!(
        ex.spawn(Vec2::new(30.0, 30.0), t0 + Duration::from_millis(20)),
        None
    );

    let ids: Vec<u64> = ex.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec![0, 1]);

    ex.retire_expired(t0 + Duration::from_millis(3000));
    assert!(ex.is_empty());
}

#[test]
fn ids_stay_strictly_increasing_across_retirements() {
    let mut ex = explosions(2);
    let mut t = Instant::now();
    let mut last_id = None;

    // Fill, retire, refill, several times over; every accepted spawn must
    // beat every id seen before it.
    for round in 0..5 {
        while let Some(id) = ex.spawn(Vec2::ZERO, t) {
            if let Some(prev) = last_id {
                assert!(id > prev, "round {}: id {} not above {}", round, id, prev);
            }
            last_id = Some(id);
        }
        t += Duration::from_millis(3000);
        ex.retire_expired(t);
        assert!(ex.is_empty());
    }
}

#[test]
fn retirement_happens_exactly_once() {
    let mut ex = explosions(1);
    let t0 = Instant::now();
    ex.spawn(Vec2::ZERO, t0);

    for ms in [3000, 3000, 4000, 10_000] {
        ex.retire_expired(t0 + Duration::from_millis(ms));
        assert!(ex.is_empty());
    }

    // The slot is free again and ids continue from where they left off.
    assert_eq!(ex.spawn(Vec2::ZERO, t0 + Duration::from_millis(10_001)), Some(1));
}

#[test]
fn pending_retirements_die_with_the_set() {
    // Teardown before the deadline: dropping the set is all it takes; the
    // deadline is data inside the entry, so nothing can fire afterwards.
    let mut ex = explosions(2);
    ex.spawn(Vec2::ZERO, Instant::now());
    assert_eq!(ex.len(), 1);
    drop(ex);
}

#[test]
fn origins_are_preserved_per_explosion() {
    let mut ex = explosions(2);
    let t = Instant::now();
    ex.spawn(Vec2::new(11.0, 22.0), t);
    ex.spawn(Vec2::new(33.0, 44.0), t);

    let origins: Vec<Vec2> = ex.iter().map(|e| e.origin()).collect();
    assert_eq!(origins, vec![Vec2::new(11.0, 22.0), Vec2::new(33.0, 44.0)]);
}

#[test]
fn generated_batches_obey_the_configured_ranges() {
    let cfg = BurstConfig::default();
    let sparks: Vec<Spark> =
        Burst::generate(&cfg, Anchor::Center, SpawnContext::from_seed(1234)).collect();

    assert_eq!(sparks.len(), cfg.count as usize);
    for spark in &sparks {
        assert!((0.0..TAU).contains(&spark.angle));
        assert!(cfg.radius.contains(&spark.radius));
        assert!(cfg.duration.contains(&spark.duration_secs));
        assert!((0.0..cfg.delay_max).contains(&spark.delay_secs));
    }
}

#[test]
fn dispatch_path_feeds_the_lifecycle() {
    // No press this frame means nothing reaches the lifecycle.
    let input = Input::new();
    let rect = SurfaceRect {
        min: Vec2::new(448.0, 168.0),
        size: Vec2::new(384.0, 384.0),
    };
    assert_eq!(press_local(&input, Some(rect)), None);

    // A dispatched origin is stored by the lifecycle verbatim.
    let origin = Vec2::new(192.0, 192.0);
    let mut ex = explosions(2);
    let id = ex.spawn(origin, Instant::now()).expect("below cap");
    assert_eq!(ex.iter().find(|e| e.id() == id).unwrap().origin(), origin);
}
