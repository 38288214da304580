//! Print one seeded burst batch, for eyeballing generation parameters
//! without opening a window.
//!
//! Run with: `cargo run --example burst_dump`

use heartburst::prelude::*;

fn main() {
    let batch = Burst::generate(
        &BurstConfig::default(),
        Anchor::Center,
        SpawnContext::from_seed(7),
    );

    for (i, spark) in batch.enumerate() {
        println!(
            "{i:2}: angle {:5.2} rad  radius {:5.1} px  {:.2}s +{:.2}s  {:?} {:?}",
            spark.angle, spark.radius, spark.duration_secs, spark.delay_secs, spark.color, spark.size
        );
    }
}
