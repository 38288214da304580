//! Minimal greeting with a few settings changed.
//!
//! Run with: `cargo run --example quick_start`

use std::time::Duration;

use heartburst::prelude::*;

fn main() -> Result<(), GreetingError> {
    Greeting::new()
        .with_ambient_count(60)
        .with_max_explosions(3)
        .with_display_duration(Duration::from_millis(2500))
        .run()
}
