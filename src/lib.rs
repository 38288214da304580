//! # heartburst
//!
//! An animated heart-fireworks greeting: a slow-breathing gradient backdrop,
//! a field of floating hearts, and a center heart that bursts into sparks
//! wherever you click or tap — with a pop per burst and a looping melody.
//!
//! ## Quick Start
//!
//! ```ignore
//! use heartburst::prelude::*;
//!
//! fn main() -> Result<(), GreetingError> {
//!     Greeting::new()
//!         .with_ambient_count(40)
//!         .with_max_explosions(2)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Descriptors
//!
//! Everything that moves is described once, at spawn time, by an immutable
//! bundle of randomized parameters: a [`Spark`] for a burst fragment, an
//! [`AmbientHeart`] for a background heart. Frame-by-frame motion is a pure
//! function of descriptor and elapsed time ([`anim`]).
//!
//! ### Explosions
//!
//! Clicking the center region spawns an explosion: an id, an origin and a
//! freshly drawn spark batch, kept in a bounded active set ([`Explosions`])
//! and retired automatically after a fixed display duration. While the set
//! is at its cap, further clicks are dropped — never queued.
//!
//! ### Best-effort audio
//!
//! Sound never gets in the way: if the output device is missing or playback
//! fails, the greeting logs once and runs silently ([`AudioPlayer`]).

pub mod ambient;
pub mod anim;
pub mod audio;
pub mod burst;
mod error;
mod gpu;
mod greeting;
pub mod interact;
pub mod lifecycle;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use ambient::{AmbientField, AmbientHeart};
pub use anim::{Ease, Placement};
pub use audio::AudioPlayer;
pub use burst::{Anchor, Burst, BurstConfig, BurstParticles, Spark};
pub use error::{GpuError, GreetingError};
pub use glam::{Vec2, Vec3};
pub use greeting::Greeting;
pub use interact::{press_local, Input, SurfaceRect};
pub use lifecycle::{Explosion, Explosions};
pub use spawn::SpawnContext;
pub use visuals::{HeartColor, SparkSize};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use heartburst::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ambient::{AmbientField, AmbientHeart};
    pub use crate::anim::{Ease, Placement};
    pub use crate::audio::AudioPlayer;
    pub use crate::burst::{Anchor, Burst, BurstConfig, Spark};
    pub use crate::error::GreetingError;
    pub use crate::greeting::Greeting;
    pub use crate::interact::{press_local, Input, SurfaceRect};
    pub use crate::lifecycle::{Explosion, Explosions};
    pub use crate::spawn::SpawnContext;
    pub use crate::time::Time;
    pub use crate::visuals::{HeartColor, SparkSize};
    pub use crate::{Vec2, Vec3};
}
