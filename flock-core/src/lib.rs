//! Emergent flocking on a toroidal plane.
//!
//! A population of boids moves over a rectangular domain whose opposite
//! edges are identified, so motion off one edge reappears on the other and
//! every neighbor test measures against the nearest periodic image of the
//! other boid, not its raw coordinates. Each tick combines the three classic
//! rules (separation, alignment, cohesion) with any externally injected
//! steering forces, integrates, and wraps.
//!
//! The crate simulates only: rendering, input handling and export are
//! collaborators that read [`Flock::snapshot`] or attach a
//! [`WrapObserver`] such as [`TrailRecorder`].
//!
//! ```
//! use flock_core::{BoidSettings, Domain, Flock, JitterSpec, Placement, SimConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let domain = Domain::new(800.0, 600.0).unwrap();
//! let mut flock = Flock::new(domain, SimConfig::default());
//! let mut rng = StdRng::seed_from_u64(1);
//! flock
//!     .populate(
//!         &mut rng,
//!         50,
//!         &Placement::UniformRandom,
//!         &BoidSettings::default(),
//!         Some(&JitterSpec::default()),
//!     )
//!     .unwrap();
//! flock.tick();
//! assert_eq!(flock.snapshot().boids.len(), 50);
//! ```

pub mod boid;
pub mod config;
pub mod error;
pub mod flock;
pub mod jitter;
pub mod observer;
pub mod placement;
pub mod rules;
pub mod steering;
pub mod torus;
pub mod vector;

pub use boid::Boid;
pub use config::SimConfig;
pub use error::ConfigError;
pub use flock::Flock;
pub use jitter::JitterSpec;
pub use observer::{Edge, TrailRecorder, WrapCrossing, WrapObserver};
pub use placement::Placement;
pub use steering::ARRIVAL_RADIUS;
pub use torus::{nearest_image, toroidal_distance, Domain, Zone};
pub use vector::Vector2;

pub use flock_shared::{BoidSettings, BoidState, FlockSnapshot, Position, SettingsError};
