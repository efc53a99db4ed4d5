//! Particle subsystem - emission and stochastic motion
//!
//! Particles are plain points: they have a position, a velocity, a remaining
//! life and a glyph. A [`ParticleSystem`] owns one [`Emitter`] and a bounded
//! pool of live particles, and advances them with [`ParticleSystem::update`].
//!
//! # Update Order
//!
//! 1. Accumulate `emission_rate * dt`.
//! 2. Spawn one particle per whole unit while below `max_particles`.
//! 3. Clamp the accumulator to at most `emission_rate`.
//! 4. For each particle: jitter velocity by uniform noise in
//!    `[-brownian_strength, brownian_strength] * dt` per axis, integrate
//!    position, decrement life.
//! 5. Drop particles with `life <= 0`.
//!
//! Simulation is deterministic for a given seed: the default random source is
//! the [`SimpleRng`] LCG, and any other [`rand::RngCore`] can be injected.
//!
//! # Example
//!
//! ```
//! use tui_render3d_particles::{ParticleConfig, ParticleSystem, SphereEmitter};
//!
//! let mut sys = ParticleSystem::new(
//!     SphereEmitter::new(1.0, 0.5),
//!     ParticleConfig::default().with_emission_rate(30.0),
//! );
//! sys.update(0.1);
//! assert_eq!(sys.particles().len(), 3);
//! ```

pub mod emitter;
pub mod particle;
pub mod rng;
pub mod system;

pub use tui_render3d_math as math;

pub use emitter::{random_unit_vector, BoxEmitter, Emitter, PointEmitter, SphereEmitter};
pub use particle::Particle;
pub use rng::SimpleRng;
pub use system::{ParticleConfig, ParticleSystem, MAX_PREALLOCATED};
