//! Fixed-capacity particle pool with rate-based emission and Brownian motion.

use std::fmt;

use rand::{Rng, RngCore};

use crate::emitter::Emitter;
use crate::math::Vector3;
use crate::particle::Particle;
use crate::rng::SimpleRng;

/// Largest pool reserved up front. Larger caps grow the pool on demand.
pub const MAX_PREALLOCATED: usize = 4096;

/// Particle system configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    /// Hard cap on live particles. At most [`MAX_PREALLOCATED`] slots are
    /// reserved when the system is built.
    pub max_particles: usize,
    /// Particles spawned per second.
    pub emission_rate: f64,
    /// Lifetime of each particle in seconds.
    pub particle_lifetime: f64,
    /// Per-axis velocity noise amplitude (units per second squared).
    pub brownian_strength: f64,
    /// Seed of the default [`SimpleRng`] source.
    pub seed: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: 256,
            emission_rate: 20.0,
            particle_lifetime: 2.0,
            brownian_strength: 0.5,
            seed: 1,
        }
    }
}

impl ParticleConfig {
    pub fn with_max_particles(mut self, max: usize) -> Self {
        self.max_particles = max;
        self
    }

    pub fn with_emission_rate(mut self, rate: f64) -> Self {
        self.emission_rate = rate;
        self
    }

    pub fn with_lifetime(mut self, seconds: f64) -> Self {
        self.particle_lifetime = seconds;
        self
    }

    pub fn with_brownian_strength(mut self, strength: f64) -> Self {
        self.brownian_strength = strength;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

/// Owns an emitter, a bounded pool of live particles and the emission accumulator.
pub struct ParticleSystem {
    emitter: Box<dyn Emitter>,
    config: ParticleConfig,
    particles: Vec<Particle>,
    accumulator: f64,
    rng: Box<dyn RngCore + Send>,
}

impl fmt::Debug for ParticleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParticleSystem")
            .field("emitter", &self.emitter)
            .field("config", &self.config)
            .field("live", &self.particles.len())
            .field("accumulator", &self.accumulator)
            .finish_non_exhaustive()
    }
}

impl ParticleSystem {
    /// Create a system driven by a [`SimpleRng`] seeded from `config.seed`.
    pub fn new(emitter: impl Emitter + 'static, config: ParticleConfig) -> Self {
        let rng = SimpleRng::new(config.seed);
        Self::with_rng(emitter, config, rng)
    }

    /// Create a system driven by any random source.
    pub fn with_rng(
        emitter: impl Emitter + 'static,
        config: ParticleConfig,
        rng: impl RngCore + Send + 'static,
    ) -> Self {
        Self {
            emitter: Box::new(emitter),
            particles: Vec::with_capacity(config.max_particles.min(MAX_PREALLOCATED)),
            config,
            accumulator: 0.0,
            rng: Box::new(rng),
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Spawns `emission_rate * dt` particles (carrying fractions over between
    /// calls, never exceeding capacity), jitters and integrates every live
    /// particle, and drops the ones whose life ran out. Non-positive or
    /// non-finite `dt` is ignored.
    pub fn update(&mut self, dt: f64) {
        if !(dt > 0.0 && dt.is_finite()) {
            log::debug!("particle update ignored: dt={dt}");
            return;
        }

        self.accumulator += self.config.emission_rate * dt;
        let mut spawned = 0usize;
        while self.accumulator >= 1.0 && self.particles.len() < self.config.max_particles {
            let mut p = self.emitter.emit(self.rng.as_mut());
            p.life = self.config.particle_lifetime;
            self.particles.push(p);
            self.accumulator -= 1.0;
            spawned += 1;
        }
        // A stalled or saturated system must not burst on resume.
        self.accumulator = self.accumulator.min(self.config.emission_rate);

        let strength = self.config.brownian_strength;
        for p in &mut self.particles {
            let noise = Vector3::new(
                signed_unit(self.rng.as_mut()),
                signed_unit(self.rng.as_mut()),
                signed_unit(self.rng.as_mut()),
            );
            p.velocity += noise * (strength * dt);
            p.position += p.velocity * dt;
            p.life -= dt;
        }

        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        log::trace!(
            "particle tick: dt={dt:.4} spawned={spawned} expired={} live={}",
            before - self.particles.len(),
            self.particles.len()
        );
    }

    /// Remove every particle and clear the emission accumulator.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.accumulator = 0.0;
    }

    /// Live particles in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Fractional particles owed to the next update.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn emitter(&self) -> &dyn Emitter {
        self.emitter.as_ref()
    }
}

/// Uniform value in `[-1, 1]`.
fn signed_unit(rng: &mut dyn RngCore) -> f64 {
    rng.random_range(-1.0..=1.0)
}
