//! Emission strategies.
//!
//! Each emitter maps a random source to one freshly spawned particle: a
//! position, an initial velocity and a glyph from the emitter's palette. The
//! owning [`crate::ParticleSystem`] assigns the lifetime.

use std::f64::consts::TAU;
use std::fmt;

use rand::{Rng, RngCore};

use crate::math::Vector3;
use crate::particle::Particle;

const POINT_PALETTE: [char; 4] = ['*', '+', '.', 'o'];
const BOX_PALETTE: [char; 4] = ['#', '+', ':', '.'];
const SPHERE_PALETTE: [char; 4] = ['o', '*', '.', '\''];

/// A particle spawning strategy.
pub trait Emitter: fmt::Debug + Send {
    fn emit(&self, rng: &mut dyn RngCore) -> Particle;
}

/// Uniformly distributed point on the unit sphere (inverse-CDF sampling).
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vector3 {
    let theta = TAU * rng.random::<f64>();
    let phi = (2.0 * rng.random::<f64>() - 1.0).clamp(-1.0, 1.0).acos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vector3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

fn pick_glyph(rng: &mut dyn RngCore, palette: &[char]) -> char {
    palette[rng.random_range(0..palette.len())]
}

/// Uniform value in `[-1, 1)`.
fn signed_unit(rng: &mut dyn RngCore) -> f64 {
    rng.random::<f64>() * 2.0 - 1.0
}

/// Spawns at a single point, moving in a random direction.
#[derive(Debug, Clone, PartialEq)]
pub struct PointEmitter {
    pub origin: Vector3,
    pub speed: f64,
}

impl PointEmitter {
    pub fn new(origin: Vector3, speed: f64) -> Self {
        Self { origin, speed }
    }
}

impl Default for PointEmitter {
    fn default() -> Self {
        Self::new(Vector3::ZERO, 1.0)
    }
}

impl Emitter for PointEmitter {
    fn emit(&self, rng: &mut dyn RngCore) -> Particle {
        let dir = random_unit_vector(rng);
        let glyph = pick_glyph(rng, &POINT_PALETTE);
        Particle::new(self.origin, dir * self.speed, glyph)
    }
}

/// Spawns on the surface of an origin-centered box, moving along the face normal.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxEmitter {
    pub half_extents: Vector3,
    pub speed: f64,
}

impl BoxEmitter {
    pub fn new(half_extents: Vector3, speed: f64) -> Self {
        Self { half_extents, speed }
    }
}

impl Default for BoxEmitter {
    fn default() -> Self {
        Self::new(Vector3::splat(0.5), 0.5)
    }
}

impl Emitter for BoxEmitter {
    fn emit(&self, rng: &mut dyn RngCore) -> Particle {
        let face = rng.random_range(0..6usize);
        let axis = face / 2;
        let sign = if face % 2 == 0 { 1.0 } else { -1.0 };

        let h = self.half_extents.to_array();
        let mut pos = [0.0; 3];
        let mut normal = [0.0; 3];
        for i in 0..3 {
            if i == axis {
                pos[i] = sign * h[i];
                normal[i] = sign;
            } else {
                pos[i] = signed_unit(rng) * h[i];
            }
        }

        let glyph = pick_glyph(rng, &BOX_PALETTE);
        Particle::new(
            Vector3::from_array(pos),
            Vector3::from_array(normal) * self.speed,
            glyph,
        )
    }
}

/// Spawns on the surface of an origin-centered sphere, moving outward.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereEmitter {
    pub radius: f64,
    pub speed: f64,
}

impl SphereEmitter {
    pub fn new(radius: f64, speed: f64) -> Self {
        Self { radius, speed }
    }
}

impl Default for SphereEmitter {
    fn default() -> Self {
        Self::new(1.0, 0.5)
    }
}

impl Emitter for SphereEmitter {
    fn emit(&self, rng: &mut dyn RngCore) -> Particle {
        let dir = random_unit_vector(rng);
        let glyph = pick_glyph(rng, &SPHERE_PALETTE);
        Particle::new(dir * self.radius, dir * self.speed, glyph)
    }
}
