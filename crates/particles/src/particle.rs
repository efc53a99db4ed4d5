//! A single simulated particle.

use crate::math::Vector3;

/// Point particle. Alive while `life > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector3,
    pub velocity: Vector3,
    /// Remaining lifetime in seconds.
    pub life: f64,
    /// Glyph drawn by the ASCII rasterizers.
    pub glyph: char,
}

impl Particle {
    /// A particle with zero life; the owning system assigns its lifetime.
    pub fn new(position: Vector3, velocity: Vector3, glyph: char) -> Self {
        Self {
            position,
            velocity,
            life: 0.0,
            glyph,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}
