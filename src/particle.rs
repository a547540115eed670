//! Simulation particle exchanged with the host
//!
//! A plain value: built with [`Particle::new`] and the `with_*` builders, or
//! deserialised from any subset of its fields, and dropped like any other
//! `Copy` type.

use serde::{Deserialize, Serialize};

/// A point mass in the plane
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Particle {
    pub id: u32,
    pub mass: f64,
    pub x: f64,
    pub y: f64,
}

impl Particle {
    /// Unit mass at the origin
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            mass: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(0)
    }
}
