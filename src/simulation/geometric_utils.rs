//! Arena geometry: bounds, wall reflection and random placement.

use serde::{Deserialize, Serialize};

use super::particle::Particle;
use super::rng::RandomSource;
use super::vector::Vector2;

/// Axis-aligned rectangle `[min_x, max_x] x [min_y, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub min_x: f64,
    /// Right edge.
    pub max_x: f64,
    /// Bottom edge.
    pub min_y: f64,
    /// Top edge.
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::centered(400.0, 400.0)
    }
}

impl Bounds {
    /// Creates a `width` by `height` rectangle centred on the origin.
    pub fn centered(width: f64, height: f64) -> Self {
        Self {
            min_x: -width / 2.0,
            max_x: width / 2.0,
            min_y: -height / 2.0,
            max_y: height / 2.0,
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns `true` if `point` lies inside or on the edge.
    pub fn contains(&self, point: Vector2) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// Bounces a particle off the arena walls.
///
/// Each axis is handled independently: a coordinate past an edge is clamped
/// to that edge and the matching velocity component is negated.
pub fn enforce_bounds(particle: &mut Particle, bounds: &Bounds) {
    let (location, velocity) = (&mut particle.location, &mut particle.velocity);

    if location.x > bounds.max_x {
        location.x = bounds.max_x;
        velocity.x = -velocity.x;
    }
    if location.x < bounds.min_x {
        location.x = bounds.min_x;
        velocity.x = -velocity.x;
    }
    if location.y > bounds.max_y {
        location.y = bounds.max_y;
        velocity.y = -velocity.y;
    }
    if location.y < bounds.min_y {
        location.y = bounds.min_y;
        velocity.y = -velocity.y;
    }
}

/// Draws a uniformly distributed location inside `bounds`.
pub fn random_location<R: RandomSource + ?Sized>(rng: &mut R, bounds: &Bounds) -> Vector2 {
    Vector2::new(
        bounds.min_x + rng.next_unit() * bounds.width(),
        bounds.min_y + rng.next_unit() * bounds.height(),
    )
}

/// Draws a vector of length `speed` at a uniform angle in `[0, 2π)`.
pub fn random_direction<R: RandomSource + ?Sized>(rng: &mut R, speed: f64) -> Vector2 {
    let angle = std::f64::consts::TAU * rng.next_unit();
    Vector2::from_polar(speed, angle)
}
