//! Two-dimensional points and displacement vectors.

use std::ops::Add;

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use serde::{Deserialize, Serialize};

/// A 2D value used both as a location and as a per-tick velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector of length `magnitude` pointing at `angle` radians.
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self {
            x: angle.cos() * magnitude,
            y: angle.sin() * magnitude,
        }
    }

    /// Returns the componentwise sum of `self` and `other`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Euclidean distance between two points.
    ///
    /// Symmetric, and zero for identical points.
    pub fn distance(self, other: Self) -> f64 {
        Euclidean.distance(Point::from(self), Point::from(other))
    }

    /// Length of the vector.
    pub fn magnitude(self) -> f64 {
        self.distance(Self::default())
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector2::add(self, other)
    }
}

impl From<Vector2> for Point<f64> {
    fn from(v: Vector2) -> Self {
        Point::new(v.x, v.y)
    }
}
