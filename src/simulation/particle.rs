//! Disease-carrying particles.
//!
//! A particle drifts at constant velocity and carries a [`DiseaseState`].
//! The owning simulation moves it once per tick, reflects it off the arena
//! walls and resolves contacts with its neighbours.

use serde::{Deserialize, Serialize};

use super::disease::{Classification, DiseaseState};
use super::vector::Vector2;

/// A point-particle in the arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Current position.
    pub location: Vector2,
    /// Displacement applied every tick.
    pub velocity: Vector2,
    /// Disease progression.
    pub state: DiseaseState,
}

impl Particle {
    /// Creates a vulnerable particle.
    pub fn new(location: Vector2, velocity: Vector2) -> Self {
        Self {
            location,
            velocity,
            state: DiseaseState::Vulnerable,
        }
    }

    /// Moves the particle by its velocity and advances an infection.
    ///
    /// # Returns
    ///
    /// `true` if the particle became immune during this tick.
    pub fn tick(&mut self, recovery_period: u32) -> bool {
        self.location = self.location.add(self.velocity);
        let was_infected = self.is_infected();
        self.state = self.state.advance(recovery_period);
        was_infected && self.is_immune()
    }

    /// Infects the particle if it is vulnerable. No-op otherwise.
    pub fn contract_disease(&mut self) {
        if self.is_vulnerable() {
            self.state = DiseaseState::Infected { age: 0 };
        }
    }

    /// Makes the particle immune regardless of its current state.
    ///
    /// Only used when seeding a population.
    pub(crate) fn immunize(&mut self) {
        self.state = DiseaseState::Immune;
    }

    /// Returns `true` if the particle has never been infected.
    pub fn is_vulnerable(&self) -> bool {
        matches!(self.state, DiseaseState::Vulnerable)
    }

    /// Returns `true` if the particle is currently infectious.
    pub fn is_infected(&self) -> bool {
        matches!(self.state, DiseaseState::Infected { .. })
    }

    /// Returns `true` if the particle has recovered.
    pub fn is_immune(&self) -> bool {
        matches!(self.state, DiseaseState::Immune)
    }

    /// Exposes two particles to each other.
    ///
    /// Both transmission checks read the states held before the call, so
    /// `a.contact_with(b)` and `b.contact_with(a)` have the same effect.
    ///
    /// # Returns
    ///
    /// `true` if either particle was infected by the contact.
    pub fn contact_with(&mut self, other: &mut Particle) -> bool {
        let infects_self = self.is_vulnerable() && other.is_infected();
        let infects_other = other.is_vulnerable() && self.is_infected();
        if infects_self {
            self.contract_disease();
        }
        if infects_other {
            other.contract_disease();
        }
        infects_self || infects_other
    }

    /// Presentation class of the particle's state.
    pub fn color(&self) -> Classification {
        self.state.classification()
    }
}
