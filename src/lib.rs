//! # Contagion - Agent-Based Epidemic Simulation
//!
//! A population of point-particles drifts through a bounded 2D arena. Particles
//! that come within a contact radius of each other can transmit a disease that
//! progresses from vulnerable to infected to immune.
//!
//! ## Features
//!
//! - Constant-velocity motion with elastic reflection off the arena walls
//! - Exhaustive pairwise contact detection every tick
//! - Explicit disease state machine (`Vulnerable`, `Infected { age }`, `Immune`)
//! - Sequential or rayon-parallel snapshot contact resolution
//! - Seeded construction for reproducible runs
//! - JSON-configurable parameters
//!
//! ## Core Modules
//!
//! - [`simulation::model`] - Main simulation loop
//! - [`simulation::particle`] - Particle motion and infection queries
//! - [`simulation::disease`] - Disease state machine
//! - [`simulation::contacts`] - Pairwise contact resolution
//! - [`simulation::params`] - Simulation parameters
//!
//! ## Example
//!
//! ```
//! use contagion::simulation::model::Simulation;
//! use contagion::simulation::params::Params;
//!
//! let mut sim = Simulation::with_seed(Params::default(), 50, 5.0, 1, 0, 7).unwrap();
//! sim.run(1_000);
//! assert_eq!(sim.census().total(), 50);
//! ```

/// Crate-wide error type.
pub mod error;

/// Core simulation logic and data structures.
pub mod simulation {
    /// Pairwise contact detection and disease transmission.
    pub mod contacts;
    /// Disease progression states.
    pub mod disease;
    /// Bounded log of recent infections and recoveries.
    pub mod event_log;
    /// Arena bounds, wall reflection and random placement.
    pub mod geometric_utils;
    /// The simulation: population, clock and per-tick update.
    pub mod model;
    /// Simulation parameters.
    pub mod params;
    /// Disease-carrying particles.
    pub mod particle;
    /// Injected randomness for initial placement.
    pub mod rng;
    /// Two-dimensional vectors.
    pub mod vector;
}

pub use error::{Error, Result};
pub use simulation::disease::{Classification, DiseaseState};
pub use simulation::model::{Census, Simulation};
pub use simulation::params::Params;
pub use simulation::particle::Particle;
pub use simulation::vector::Vector2;
