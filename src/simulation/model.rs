//! Main epidemic simulation.
//!
//! The simulation owns the population, the arena and the tick counter. Each
//! tick it:
//! - moves every particle and advances its infection
//! - reflects particles off the arena walls
//! - resolves every pairwise contact once, over post-move positions

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::contacts;
use super::disease::Classification;
use super::event_log::{EventLog, OutbreakEvent, OutbreakEventKind};
use super::geometric_utils::{self, Bounds};
use super::params::Params;
use super::particle::Particle;
use super::rng::{self, RandomSource};
use crate::error::{Error, Result};

/// Particle counts by classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    /// Particles that have never been infected.
    pub vulnerable: usize,
    /// Particles currently infectious.
    pub infected: usize,
    /// Recovered particles.
    pub immune: usize,
}

impl Census {
    /// Total number of particles counted.
    pub fn total(&self) -> usize {
        self.vulnerable + self.infected + self.immune
    }
}

/// The state of an epidemic simulation.
///
/// Population size is fixed for the lifetime of the simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// All particles, in construction order.
    pub population: Vec<Particle>,
    /// Ticks elapsed since construction.
    pub time: u64,
    params: Params,
    events: EventLog,
}

impl Simulation {
    /// Creates a population with random locations and directions.
    ///
    /// The first `initial_infected` particles start infected and the next
    /// `initial_immune` start immune; the rest are vulnerable.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if `params` fails [`Params::validate`], or if
    /// - `initial_infected` is zero or not below `population_size`
    /// - `initial_immune` is not below `population_size`
    /// - `initial_infected + initial_immune` exceeds `population_size`
    /// - `speed` is not finite
    ///
    /// # Arguments
    ///
    /// * `params` - Arena and disease parameters
    /// * `population_size` - Number of particles
    /// * `speed` - Magnitude of every initial velocity
    /// * `initial_infected` - Number of infected seeds, in `1..population_size`
    /// * `initial_immune` - Number of immune particles, below `population_size`
    /// * `rng` - Source for locations and directions
    pub fn new<R: RandomSource + ?Sized>(
        params: Params,
        population_size: usize,
        speed: f64,
        initial_infected: usize,
        initial_immune: usize,
        rng: &mut R,
    ) -> Result<Self> {
        params.validate()?;
        validate_counts(population_size, speed, initial_infected, initial_immune)?;

        let mut population = Vec::with_capacity(population_size);
        for i in 0..population_size {
            let location = geometric_utils::random_location(&mut *rng, &params.bounds);
            let velocity = geometric_utils::random_direction(&mut *rng, speed);
            let mut particle = Particle::new(location, velocity);

            if i < initial_infected {
                particle.contract_disease();
            } else if i < initial_infected + initial_immune {
                particle.immunize();
            }
            population.push(particle);
        }

        debug!(
            "created simulation: {} particles, {} infected, {} immune, speed {}",
            population_size, initial_infected, initial_immune, speed
        );

        Ok(Self {
            population,
            time: 0,
            events: EventLog::new(params.event_log_capacity),
            params,
        })
    }

    /// Same as [`Simulation::new`] with a reproducible generator for `seed`.
    pub fn with_seed(
        params: Params,
        population_size: usize,
        speed: f64,
        initial_infected: usize,
        initial_immune: usize,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = rng::seeded(seed);
        Self::new(params, population_size, speed, initial_infected, initial_immune, &mut rng)
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) {
        self.time += 1;

        let recovery_period = self.params.recovery_period;
        let bounds = self.params.bounds;
        for (i, particle) in self.population.iter_mut().enumerate() {
            if particle.tick(recovery_period) {
                trace!("t={} particle {} recovered", self.time, i);
                self.events.log(self.time, OutbreakEventKind::Recovery { particle: i });
            }
            geometric_utils::enforce_bounds(particle, &bounds);
        }

        self.check_contacts();

        trace!("t={} census {:?}", self.time, self.census());
    }

    /// Bounces `particle` off the walls of this simulation's arena.
    pub fn enforce_bounds(&self, particle: &mut Particle) {
        geometric_utils::enforce_bounds(particle, &self.params.bounds);
    }

    /// Resolves contacts between every pair of particles closer than the
    /// contact radius.
    pub fn check_contacts(&mut self) {
        let transmissions = contacts::resolve(
            &mut self.population,
            self.params.contact_radius,
            self.params.contact_mode,
        );
        for t in transmissions {
            trace!("t={} particle {} infected {}", self.time, t.source, t.target);
            self.events.log(
                self.time,
                OutbreakEventKind::Infection {
                    source: t.source,
                    target: t.target,
                },
            );
        }
    }

    /// Returns `true` once no particle is infected.
    pub fn is_complete(&self) -> bool {
        !self.population.iter().any(Particle::is_infected)
    }

    /// Ticks until the outbreak is over or `max_ticks` have run.
    ///
    /// # Returns
    ///
    /// The number of ticks performed by this call.
    pub fn run(&mut self, max_ticks: u64) -> u64 {
        let mut ticks = 0;
        while ticks < max_ticks && !self.is_complete() {
            self.tick();
            ticks += 1;
        }
        debug!(
            "run stopped at t={} after {} ticks, complete: {}",
            self.time,
            ticks,
            self.is_complete()
        );
        ticks
    }

    /// Counts particles by classification.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for particle in &self.population {
            match particle.color() {
                Classification::Neutral => census.vulnerable += 1,
                Classification::Sick => census.infected += 1,
                Classification::Recovered => census.immune += 1,
            }
        }
        census
    }

    /// Parameters this simulation was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Arena rectangle.
    pub fn bounds(&self) -> &Bounds {
        &self.params.bounds
    }

    /// Recent outbreak events, newest first.
    pub fn events(&self) -> impl Iterator<Item = &OutbreakEvent> {
        self.events.events().iter()
    }
}

fn validate_counts(
    population_size: usize,
    speed: f64,
    initial_infected: usize,
    initial_immune: usize,
) -> Result<()> {
    let reason = if initial_infected >= population_size {
        Some("initial_infected must be below population_size")
    } else if initial_infected == 0 {
        Some("initial_infected must be > 0")
    } else if initial_immune >= population_size {
        Some("initial_immune must be below population_size")
    } else if initial_infected + initial_immune > population_size {
        Some("initial_infected + initial_immune must not exceed population_size")
    } else if !speed.is_finite() {
        Some("speed must be finite")
    } else {
        None
    };

    match reason {
        Some(reason) => {
            warn!(
                "rejecting simulation of {} particles ({} infected, {} immune): {}",
                population_size, initial_infected, initial_immune, reason
            );
            Err(Error::InvalidConfiguration(reason.to_string()))
        }
        None => Ok(()),
    }
}
