//! Pairwise contact resolution.
//!
//! Every unordered pair `(i, j)` with `i < j` is checked every tick; there is
//! no spatial index. Two strategies are available:
//!
//! - [`ContactMode::Sequential`] visits pairs in population order and mutates
//!   in place, so a particle infected by pair `(0, 1)` is already infectious
//!   when pair `(1, 2)` is examined.
//! - [`ContactMode::Snapshot`] scans pairs in parallel against a read-only
//!   view of the population, then applies the collected transmissions. The
//!   outcome never depends on visitation order or thread scheduling.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::particle::Particle;

/// Strategy for resolving contacts within one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactMode {
    /// In-place scan in population order.
    #[default]
    Sequential,
    /// Parallel scan over a snapshot of pre-contact states.
    Snapshot,
}

/// A disease transmission between two particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transmission {
    /// Index of the infectious particle.
    pub source: usize,
    /// Index of the newly infected particle.
    pub target: usize,
}

/// Resolves all contacts in the population with the given strategy.
pub fn resolve(population: &mut [Particle], radius: f64, mode: ContactMode) -> Vec<Transmission> {
    match mode {
        ContactMode::Sequential => sequential(population, radius),
        ContactMode::Snapshot => snapshot(population, radius),
    }
}

/// In-place scan of every pair `i < j` in population order.
pub fn sequential(population: &mut [Particle], radius: f64) -> Vec<Transmission> {
    let mut transmissions = Vec::new();
    let n = population.len();

    for low in 0..n {
        let (head, tail) = population.split_at_mut(low + 1);
        let a = &mut head[low];
        for (offset, b) in tail.iter_mut().enumerate() {
            if a.location.distance(b.location) >= radius {
                continue;
            }
            let high = low + 1 + offset;
            let a_vulnerable = a.is_vulnerable();
            if a.contact_with(b) {
                transmissions.push(if a_vulnerable {
                    Transmission { source: high, target: low }
                } else {
                    Transmission { source: low, target: high }
                });
            }
        }
    }

    transmissions
}

/// Parallel scan against pre-contact states, applied afterwards.
///
/// A particle reachable from several infectious neighbours is attributed to
/// the first source in pair order.
pub fn snapshot(population: &mut [Particle], radius: f64) -> Vec<Transmission> {
    let view: &[Particle] = population;
    let candidates: Vec<Transmission> = (0..view.len())
        .into_par_iter()
        .flat_map_iter(move |low| {
            let a = &view[low];
            view[low + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(offset, b)| {
                    let high = low + 1 + offset;
                    if a.location.distance(b.location) >= radius {
                        None
                    } else if a.is_infected() && b.is_vulnerable() {
                        Some(Transmission { source: low, target: high })
                    } else if b.is_infected() && a.is_vulnerable() {
                        Some(Transmission { source: high, target: low })
                    } else {
                        None
                    }
                })
        })
        .collect();

    let mut infected = vec![false; population.len()];
    let mut transmissions = Vec::with_capacity(candidates.len());
    for t in candidates {
        if infected[t.target] {
            continue;
        }
        infected[t.target] = true;
        population[t.target].contract_disease();
        transmissions.push(t);
    }
    transmissions
}
