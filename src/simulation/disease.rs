//! Disease progression states carried by each particle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a particle is in the course of the disease.
///
/// Transitions only move forward: `Vulnerable` to `Infected`, and
/// `Infected` to `Immune`. `Immune` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiseaseState {
    /// Never infected; can contract the disease on contact.
    #[default]
    Vulnerable,
    /// Currently infectious.
    Infected {
        /// Ticks elapsed since infection, always below the recovery period.
        age: u32,
    },
    /// Recovered; can neither contract nor transmit.
    Immune,
}

impl DiseaseState {
    /// Advances the state by one tick.
    ///
    /// Infected states age by one and become `Immune` on reaching
    /// `recovery_period`. Other states are returned unchanged.
    pub fn advance(self, recovery_period: u32) -> Self {
        match self {
            DiseaseState::Infected { age } => {
                let age = age.saturating_add(1);
                if age >= recovery_period {
                    DiseaseState::Immune
                } else {
                    DiseaseState::Infected { age }
                }
            }
            other => other,
        }
    }

    /// Presentation class of this state.
    pub fn classification(self) -> Classification {
        match self {
            DiseaseState::Vulnerable => Classification::Neutral,
            DiseaseState::Infected { .. } => Classification::Sick,
            DiseaseState::Immune => Classification::Recovered,
        }
    }
}

/// Coarse classification exposed to presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Vulnerable particle.
    Neutral,
    /// Infected particle.
    Sick,
    /// Immune particle.
    Recovered,
}

impl Classification {
    /// Stable tag for this class.
    pub fn tag(self) -> &'static str {
        match self {
            Classification::Neutral => "neutral",
            Classification::Sick => "sick",
            Classification::Recovered => "recovered",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
