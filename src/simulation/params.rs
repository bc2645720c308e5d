//! Arena and disease parameters, loadable from JSON.

use log::warn;
use serde::{Deserialize, Serialize};

use super::contacts::ContactMode;
use super::geometric_utils::Bounds;
use crate::error::{Error, Result};

/// Simulation parameters that control arena geometry and disease behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Arena rectangle particles are confined to.
    pub bounds: Bounds,
    /// Ticks an infected particle stays infectious before becoming immune.
    pub recovery_period: u32,
    /// Two particles closer than this are in contact.
    pub contact_radius: f64,
    /// How pairwise contacts are resolved each tick.
    pub contact_mode: ContactMode,
    /// Number of recent outbreak events kept by the simulation.
    pub event_log_capacity: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            recovery_period: 90,
            contact_radius: 15.0,
            contact_mode: ContactMode::default(),
            event_log_capacity: 64,
        }
    }
}

impl Params {
    /// Parses parameters from a JSON document.
    ///
    /// Missing fields take their default values. The result is validated.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks that every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        let reject = |reason: &str| {
            warn!("rejecting parameters: {reason}");
            Err(Error::InvalidConfiguration(reason.to_string()))
        };

        let b = &self.bounds;
        if ![b.min_x, b.max_x, b.min_y, b.max_y].iter().all(|v| v.is_finite()) {
            return reject("bounds must be finite");
        }
        if b.min_x > b.max_x || b.min_y > b.max_y {
            return reject("bounds minimum must not exceed maximum");
        }
        if !b.width().is_finite() || !b.height().is_finite() {
            return reject("bounds extent must be finite");
        }
        if self.recovery_period == 0 {
            return reject("recovery_period must be > 0");
        }
        if !self.contact_radius.is_finite() || self.contact_radius < 0.0 {
            return reject("contact_radius must be finite and >= 0");
        }
        Ok(())
    }
}
