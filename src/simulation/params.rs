//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - softening and gravitational constant (`eps2`, `g`)

use crate::simulation::{SimError, SimResult};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end (s)
    pub h0: f64, // step size (s)
    pub eps2: f64, // softening (m^2) - prevents singular forces at small separations
    pub g: f64, // gravitational constant, SI unless a scenario scales it
}

impl Parameters {
    /// Reject a non-positive or non-finite step size before it can touch
    /// any body state.
    pub fn check_time_step(&self) -> SimResult<()> {
        if !(self.h0 > 0.0 && self.h0.is_finite()) {
            return Err(SimError::InvalidTimeStep { dt: self.h0 });
        }
        Ok(())
    }
}

