//! Core state types for the N-body simulation.
//!
//! Defines the body record and the flat system store:
//! - `Body` holds position, the committed snapshot of position, velocity and mass
//! - `System` holds the list of bodies and the current simulation time `t`
//!
//! All quantities are SI: positions in meters, velocities in meters/second,
//! masses in kilograms. The body count is fixed once the system is built.

use nalgebra::Vector3;

use crate::simulation::{SimError, SimResult};

pub type NVec3 = Vector3<f64>;

/// A point mass participating in pairwise gravitation.
///
/// `x_prev` is the position as committed at the end of the previous step.
/// During a step's update phase the force law reads only `x_prev` and `m`;
/// the commit phase then copies `x` into `x_prev` for every body at once.
#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position (m), authoritative for the in-progress step
    pub x_prev: NVec3, // committed snapshot of x from the previous step
    pub v: NVec3, // velocity (m/s)
    pub m: f64, // mass (kg), fixed after construction
    pub name: String, // display label, never used for self-exclusion
}

impl Body {
    /// Build a body from initial conditions. The snapshot starts equal to
    /// the initial position.
    pub fn new(x: NVec3, v: NVec3, m: f64, name: impl Into<String>) -> Self {
        Self {
            x,
            x_prev: x,
            v,
            m,
            name: name.into(),
        }
    }

    /// Momentum `m * v` (kg m/s).
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    /// Kinetic energy `m v^2 / 2` (J).
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// Flat store of all bodies plus the simulation clock.
///
/// The store owns no stepping logic; the integrator mutates it through
/// indexed access and the driver owns its lifetime between steps.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed-size collection
    pub t: f64, // time (s)
}

impl System {
    /// Build a system at `t = 0`, rejecting empty stores and non-positive
    /// masses before any state exists.
    pub fn new(bodies: Vec<Body>) -> SimResult<Self> {
        let sys = Self { bodies, t: 0.0 };
        sys.check_preconditions()?;
        Ok(sys)
    }

    /// Number of bodies, fixed at construction.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Validate the store invariants: at least one body, every mass strictly
    /// positive and finite. Cheap enough to run at every step entry.
    pub fn check_preconditions(&self) -> SimResult<()> {
        if self.bodies.is_empty() {
            return Err(SimError::EmptySystem);
        }
        for b in &self.bodies {
            if !(b.m > 0.0 && b.m.is_finite()) {
                return Err(SimError::NonPositiveMass {
                    name: b.name.clone(),
                    mass: b.m,
                });
            }
        }
        Ok(())
    }

    /// Read-only view of current positions, for a renderer collaborator.
    /// Values are meters; any display-unit conversion happens downstream.
    pub fn positions(&self) -> impl Iterator<Item = &NVec3> {
        self.bodies.iter().map(|b| &b.x)
    }

    /// Total momentum over all bodies (kg m/s).
    pub fn total_momentum(&self) -> NVec3 {
        self.bodies
            .iter()
            .fold(NVec3::zeros(), |p, b| p + b.momentum())
    }

    /// Total kinetic energy over all bodies (J).
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// The most massive body and its index, if any. Used for display-only
    /// derived quantities like the Schwarzschild radius.
    pub fn heaviest(&self) -> Option<(usize, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.m.total_cmp(&b.m))
    }
}
