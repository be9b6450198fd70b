//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – execution strategy and per-frame step batching
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   strategy: "sequential"  # or "parallel"
//!   steps_per_frame: 100    # fixed steps batched between driver frames
//!
//! parameters:
//!   t_end: 86400.0          # total simulated time (s)
//!   h0: 1.0                 # fixed step size (s)
//!   eps2: 1.0               # softening epsilon^2 (m^2)
//!   g: 6.674e-11            # optional; defaults to the SI value
//!
//! bodies:
//!   - name: "sun"
//!     x: [ 0.0, 0.0, 0.0 ]  # meters
//!     v: [ 0.0, 0.0, 0.0 ]  # meters/second
//!     m: 1.988435e30        # kilograms
//!   - name: "earth"
//!     x: [ 0.0, 1.49597870700e11, 0.0 ]
//!     v: [ 2.98e4, 0.0, 0.0 ]
//!     m: 5.972e24
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation, validating body state eagerly along the way.

use serde::Deserialize;

/// Which execution strategy advances the system
/// `strategy: "sequential"` or `strategy: "parallel"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyConfig {
    #[serde(rename = "sequential")] // One thread loops the update pass, then the commit pass
    Sequential,

    #[serde(rename = "parallel")] // Per-body work items per phase on a rayon pool, joined between phases
    Parallel,
}

/// High-level engine configuration
/// Controls how the simulation is executed, not what it computes
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub strategy: StrategyConfig, // sequential or data-parallel stepping
    pub steps_per_frame: Option<u32>, // fixed steps batched per driver frame, defaults to 100
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulated time (s)
    pub h0: f64,    // fixed step size (s)
    pub eps2: f64,  // softening - prevents singular forces at very small separations
    pub g: Option<f64>, // gravitational constant override for scaled scenarios
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // display label for logging and reporting
    pub x: Vec<f64>,  // initial position (m), 3 components
    pub v: Vec<f64>,  // initial velocity (m/s), 3 components
    pub m: f64,       // mass (kg), strictly positive
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (strategy, batching)
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state of the system
}
