//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0, snapshots committed)
//! - the active force law (`NewtonianGravity`)
//!
//! Body state is validated here, before any stepping can happen: malformed
//! vectors, non-positive masses and empty body lists are all rejected while
//! building.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::constants::{schwarzschild_radius, G_SI};
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};
use crate::simulation::{SimError, SimResult};

/// A fully-initialized runtime scenario.
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, the body store at t = 0, and the force law.
/// The driver owns it between frames; the integrator borrows the store per
/// step.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub gravity: NewtonianGravity,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> SimResult<Self> {
        // Bodies: map `BodyConfig` -> runtime `Body` with nalgebra vectors,
        // snapshots initialized equal to the initial positions.
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc| {
                Ok(Body::new(
                    vec3(bc, "x", &bc.x)?,
                    vec3(bc, "v", &bc.v)?,
                    bc.m,
                    bc.name.clone(),
                ))
            })
            .collect::<SimResult<_>>()?;

        // Initial system state: bodies at t = 0. Rejects empty stores and
        // non-positive masses.
        let system = System::new(bodies)?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            eps2: p_cfg.eps2,
            g: p_cfg.g.unwrap_or(G_SI),
        };
        parameters.check_time_step()?;

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            strategy: e_cfg.strategy,
            steps_per_frame: e_cfg.steps_per_frame.unwrap_or(100),
        };

        let gravity = NewtonianGravity {
            g: parameters.g,
            eps2: parameters.eps2,
        };

        // Display-only: report the Schwarzschild radius of the heaviest
        // body. Never feeds back into the dynamics.
        if let Some((_, b)) = system.heaviest() {
            log::info!(
                "heaviest body `{}`: r_s = {:.3e} m",
                b.name,
                schwarzschild_radius(b.m),
            );
        }

        Ok(Self {
            engine,
            parameters,
            system,
            gravity,
        })
    }
}

/// Convert a config vector into an `NVec3`, rejecting anything but exactly
/// three components.
fn vec3(bc: &BodyConfig, field: &'static str, raw: &[f64]) -> SimResult<NVec3> {
    if raw.len() != 3 {
        return Err(SimError::BadVector {
            name: bc.name.clone(),
            field,
            len: raw.len(),
        });
    }
    Ok(NVec3::new(raw[0], raw[1], raw[2]))
}
