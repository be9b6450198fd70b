//! High-level runtime engine settings
//!
//! Selects the execution strategy and per-frame step batching used when
//! running a `Scenario`, and drives the headless frame loop.

use crate::configuration::config::StrategyConfig;
use crate::simulation::forces::Acceleration;
use crate::simulation::integrator::advance;
use crate::simulation::scenario::Scenario;
use crate::simulation::SimResult;

#[derive(Debug, Clone)]
pub struct Engine {
    pub strategy: StrategyConfig, // sequential or data-parallel stepping
    pub steps_per_frame: u32, // fixed steps batched between frames
}

/// Drive a scenario to its end time, batching `steps_per_frame` fixed steps
/// per frame the way an interactive driver would between redraws.
///
/// A renderer would read the positions view between frames; headless, the
/// frame boundary is where progress and conservation diagnostics get logged.
pub fn run(scenario: &mut Scenario) -> SimResult<()> {
    let mut frame: u64 = 0;

    log::info!(
        "running {} bodies, strategy {:?}, dt {} s, {} steps/frame",
        scenario.system.len(),
        scenario.engine.strategy,
        scenario.parameters.h0,
        scenario.engine.steps_per_frame,
    );

    while scenario.system.t < scenario.parameters.t_end {
        advance(
            &mut scenario.system,
            &scenario.gravity,
            &scenario.parameters,
            scenario.engine.strategy,
            scenario.engine.steps_per_frame,
        )?;
        frame += 1;

        if frame % 100 == 0 {
            let p = scenario.system.total_momentum();
            let e = scenario.system.kinetic_energy()
                + scenario.gravity.potential_energy(&scenario.system);
            log::info!(
                "frame {frame}: t = {:.3e} s, |p| = {:.6e}, E = {:.6e}",
                scenario.system.t,
                p.norm(),
                e,
            );
        }
    }

    for b in &scenario.system.bodies {
        log::info!(
            "{}: x = [{:.6e}, {:.6e}, {:.6e}] m, |v| = {:.6e} m/s",
            b.name,
            b.x.x,
            b.x.y,
            b.x.z,
            b.v.norm(),
        );
    }

    Ok(())
}
