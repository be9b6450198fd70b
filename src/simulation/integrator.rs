//! Fixed-step two-phase integrator for the N-body system
//!
//! Each step runs in two phases over the whole store:
//!
//! 1. Update pass: per body, sum softened pairwise gravity from the
//!    committed snapshots, then semi-implicit Euler
//!    (`v += a dt`, then `x += v dt`).
//! 2. Commit pass: copy every body's new `x` into its snapshot `x_prev`.
//!
//! The commit pass must not start for any body until the update pass has
//! finished for all bodies. Sequentially that is two separate loops; in the
//! rayon variant each phase is a whole-collection parallel pass and the
//! ordering is the join at the end of the first pass. The phases are not
//! public, so a caller cannot interleave them.
//!
//! The update pass writes only `x[i]`/`v[i]` and reads only snapshots, so
//! its work items are independent in any order; a step is atomic from the
//! driver's point of view.

use rayon::prelude::*;

use super::forces::Acceleration;
use super::params::Parameters;
use super::states::{NVec3, System};
use crate::configuration::config::StrategyConfig;
use crate::simulation::SimResult;

/// Advance the system by one step with the chosen execution strategy.
///
/// Rejects an empty store, a non-positive mass, or a bad step size before
/// any body is touched. Both strategies run the same arithmetic in the same
/// summation order, so their trajectories match bit for bit.
pub fn step(
    sys: &mut System,
    forces: &dyn Acceleration,
    params: &Parameters,
    strategy: StrategyConfig,
) -> SimResult<()> {
    match strategy {
        StrategyConfig::Sequential => step_sequential(sys, forces, params),
        StrategyConfig::Parallel => step_parallel(sys, forces, params),
    }
}

/// Advance the system by `steps` fixed steps, committing after each.
///
/// Drivers batch many small steps per rendered frame for numerical
/// stability at large time scales rather than taking one large step.
pub fn advance(
    sys: &mut System,
    forces: &dyn Acceleration,
    params: &Parameters,
    strategy: StrategyConfig,
    steps: u32,
) -> SimResult<()> {
    for _ in 0..steps {
        step(sys, forces, params, strategy)?;
    }
    Ok(())
}

/// Shared step-entry validation: store invariants and step size.
fn check_step(sys: &System, params: &Parameters) -> SimResult<()> {
    sys.check_preconditions()?;
    params.check_time_step()
}

/// Single-thread strategy: one loop per phase.
///
/// The snapshot discipline is still load-bearing here: because the force
/// law reads only `x_prev`, visiting bodies in any order gives the same
/// result, which is what makes this interchangeable with the parallel
/// strategy.
pub fn step_sequential(
    sys: &mut System,
    forces: &dyn Acceleration,
    params: &Parameters,
) -> SimResult<()> {
    check_step(sys, params)?;

    let dt = params.h0; // time step dt
    let n = sys.len();

    // Update pass, part 1: accelerations from the snapshots into a scratch
    // buffer, one entry per body.
    let mut acc = vec![NVec3::zeros(); n];
    for (i, a) in acc.iter_mut().enumerate() {
        *a = forces.acceleration_on(i, sys);
    }

    // Update pass, part 2: semi-implicit Euler. Velocity first, then the
    // position from the already-updated velocity.
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += *a * dt;
        b.x += b.v * dt;
    }

    // Commit pass: publish the new positions as the snapshot for the next
    // step. Runs only after every body finished the update pass.
    for b in sys.bodies.iter_mut() {
        b.x_prev = b.x;
    }

    sys.t += dt;
    Ok(())
}

/// Data-parallel strategy: each phase is an independent per-body dispatch,
/// the analogue of a two-kernel compute pipeline with a memory barrier
/// between the kernels.
pub fn step_parallel(
    sys: &mut System,
    forces: &dyn Acceleration,
    params: &Parameters,
) -> SimResult<()> {
    check_step(sys, params)?;

    let dt = params.h0; // time step dt
    let n = sys.len();

    // Update pass, part 1: per-body acceleration work items. Each item
    // reads the shared snapshots and writes its own scratch slot.
    let mut acc = vec![NVec3::zeros(); n];
    {
        let sys_ref: &System = sys;
        acc.par_iter_mut().enumerate().for_each(|(i, a)| {
            *a = forces.acceleration_on(i, sys_ref);
        });
    }

    // Update pass, part 2: disjoint writes to v[i]/x[i].
    sys.bodies
        .par_iter_mut()
        .zip(acc.par_iter())
        .for_each(|(b, a)| {
            b.v += *a * dt;
            b.x += b.v * dt;
        });

    // for_each returning is the barrier: all update writes are visible
    // before any commit item runs.
    sys.bodies.par_iter_mut().for_each(|b| {
        b.x_prev = b.x;
    });

    sys.t += dt;
    Ok(())
}
