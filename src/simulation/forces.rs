//! Force / acceleration contributors for the n-body engine
//!
//! Defines the per-body acceleration trait and direct all-pairs
//! Newtonian gravity with softening.
//!
//! Implementations must read only the committed snapshots (`x_prev`) and
//! masses of the system's bodies. That rule is what makes the update phase
//! order-independent and safe to dispatch as independent per-body work items.

use crate::simulation::states::{NVec3, System};

/// Trait for acceleration sources operating on [`System`].
///
/// `acceleration_on` returns the total acceleration on body `i` computed
/// from the committed snapshot state. It must not read any body's `x`.
pub trait Acceleration: Send + Sync {
    fn acceleration_on(&self, i: usize, sys: &System) -> NVec3;

    /// Potential energy of the whole configuration, for conservation
    /// diagnostics. Terms that store no energy keep the default.
    fn potential_energy(&self, _sys: &System) -> f64 {
        0.0
    }
}

/// Direct O(N^2) Newtonian gravity with Plummer softening.
///
/// The softened squared separation is `d2 = |r|^2 + eps2`, which keeps the
/// inverse-square law finite through close encounters. With `eps2 = 0`
/// coincident bodies divide by zero and the caller owns the consequences;
/// scenario configuration defaults to a small positive floor.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening (m^2)
}

impl Acceleration for NewtonianGravity {
    fn acceleration_on(&self, i: usize, sys: &System) -> NVec3 {
        // Snapshot position of the receiving body. Its own x_prev still
        // equals its committed position while the update phase runs.
        let xi = sys.bodies[i].x_prev;

        let mut acc = NVec3::zeros();

        for (j, bj) in sys.bodies.iter().enumerate() {
            // No self-force. Exclusion is by index, never by name.
            if j == i {
                continue;
            }

            // Separation from i toward j, taken from the snapshot only.
            let r = bj.x_prev - xi;

            // Softened squared distance: d2 = |r|^2 + eps2
            let d2 = r.norm_squared() + self.eps2;

            // 1 / |r_soft| and 1 / |r_soft|^3. Writing the Newtonian term
            // as a = r * (G m_j / |r|^3) normalizes the direction and
            // scales by the inverse-square magnitude in one multiply.
            let inv_r = d2.sqrt().recip();
            let inv_r3 = inv_r * inv_r * inv_r;

            // a_i += G * m_j * r / |r_soft|^3, pulling i toward j.
            acc += self.g * bj.m * inv_r3 * r;
        }

        acc
    }

    /// Pairwise potential `-G m_i m_j / |r_soft|`, each pair counted once.
    /// Evaluated on snapshots so it is consistent with the accelerations of
    /// the same step.
    fn potential_energy(&self, sys: &System) -> f64 {
        let mut pe = 0.0;
        for (i, bi) in sys.bodies.iter().enumerate() {
            for bj in &sys.bodies[i + 1..] {
                let r = bj.x_prev - bi.x_prev;
                let d = (r.norm_squared() + self.eps2).sqrt();
                pe -= self.g * bi.m * bj.m / d;
            }
        }
        pe
    }
}
