pub mod states;
pub mod params;
pub mod constants;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;

/// Error taxonomy for the stepping contract.
///
/// Every variant is a precondition violation surfaced at the API boundary
/// before any state mutation; the integrator itself performs no recovery
/// and never partially applies a step.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("scenario contains no bodies")]
    EmptySystem,
    #[error("body `{name}`: mass must be strictly positive, got {mass}")]
    NonPositiveMass { name: String, mass: f64 },
    #[error("time step must be positive and finite, got {dt}")]
    InvalidTimeStep { dt: f64 },
    #[error("body `{name}`: `{field}` needs 3 components, got {len}")]
    BadVector {
        name: String,
        field: &'static str,
        len: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
