pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::forces::{Acceleration, NewtonianGravity};
pub use simulation::integrator::{advance, step, step_parallel, step_sequential};
pub use simulation::params::Parameters;
pub use simulation::constants::{circular_orbit_speed, schwarzschild_radius, C_SI, G_SI};
pub use simulation::engine::{run, Engine};
pub use simulation::scenario::Scenario;
pub use simulation::{SimError, SimResult};

pub use configuration::config::{
    BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig, StrategyConfig,
};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
