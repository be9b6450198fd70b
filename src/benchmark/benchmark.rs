use std::time::Instant;

use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::{step_parallel, step_sequential};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build a deterministic `System` of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        bodies.push(Body::new(x, NVec3::zeros(), 1.0, format!("b{i}")));
    }

    System::new(bodies).expect("benchmark system is valid")
}

/// Shared scaled parameters for the benchmark systems
fn make_params() -> Parameters {
    Parameters {
        t_end: 100.0,
        h0: 0.001,
        eps2: 1e-4,
        g: 0.1,
    }
}

/// Time one step of each execution strategy for a range of system sizes
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 2; // steps per strategy (tune as needed)

    for n in ns {
        let sys_template = make_system(n);
        let params = make_params();
        let gravity = NewtonianGravity {
            g: params.g,
            eps2: params.eps2,
        };

        // Sequential strategy
        let mut sys_seq = sys_template.clone();

        // Warm-up
        step_sequential(&mut sys_seq, &gravity, &params).expect("sequential step");

        let t0 = Instant::now();
        for _ in 0..steps {
            step_sequential(&mut sys_seq, &gravity, &params).expect("sequential step");
        }
        let seq_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Parallel strategy
        let mut sys_par = sys_template.clone();

        // Warm-up (also spins the rayon pool up)
        step_parallel(&mut sys_par, &gravity, &params).expect("parallel step");

        let t1 = Instant::now();
        for _ in 0..steps {
            step_parallel(&mut sys_par, &gravity, &params).expect("parallel step");
        }
        let par_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:5}, sequential step = {seq_per_step:8.6} s, parallel step = {par_per_step:8.6} s"
        );
    }
}

/// Benchmark both strategies for a dense range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,sequential_ms,parallel_ms");

    // Steps of 200 to give a smoother graph
    for n in (200..=12800).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to avoid minutes of runtime
        let steps = if n <= 800 { 5 } else { 1 };

        let sys_template = make_system(n);
        let params = make_params();
        let gravity = NewtonianGravity {
            g: params.g,
            eps2: params.eps2,
        };

        let mut sys_seq = sys_template.clone();
        let t0 = Instant::now();
        for _ in 0..steps {
            step_sequential(&mut sys_seq, &gravity, &params).expect("sequential step");
        }
        let ms_seq = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut sys_par = sys_template.clone();
        let t1 = Instant::now();
        for _ in 0..steps {
            step_parallel(&mut sys_par, &gravity, &params).expect("parallel step");
        }
        let ms_par = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms_seq:.6},{ms_par:.6}");
    }
}
