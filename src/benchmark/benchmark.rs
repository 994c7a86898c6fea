use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::simulation::engine::Engine;
use crate::simulation::states::{Body, NVec2, Registry};

const WIDTH: f64 = 4000.0;
const HEIGHT: f64 = 4000.0;

/// Helper to build a registry of size `n`, laid out deterministically
fn make_registry(n: usize) -> Registry {
    let place = |i: usize| {
        let i_f = i as f64;
        // deterministic positions and velocities, no rand needed
        let x = NVec2::new(
            WIDTH / 2.0 + (i_f * 0.37).sin() * WIDTH * 0.45,
            HEIGHT / 2.0 + (i_f * 0.13).cos() * HEIGHT * 0.45,
        );
        let v = NVec2::new((i_f * 0.07).sin() * 4.0, (i_f * 0.11).cos() * 4.0);
        Body::new(x, v, 1.0, 2.0).with_orbit(50.0 + (i % 500) as f64 * 3.0, i_f * 0.01)
    };

    let mut reg = Registry::new(place(0));
    for i in 1..n {
        reg.insert(place(i));
    }
    reg
}

/// Time `Engine::step` for growing registry sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 5; // steps averaged per size

    println!("N,ms_per_step,merges");

    for n in ns {
        let mut reg = make_registry(n);
        let mut engine = Engine::with_rng(ChaCha8Rng::seed_from_u64(42));

        // Warm up
        engine.step(&mut reg, WIDTH, HEIGHT);

        let mut merges = 0;
        let t0 = Instant::now();
        for _ in 0..steps {
            merges += engine.step(&mut reg, WIDTH, HEIGHT).merges;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{}", n, ms, merges);
    }
}
