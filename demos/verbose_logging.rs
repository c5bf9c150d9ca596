//! Prints the transform decisions logged under the `verbose-logging` feature.
//!
//! Run with `cargo run --example verbose_logging --features verbose-logging`.

use sigfft::{fft, FftPlanner, Signal};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    for n in [8usize, 12, 7] {
        let x = Signal::from_vec(100, (0..n).map(|i| i as f32).collect::<Vec<_>>());
        let _ = fft(&x);
    }

    let mut planner = FftPlanner::<f32>::new();
    for n in [64usize, 16, 64] {
        let x = Signal::from_vec(100, vec![1.0f32; n]);
        let _ = planner.fft(&x);
    }
    log::info!("planner holds {} tables", planner.cached_tables());
}
