use std::sync::Arc;
use std::thread;

use sigfft::{convolve, fft, hilbert_transform, ifft, Complex32, FftPlanner, Signal, Twiddles};

fn tone(n: usize) -> Signal<f32> {
    Signal::from_vec(8000, (0..n).map(|i| (i as f32 * 0.2).sin() + 0.5).collect())
}

#[test]
fn planner_matches_free_functions() {
    let mut planner = FftPlanner::<f32>::new();
    for n in [1usize, 2, 5, 8, 12, 31, 64, 100] {
        let x = tone(n);
        let a = planner.fft(&x);
        let b = fft(&x);
        for (p, q) in a.iter().zip(b.iter()) {
            assert!((*p - *q).abs() < 1e-3, "n={n}");
        }
        let back = planner.ifft(&a);
        let reference = ifft(&b);
        for (p, q) in back.iter().zip(reference.iter()) {
            assert!((*p - *q).abs() < 1e-3, "n={n}");
        }
    }
}

#[test]
fn planner_convolution_and_hilbert() {
    let mut planner = FftPlanner::<f32>::new();
    let a = tone(10);
    let b = tone(10);
    let c = planner.convolve(&a, &b);
    let reference: Signal<f32> = convolve(&a, &b);
    for (p, q) in c.iter().zip(reference.iter()) {
        assert!((p - q).abs() < 1e-3);
    }
    let h = planner.hilbert_transform(&a);
    for (p, q) in h.iter().zip(hilbert_transform(&a).iter()) {
        assert!((*p - *q).abs() < 1e-4);
    }
}

#[test]
fn larger_table_is_reused() {
    let mut planner = FftPlanner::<f32>::new();
    let big = planner.twiddles(512);
    assert_eq!(big.size(), 512);
    let small = planner.twiddles(64);
    assert_eq!(small.size(), 512);
    assert_eq!(planner.cached_tables(), 1);
    let bigger = planner.twiddles(1024);
    assert_eq!(bigger.size(), 1024);
    assert_eq!(planner.cached_tables(), 2);
}

#[test]
fn tables_are_shareable_across_threads() {
    let table = Arc::new(Twiddles::<f32>::new(256));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let data: Vec<Complex32> = (0..64)
                    .map(|i| Complex32::new((i + t) as f32, 0.0))
                    .collect();
                let x = Signal::from_vec(100, data);
                sigfft::fft::stockham_fft_with(&x, &table)
            })
        })
        .collect();
    for (t, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap();
        let expected: f32 = (0..64).map(|i| (i + t) as f32).sum();
        assert!((out[0].re - expected).abs() < 1e-2);
    }
}
