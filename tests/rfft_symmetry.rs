use sigfft::{fft, fft_real, Complex64, Signal};

fn ramp(n: usize) -> Signal<f64> {
    Signal::from_vec(
        48_000,
        (0..n).map(|i| ((i * 13) % 7) as f64 * 0.3 - 1.0).collect(),
    )
}

#[test]
fn even_length_spectrum_is_conjugate_symmetric() {
    for n in (2..=64).step_by(2) {
        let y = fft(&ramp(n));
        for k in 1..n / 2 {
            assert!((y[n - k] - y[k].conj()).abs() < 1e-12, "n={n} k={k}");
        }
        assert_eq!(y[n / 2].im, 0.0);
    }
}

#[test]
fn odd_length_spectrum_is_conjugate_symmetric() {
    for n in (1..=63).step_by(2) {
        let y = fft(&ramp(n));
        for k in 1..n {
            assert!((y[n - k] - y[k].conj()).abs() < 1e-9, "n={n} k={k}");
        }
    }
}

#[test]
fn explicit_real_entry_point_matches_dispatch() {
    for n in [1usize, 2, 6, 9, 32, 50] {
        let x = ramp(n);
        assert_eq!(fft_real(&x), fft(&x));
    }
}

#[test]
fn dc_bin_is_the_sum() {
    let x = ramp(10);
    let total: f64 = x.iter().sum();
    let y = fft(&x);
    assert!((y[0] - Complex64::new(total, 0.0)).abs() < 1e-12);
}
