use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sigfft::{dft, fft, try_fft, Complex32, Complex64, DspError, FftStrategy, Signal};

const SAMPLE_RATE: usize = 1000;

fn random_real<T>(rng: &mut StdRng, n: usize, f: fn(f64) -> T) -> Vec<T> {
    (0..n).map(|_| f(rng.gen_range(-1.0..1.0))).collect()
}

#[test]
fn fft_matches_dft_real_f64() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in 1..=100 {
        let x = Signal::from_vec(SAMPLE_RATE, random_real(&mut rng, n, |v| v));
        let fast = fft(&x);
        let slow = dft(&x);
        assert_eq!(fast.len(), n);
        for (k, (a, b)) in fast.iter().zip(slow.iter()).enumerate() {
            assert!((*a - *b).abs() < 1e-9, "n={n} k={k}: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn fft_matches_dft_complex_f64() {
    let mut rng = StdRng::seed_from_u64(2);
    for n in 1..=100 {
        let data: Vec<Complex64> = (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let x = Signal::from_vec(SAMPLE_RATE, data);
        let fast = fft(&x);
        let slow = dft(&x);
        for (k, (a, b)) in fast.iter().zip(slow.iter()).enumerate() {
            assert!((*a - *b).abs() < 1e-9, "n={n} k={k}: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn fft_matches_dft_real_f32() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 1..=100 {
        let x = Signal::from_vec(SAMPLE_RATE, random_real(&mut rng, n, |v| v as f32));
        let fast = fft(&x);
        let slow = dft(&x);
        for (k, (a, b)) in fast.iter().zip(slow.iter()).enumerate() {
            assert!((*a - *b).abs() < 1e-3, "n={n} k={k}: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn fft_matches_dft_complex_f32() {
    let mut rng = StdRng::seed_from_u64(4);
    for n in 1..=100 {
        let data: Vec<Complex32> = (0..n)
            .map(|_| Complex32::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();
        let x = Signal::from_vec(SAMPLE_RATE, data);
        let fast = fft(&x);
        let slow = dft(&x);
        for (k, (a, b)) in fast.iter().zip(slow.iter()).enumerate() {
            assert!((*a - *b).abs() < 1e-3, "n={n} k={k}: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn period_four_cosine() {
    // 1000 Hz at 4000 Hz sampling
    let x = Signal::from_vec(4000, vec![1.0f64, 0.0, -1.0, 0.0]);
    let y = fft(&x);
    let expected = [0.0, 2.0, 0.0, 2.0];
    for (got, &want) in y.iter().zip(expected.iter()) {
        assert!((got.re - want).abs() < 1e-12);
        assert!(got.im.abs() < 1e-12);
    }
    assert_eq!(y.sample_rate(), 4000);
}

#[test]
fn single_sample_passes_through() {
    let x = Signal::from_vec(10, vec![-3.5f32]);
    assert_eq!(fft(&x)[0], Complex32::new(-3.5, 0.0));
    assert_eq!(dft(&x)[0], Complex32::new(-3.5, 0.0));
    let z = Signal::from_vec(10, vec![Complex64::new(1.5, -2.0)]);
    assert_eq!(fft(&z)[0], Complex64::new(1.5, -2.0));
}

#[test]
fn empty_input_is_rejected() {
    let x = Signal::<f64>::new(10);
    assert_eq!(try_fft(&x).unwrap_err(), DspError::EmptyInput);
}

#[test]
#[should_panic(expected = "input signal is empty")]
fn empty_input_panics() {
    let x = Signal::<Complex32>::new(10);
    let _ = fft(&x);
}

#[test]
fn strategy_covers_every_length() {
    for n in 1..=64usize {
        let complex = FftStrategy::for_complex(n);
        assert_eq!(
            complex == FftStrategy::Stockham,
            n.is_power_of_two(),
            "n={n}"
        );
        let real = FftStrategy::for_real(n);
        assert_eq!(real == FftStrategy::PackedReal, n % 2 == 0, "n={n}");
    }
}

#[test]
fn large_prime_length_stays_accurate() {
    let n = 1009;
    let x = Signal::from_vec(
        SAMPLE_RATE,
        (0..n).map(|i| ((i * i) % 17) as f64 - 8.0).collect::<Vec<_>>(),
    );
    let fast = fft(&x);
    let slow = dft(&x);
    for (a, b) in fast.iter().zip(slow.iter()) {
        assert!((*a - *b).abs() < 1e-7);
    }
}
