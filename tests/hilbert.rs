use sigfft::{
    hilbert_transform, try_hilbert_transform, Complex32, Complex64, DspError, Signal,
    SignalGenerator,
};

#[test]
fn period_four_cosine_becomes_exponential() {
    let x = Signal::from_vec(4000, vec![1.0f64, 0.0, -1.0, 0.0]);
    let y = hilbert_transform(&x);
    let expected = [
        Complex64::new(1.0, 0.0),
        Complex64::new(0.0, 1.0),
        Complex64::new(-1.0, 0.0),
        Complex64::new(0.0, -1.0),
    ];
    for (got, want) in y.iter().zip(expected.iter()) {
        assert!((*got - *want).abs() < 1e-12, "{got:?} vs {want:?}");
    }
    assert_eq!(y.sample_rate(), 4000);
}

#[test]
fn even_length_real_part_reconstructs_input() {
    let gen = SignalGenerator::<f64>::new(64, 64);
    let x = gen.cosine(5.0);
    let y = hilbert_transform(&x);
    let expected = gen.sine(5.0);
    for ((z, &re), &im) in y.iter().zip(x.iter()).zip(expected.iter()) {
        assert!((z.re - re).abs() < 1e-9);
        assert!((z.im - im).abs() < 1e-9);
    }
}

#[test]
fn odd_length_tone() {
    // Bins 1..=N/2 doubled, nothing above
    let gen = SignalGenerator::<f64>::new(9, 9);
    let x = gen.cosine(2.0);
    let y = hilbert_transform(&x);
    let expected = gen.sine(2.0);
    for ((z, &re), &im) in y.iter().zip(x.iter()).zip(expected.iter()) {
        assert!((z.re - re).abs() < 1e-9);
        assert!((z.im - im).abs() < 1e-9);
    }
}

#[test]
fn single_sample_and_empty() {
    let one = Signal::from_vec(1, vec![0.75f32]);
    assert_eq!(hilbert_transform(&one)[0], Complex32::new(0.75, 0.0));
    let empty = Signal::<f32>::new(1);
    assert_eq!(
        try_hilbert_transform(&empty).unwrap_err(),
        DspError::EmptyInput
    );
}
