//! Basic usage example for sigfft
//!
//! Generates a few sinusoids and walks through the transforms: FFT and its
//! inverse, spectrum measurements, convolution, the analytic signal and
//! multi-channel processing.

use sigfft::{
    convolve, fft, hilbert_transform, ifft, magnitude, phase, FftPlanner, MultiSignal, Signal,
    SignalGenerator, Waveform,
};

fn main() {
    println!("=== sigfft Basic Usage Example ===\n");

    // 1. FFT of a real tone
    println!("1. Fast Fourier Transform (FFT)");
    let gen = SignalGenerator::<f64>::new(64, 64);
    let tone = gen.cosine_wave(&Waveform::new(8.0).amplitude(2.0));
    let spectrum = fft(&tone);
    let mags = magnitude(&spectrum);
    let half = &mags.as_slice()[..mags.len() / 2 + 1];
    let mut bin = 0;
    for (k, &m) in half.iter().enumerate() {
        if m > half[bin] {
            bin = k;
        }
    }
    let peak_mag = half[bin];
    let hz = bin as f64 * gen.sample_rate() as f64 / mags.len() as f64;
    println!("   Peak bin: {bin} ({hz:.1} Hz), magnitude {peak_mag:.2}");
    println!("   Phase at peak: {:.3} rad", phase(&spectrum)[bin]);

    let back = ifft(&spectrum);
    let max_err = back
        .iter()
        .zip(tone.iter())
        .map(|(z, &x)| (z.re - x).abs())
        .fold(0.0f64, f64::max);
    println!("   IFFT round trip max error: {:.2e}", max_err);
    println!();

    // 2. Non-power-of-two lengths
    println!("2. Arbitrary lengths");
    let odd = Signal::from_vec(1000, vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    let odd_spectrum = fft(&odd);
    println!(
        "   Bins: {:?}",
        odd_spectrum
            .iter()
            .map(|c| format!("{:.2}{:+.2}i", c.re, c.im))
            .collect::<Vec<_>>()
    );
    println!();

    // 3. Circular convolution
    println!("3. Convolution");
    let x = Signal::from_vec(10, vec![1.0f64, 2.0, 3.0, 4.0]);
    let shift = Signal::from_vec(10, vec![0.0f64, 1.0, 0.0, 0.0]);
    let y = convolve(&x, &shift);
    let rounded: Vec<f64> = y.iter().map(|v| v.round()).collect();
    println!("   {:?} * delta[n-1] = {:?}", x.as_slice(), rounded);
    println!();

    // 4. Analytic signal
    println!("4. Hilbert transform");
    let analytic = hilbert_transform(&gen.cosine(4.0));
    let envelope = magnitude(&analytic);
    let (first, later) = (envelope[0], envelope[10]);
    println!("   Envelope of a unit cosine: {first:.3} .. {later:.3}");
    println!();

    // 5. Reusing tables
    println!("5. Planner");
    let mut planner = FftPlanner::<f64>::new();
    for n in [256usize, 128, 64, 100] {
        let s = SignalGenerator::<f64>::new(1000, n).sine(50.0);
        let _ = planner.fft(&s);
    }
    println!("   Cached twiddle tables: {}", planner.cached_tables());
    println!();

    // 6. Multi-channel
    println!("6. Multi-channel");
    let stereo = MultiSignal::from_channels(vec![gen.sine(3.0), gen.sine(5.0)]);
    let spectra = stereo.fft_channels();
    for (i, ch) in spectra.iter().enumerate() {
        let mags = magnitude(ch);
        let (x3, x5) = (mags[3], mags[5]);
        println!("   Channel {i}: |X[3]| = {x3:.1}, |X[5]| = {x5:.1}");
    }
}
