//! # sigfft - Fourier analysis for sampled signals
//!
//! Signals carry their sample rate alongside the samples, and every
//! transform takes signals by reference and returns a new one at the same
//! rate. Samples are real (`f32`, `f64`) or complex ([`Complex32`],
//! [`Complex64`]).
//!
//! ## Transforms
//!
//! - [`fft`](fft::fft) picks its path from the input: Stockham for
//!   power-of-two complex lengths, Bluestein for the rest, and a packed
//!   half-length transform for even-length real input.
//! - [`ifft`](fft::ifft) is scaled by `1/N`, so `ifft(fft(x)) ≈ x`.
//! - [`convolve`](convolution::convolve) is circular and stays real when both
//!   operands are real.
//! - [`hilbert_transform`](hilbert::hilbert_transform) returns the analytic
//!   signal.
//! - [`dft`](dft::dft) is the direct `O(N²)` reference.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`DspError`]
//! - `parallel`: transform the channels of a [`MultiSignal`] with Rayon
//! - `verbose-logging`: emit `log::debug!` records for strategy and cache decisions
//!
//! ## Example
//!
//! ```
//! use sigfft::{fft, ifft, Signal};
//!
//! let x = Signal::from_vec(8, vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let spectrum = fft(&x);
//! assert_eq!(spectrum.sample_rate(), 8);
//! let back = ifft(&spectrum);
//! assert!((back[2].re - 3.0).abs() < 1e-12);
//! ```

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "verbose-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

/// Scalar, complex and sample-element types.
pub mod num;

pub mod error;

/// Power-of-two and parity helpers.
pub mod math;

/// The sampled-signal container.
pub mod signal;

/// Channels sharing one rate and length.
pub mod multi_signal;

/// Sine and cosine generators.
pub mod generator;

/// Magnitude, phase and power of each sample.
pub mod analysis;

/// Direct DFT.
pub mod dft;

/// Fast Fourier Transform (FFT) implementations
///
/// Stockham and Bluestein kernels, dispatch, and the caching planner.
pub mod fft;

/// Real-input FFT built on the complex kernels.
pub mod rfft;

/// Circular convolution.
pub mod convolution;

/// Hilbert transform
///
/// Analytic signal computation.
pub mod hilbert;

pub use analysis::{magnitude, phase, phase_with_epsilon, power};
pub use convolution::{convolve, try_convolve, Convolvable};
pub use dft::dft;
pub use error::DspError;
pub use fft::{fft, ifft, try_fft, try_ifft, FftPlanner, FftStrategy, Twiddles};
pub use generator::{SignalGenerator, Waveform};
pub use hilbert::{hilbert_transform, try_hilbert_transform};
pub use math::{is_even, is_power_of_two, next_power_of_two};
pub use multi_signal::MultiSignal;
pub use num::{Complex, Complex32, Complex64, Float, Sample};
pub use rfft::fft_real;
pub use signal::Signal;
