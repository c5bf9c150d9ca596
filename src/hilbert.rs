//! Analytic signal via the Hilbert transform.
//!
//! The real spectrum is kept at DC, doubled on bins `1..=N/2` and zeroed
//! above, then transformed back. The real part of the result reproduces the
//! input and the imaginary part is its Hilbert transform.

use alloc::vec;

use crate::error::{require, DspError};
use crate::fft::{complex_ifft, PerCall, Tables};
use crate::num::{Complex, Float};
use crate::rfft::real_fft;
use crate::signal::Signal;

/// Analytic signal of a real signal.
///
/// # Panics
/// Panics on an empty signal.
pub fn hilbert_transform<T: Float>(x: &Signal<T>) -> Signal<Complex<T>> {
    require(try_hilbert_transform(x))
}

pub fn try_hilbert_transform<T: Float>(x: &Signal<T>) -> Result<Signal<Complex<T>>, DspError> {
    hilbert_with(&mut PerCall, x)
}

pub(crate) fn hilbert_with<T: Float, P: Tables<T>>(
    tables: &mut P,
    x: &Signal<T>,
) -> Result<Signal<Complex<T>>, DspError> {
    if x.is_empty() {
        return Err(DspError::EmptyInput);
    }
    let n = x.len();
    let spectrum = real_fft(tables, x.as_slice());

    let two = T::from_f32(2.0);
    let mut analytic = vec![Complex::zero(); n];
    analytic[0] = spectrum[0];
    for k in 1..=n / 2 {
        analytic[k] = spectrum[k].scale(two);
    }

    Ok(x.like(complex_ifft(tables, &analytic)))
}
