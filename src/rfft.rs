//! Real-input FFT.
//!
//! An even-length real sequence is packed into a complex sequence of half
//! the length (`z[n] = x[2n] + i·x[2n+1]`), transformed, then split back
//! into the full spectrum. Odd lengths are promoted to complex and go
//! through the complex engine directly. Either way the result is the full
//! length-`N` spectrum, Hermitian-symmetric up to rounding.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{require, DspError};
use crate::fft::{complex_fft, FftStrategy, PerCall, Tables};
use crate::num::{Complex, Float};
use crate::signal::Signal;

/// FFT of a real signal.
///
/// Same result as [`crate::fft::fft`] on a real signal; provided for callers
/// that want the real path spelled out.
///
/// # Panics
/// Panics on an empty signal.
pub fn fft_real<T: Float>(x: &Signal<T>) -> Signal<Complex<T>> {
    require(try_fft_real(x))
}

pub fn try_fft_real<T: Float>(x: &Signal<T>) -> Result<Signal<Complex<T>>, DspError> {
    if x.is_empty() {
        return Err(DspError::EmptyInput);
    }
    Ok(x.like(real_fft(&mut PerCall, x.as_slice())))
}

pub(crate) fn real_fft<T: Float, P: Tables<T>>(tables: &mut P, x: &[T]) -> Vec<Complex<T>> {
    let n = x.len();
    let strategy = FftStrategy::for_real(n);
    debug_log!("rfft: n={} strategy={:?}", n, strategy);
    match strategy {
        FftStrategy::PackedReal => packed(tables, x),
        _ => {
            let promoted: Vec<Complex<T>> = x.iter().map(|&s| Complex::from_real(s)).collect();
            complex_fft(tables, &promoted)
        }
    }
}

fn packed<T: Float, P: Tables<T>>(tables: &mut P, x: &[T]) -> Vec<Complex<T>> {
    let n = x.len();
    let half = n / 2;

    let pairs: Vec<Complex<T>> = x
        .chunks_exact(2)
        .map(|pair| Complex::new(pair[0], pair[1]))
        .collect();
    let mut z = complex_fft(tables, &pairs);
    // z[half] wraps around to z[0]
    z.push(z[0]);

    let two = T::from_f32(2.0);
    let half_t = T::from_usize(half);
    let mut out = vec![Complex::zero(); n];
    for m in 0..half {
        let p = z[m];
        let q = z[half - m];
        let re_sum = (p.re + q.re) / two;
        let re_diff = (p.re - q.re) / two;
        let im_sum = (p.im + q.im) / two;
        let im_diff = (p.im - q.im) / two;

        let (b, a) = (T::pi() * T::from_usize(m) / half_t).sin_cos();
        out[m] = Complex::new(
            re_sum + a * im_sum - b * re_diff,
            im_diff - b * im_sum - a * re_diff,
        );
    }

    for m in 1..half {
        out[n - m] = out[m].conj();
    }
    out[half] = Complex::from_real(z[0].re - z[0].im);

    out
}
