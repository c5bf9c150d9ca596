//! Circular convolution through the convolution theorem.
//!
//! `convolve(a, b)` transforms both operands, multiplies the spectra bin by
//! bin and transforms back. The result is real when both operands are real
//! and complex otherwise; [`Convolvable`] encodes that rule in the types.

use alloc::vec::Vec;

use crate::error::{require, DspError};
use crate::fft::{complex_fft, complex_ifft, PerCall, Tables};
use crate::num::{Complex, Complex32, Complex64, Sample, SampleSlice};
use crate::rfft::real_fft;
use crate::signal::Signal;

/// Sample types that can be convolved with `Rhs`.
///
/// `Output` is real only when both sides are real.
pub trait Convolvable<Rhs: Sample>: Sample {
    type Output: Sample<Real = Self::Real>;
}

macro_rules! impl_convolvable {
    ($($t:ty => $c:ty),*) => {$(
        impl Convolvable<$t> for $t {
            type Output = $t;
        }
        impl Convolvable<$c> for $t {
            type Output = $c;
        }
        impl Convolvable<$t> for $c {
            type Output = $c;
        }
        impl Convolvable<$c> for $c {
            type Output = $c;
        }
    )*};
}

impl_convolvable!(f32 => Complex32, f64 => Complex64);

/// Circular convolution `c[k] = Σ a[j]·b[(k - j) mod N]` of two signals with
/// the same length and sample rate.
///
/// # Panics
/// Panics if the signals are empty or differ in length or sample rate.
pub fn convolve<A, B>(a: &Signal<A>, b: &Signal<B>) -> Signal<A::Output>
where
    A: Convolvable<B>,
    B: Sample<Real = A::Real>,
{
    require(try_convolve(a, b))
}

pub fn try_convolve<A, B>(a: &Signal<A>, b: &Signal<B>) -> Result<Signal<A::Output>, DspError>
where
    A: Convolvable<B>,
    B: Sample<Real = A::Real>,
{
    convolve_with(&mut PerCall, a, b)
}

pub(crate) fn convolve_with<A, B, P>(
    tables: &mut P,
    a: &Signal<A>,
    b: &Signal<B>,
) -> Result<Signal<A::Output>, DspError>
where
    A: Convolvable<B>,
    B: Sample<Real = A::Real>,
    P: Tables<A::Real>,
{
    a.check_compatible(b)?;
    if a.is_empty() {
        return Err(DspError::EmptyInput);
    }

    // Mixed operands go through the complex engine on both sides
    let promote = !(A::IS_REAL && B::IS_REAL);
    let fa = spectrum(tables, a.as_slice(), promote);
    let fb = spectrum(tables, b.as_slice(), promote);

    let product: Vec<Complex<A::Real>> = fa.iter().zip(fb.iter()).map(|(&x, &y)| x * y).collect();
    let c = complex_ifft(tables, &product);

    let out = c.into_iter().map(<A::Output as Sample>::from_complex);
    Ok(a.like(out.collect()))
}

fn spectrum<S: Sample, P: Tables<S::Real>>(
    tables: &mut P,
    x: &[S],
    promote: bool,
) -> Vec<Complex<S::Real>> {
    match S::as_samples(x) {
        SampleSlice::Real(samples) if promote => {
            let promoted: Vec<Complex<S::Real>> =
                samples.iter().map(|&s| Complex::from_real(s)).collect();
            complex_fft(tables, &promoted)
        }
        SampleSlice::Real(samples) => real_fft(tables, samples),
        SampleSlice::Complex(samples) => complex_fft(tables, samples),
    }
}
