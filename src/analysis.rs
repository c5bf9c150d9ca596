//! Per-sample spectrum measurements: magnitude, phase and power.

use crate::num::{Complex, Float, Sample};
use crate::signal::Signal;

/// `|x[n]|` for every sample.
pub fn magnitude<S: Sample>(x: &Signal<S>) -> Signal<S::Real> {
    x.map(|s| s.to_complex().abs())
}

/// `|x[n]|²` for every sample.
pub fn power<S: Sample>(x: &Signal<S>) -> Signal<S::Real> {
    x.map(|s| s.to_complex().norm())
}

/// Phase angle of every sample in radians, in `(-π, π]`.
///
/// Components smaller than `100·ε` are flushed to zero first so that
/// rounding noise in an otherwise real bin does not read as a phase.
pub fn phase<S: Sample>(x: &Signal<S>) -> Signal<S::Real> {
    let epsilon = S::Real::from_f32(100.0) * S::Real::epsilon();
    phase_with_epsilon(x, epsilon)
}

/// [`phase`] with an explicit flush threshold.
pub fn phase_with_epsilon<S: Sample>(x: &Signal<S>, epsilon: S::Real) -> Signal<S::Real> {
    x.map(|s| {
        let c = s.to_complex();
        Complex::new(flush(c.re, epsilon), flush(c.im, epsilon)).arg()
    })
}

#[inline]
fn flush<T: Float>(value: T, epsilon: T) -> T {
    if value.abs() < epsilon {
        T::zero()
    } else {
        value
    }
}
