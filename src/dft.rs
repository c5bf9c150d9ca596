//! Direct `O(N²)` discrete Fourier transform.
//!
//! Serves as the reference the fast paths are checked against. For real
//! input only bins `0..=N/2` are summed and the rest are filled in by
//! conjugate symmetry.

use alloc::vec;
use alloc::vec::Vec;

use crate::num::{Complex, Float, Sample};
use crate::signal::Signal;

/// `X[k] = Σ x[n]·exp(-2πi·nk/N)` by direct summation.
///
/// An empty signal gives an empty spectrum.
pub fn dft<S: Sample>(x: &Signal<S>) -> Signal<Complex<S::Real>> {
    x.like(direct(x.as_slice()))
}

fn direct<S: Sample>(x: &[S]) -> Vec<Complex<S::Real>> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }

    // exp(-2πi·m/N) for every residue m
    let omega = -S::Real::from_f32(2.0) * S::Real::pi() / S::Real::from_usize(n);
    let roots: Vec<Complex<S::Real>> = (0..n)
        .map(|m| Complex::expi(omega * S::Real::from_usize(m)))
        .collect();

    let bins = if S::IS_REAL { n / 2 + 1 } else { n };
    let mut out = vec![Complex::zero(); n];
    for k in 0..bins {
        let mut sum = Complex::zero();
        let mut index = 0;
        for &sample in x {
            sum += sample.to_complex() * roots[index];
            index = (index + k) % n;
        }
        out[k] = sum;
        if S::IS_REAL && k > 0 {
            out[n - k] = sum.conj();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    #[test]
    fn empty_gives_empty() {
        let x = Signal::<f64>::new(10);
        assert!(dft(&x).is_empty());
    }

    #[test]
    fn constant_concentrates_in_dc() {
        let x = Signal::from_vec(4, vec![1.0f64; 4]);
        let y = dft(&x);
        assert!((y[0] - Complex64::new(4.0, 0.0)).abs() < 1e-12);
        for k in 1..4 {
            assert!(y[k].abs() < 1e-12);
        }
    }

    #[test]
    fn real_and_promoted_agree() {
        let real = Signal::from_vec(7, vec![0.5f64, -1.0, 2.0, 3.5, 0.0, 1.0, -2.0]);
        let y = dft(&real);
        let z = dft(&real.to_complex());
        for (a, b) in y.iter().zip(z.iter()) {
            assert!((*a - *b).abs() < 1e-12);
        }
    }
}
