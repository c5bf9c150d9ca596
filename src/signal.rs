//! Sampled-signal container.
//!
//! A [`Signal`] owns an ordered run of samples together with the rate they
//! were taken at. Every transform in this crate consumes signals by
//! reference and returns a freshly allocated one with the same rate.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::error::{require, DspError};
use crate::num::{Complex, Float, Sample};

/// Samples of type `S` taken at a fixed rate (in samples per second).
#[derive(Clone, Debug, PartialEq)]
pub struct Signal<S: Sample> {
    data: Vec<S>,
    sample_rate: usize,
}

impl<S: Sample> Signal<S> {
    /// Empty signal at `sample_rate`.
    ///
    /// # Panics
    /// Panics if `sample_rate` is zero.
    pub fn new(sample_rate: usize) -> Self {
        require(Self::try_new(sample_rate))
    }

    pub fn try_new(sample_rate: usize) -> Result<Self, DspError> {
        Self::try_from_vec(sample_rate, Vec::new())
    }

    /// `size` zero samples at `sample_rate`.
    ///
    /// # Panics
    /// Panics if `sample_rate` is zero.
    pub fn with_size(sample_rate: usize, size: usize) -> Self {
        Self::from_vec(sample_rate, vec![S::default(); size])
    }

    /// Wrap existing samples.
    ///
    /// # Panics
    /// Panics if `sample_rate` is zero.
    pub fn from_vec(sample_rate: usize, data: Vec<S>) -> Self {
        require(Self::try_from_vec(sample_rate, data))
    }

    pub fn try_from_vec(sample_rate: usize, data: Vec<S>) -> Result<Self, DspError> {
        if sample_rate == 0 {
            return Err(DspError::InvalidSampleRate);
        }
        Ok(Self { data, sample_rate })
    }

    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    /// # Panics
    /// Panics if `sample_rate` is zero.
    pub fn set_sample_rate(&mut self, sample_rate: usize) {
        if sample_rate == 0 {
            crate::error::precondition_failed(DspError::InvalidSampleRate);
        }
        self.sample_rate = sample_rate;
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.data.len() as f64 / self.sample_rate as f64
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Make room for at least `additional` more samples.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Grow with zero samples or truncate to `size`. Capacity is kept.
    pub fn resize(&mut self, size: usize) {
        self.data.resize(size, S::default());
    }

    pub fn push(&mut self, sample: S) {
        self.data.push(sample);
    }

    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, S> {
        self.data.iter_mut()
    }

    pub fn into_vec(self) -> Vec<S> {
        self.data
    }

    /// Apply `f` to every sample, keeping the sample rate.
    pub fn map<U: Sample, F: FnMut(S) -> U>(&self, f: F) -> Signal<U> {
        Signal {
            data: self.data.iter().copied().map(f).collect(),
            sample_rate: self.sample_rate,
        }
    }

    /// New signal at this signal's rate.
    pub(crate) fn like<U: Sample>(&self, data: Vec<U>) -> Signal<U> {
        Signal {
            data,
            sample_rate: self.sample_rate,
        }
    }

    /// Promote every sample to a complex value.
    pub fn to_complex(&self) -> Signal<Complex<S::Real>> {
        self.map(Sample::to_complex)
    }

    /// Checks that `other` can be paired sample-for-sample with `self`.
    pub fn check_compatible<U: Sample>(&self, other: &Signal<U>) -> Result<(), DspError> {
        if self.sample_rate != other.sample_rate {
            return Err(DspError::MismatchedSampleRates {
                left: self.sample_rate,
                right: other.sample_rate,
            });
        }
        if self.len() != other.len() {
            return Err(DspError::MismatchedLengths {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }
}

impl<T: Float> Signal<Complex<T>> {
    /// Pair two real signals into one complex signal.
    ///
    /// # Panics
    /// Panics if the signals differ in sample rate or length.
    pub fn from_parts(real: &Signal<T>, imaginary: &Signal<T>) -> Self {
        require(Self::try_from_parts(real, imaginary))
    }

    pub fn try_from_parts(real: &Signal<T>, imaginary: &Signal<T>) -> Result<Self, DspError> {
        real.check_compatible(imaginary)?;
        let data = real
            .iter()
            .zip(imaginary.iter())
            .map(|(&re, &im)| Complex::new(re, im))
            .collect();
        Ok(Self {
            data,
            sample_rate: real.sample_rate,
        })
    }

    /// Elementwise complex conjugate.
    pub fn conj(&self) -> Self {
        self.map(Complex::conj)
    }

    /// Real parts of every sample.
    pub fn real(&self) -> Signal<T> {
        self.map(|c| c.re)
    }

    /// Imaginary parts of every sample.
    pub fn imag(&self) -> Signal<T> {
        self.map(|c| c.im)
    }
}

impl<S: Sample> Index<usize> for Signal<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.data[index]
    }
}

impl<S: Sample> IndexMut<usize> for Signal<S> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        &mut self.data[index]
    }
}

impl<S: Sample> IntoIterator for Signal<S> {
    type Item = S;
    type IntoIter = vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, S: Sample> IntoIterator for &'a Signal<S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, S: Sample> IntoIterator for &'a mut Signal<S> {
    type Item = &'a mut S;
    type IntoIter = slice::IterMut<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<S: Sample> AsRef<[S]> for Signal<S> {
    fn as_ref(&self) -> &[S] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex32;

    #[test]
    fn construct_with_rate_only() {
        let x = Signal::<f64>::new(1000);
        assert_eq!(x.sample_rate(), 1000);
        assert_eq!(x.len(), 0);
        assert!(x.is_empty());
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert_eq!(
            Signal::<f32>::try_new(0).unwrap_err(),
            DspError::InvalidSampleRate
        );
    }

    #[test]
    #[should_panic(expected = "sample rate must be greater than zero")]
    fn set_zero_rate_panics() {
        Signal::<f32>::new(10).set_sample_rate(0);
    }

    #[test]
    fn duration_follows_length() {
        let x = Signal::<f32>::with_size(1000, 2500);
        assert!((x.duration() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn resize_keeps_capacity() {
        let mut x = Signal::<f32>::with_size(1000, 10);
        x.resize(100);
        assert_eq!(x.len(), 100);
        x.resize(10);
        assert_eq!(x.len(), 10);
        assert!(x.capacity() >= 100);
    }

    #[test]
    fn new_samples_are_zero() {
        let mut real = Signal::<f64>::with_size(8, 3);
        real.push(2.0);
        real.resize(6);
        assert_eq!(real.as_slice(), &[0.0, 0.0, 0.0, 2.0, 0.0, 0.0]);

        let mut complex = Signal::<Complex32>::with_size(8, 2);
        complex.resize(4);
        assert!(complex.iter().all(|&c| c == Complex32::zero()));
    }

    #[test]
    fn paired_construction() {
        let re = Signal::from_vec(8, vec![1.0f32, 2.0]);
        let im = Signal::from_vec(8, vec![3.0f32, 4.0]);
        let z = Signal::from_parts(&re, &im);
        assert_eq!(z.sample_rate(), 8);
        assert_eq!(z[0], Complex32::new(1.0, 3.0));
        assert_eq!(z[1], Complex32::new(2.0, 4.0));
        assert_eq!(z.real(), re);
        assert_eq!(z.imag(), im);
    }

    #[test]
    fn paired_construction_rejects_mismatch() {
        let re = Signal::from_vec(8, vec![1.0f32, 2.0]);
        let short = Signal::from_vec(8, vec![3.0f32]);
        let other_rate = Signal::from_vec(16, vec![3.0f32, 4.0]);
        assert_eq!(
            Signal::try_from_parts(&re, &short).unwrap_err(),
            DspError::MismatchedLengths { left: 2, right: 1 }
        );
        assert_eq!(
            Signal::try_from_parts(&re, &other_rate).unwrap_err(),
            DspError::MismatchedSampleRates { left: 8, right: 16 }
        );
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = Signal::from_vec(10, vec![1.0f64]);
        let mut b = Signal::from_vec(20, vec![2.0f64, 3.0]);
        core::mem::swap(&mut a, &mut b);
        assert_eq!(a.sample_rate(), 20);
        assert_eq!(a.as_slice(), &[2.0, 3.0]);
        assert_eq!(b.as_slice(), &[1.0]);
    }
}
