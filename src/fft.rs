//! Fast Fourier Transform engine.
//!
//! Complex transforms whose length is a power of two run through an
//! iterative [Stockham](https://en.wikipedia.org/wiki/Stockham_FFT)
//! auto-sort FFT with ping-pong buffers. Every other length goes through
//! [Bluestein's algorithm](https://en.wikipedia.org/wiki/Chirp_Z-transform#Bluestein's_algorithm),
//! which rewrites the DFT as a power-of-two convolution and so lands back on
//! the Stockham kernel. Real input is handled in [`crate::rfft`].
//!
//! The free functions build their twiddle tables per call. An
//! [`FftPlanner`] keeps them between calls instead.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use hashbrown::HashMap;

use crate::error::{require, DspError};
use crate::math::{is_even, is_power_of_two, next_power_of_two};
use crate::num::{Complex, Float, Sample, SampleSlice};
use crate::rfft;
use crate::signal::Signal;

/// Which code path a transform of a given length takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftStrategy {
    /// Power-of-two complex input.
    Stockham,
    /// Any other complex length.
    Bluestein,
    /// Even-length real input packed into a half-length complex transform.
    PackedReal,
    /// Odd-length real input promoted to complex as is.
    PromotedReal,
}

impl FftStrategy {
    /// Path for a complex sequence of length `n`.
    pub fn for_complex(n: usize) -> Self {
        if is_power_of_two(n) {
            FftStrategy::Stockham
        } else {
            FftStrategy::Bluestein
        }
    }

    /// Path for a real sequence of length `n`.
    pub fn for_real(n: usize) -> Self {
        if is_even(n) {
            FftStrategy::PackedReal
        } else {
            FftStrategy::PromotedReal
        }
    }
}

/// Immutable table of `size / 2` twiddle factors `exp(-2πi·j/size)`.
///
/// A table built for `size` serves every power-of-two transform length that
/// divides `size` by striding through it. Clones share the same storage.
#[derive(Clone, Debug)]
pub struct Twiddles<T: Float> {
    size: usize,
    factors: Arc<[Complex<T>]>,
}

impl<T: Float> Twiddles<T> {
    /// # Panics
    /// Panics if `size` is not a power of two.
    pub fn new(size: usize) -> Self {
        if !is_power_of_two(size) {
            crate::error::precondition_failed(DspError::NonPowerOfTwo(size));
        }
        let omega = -T::from_f32(2.0) * T::pi() / T::from_usize(size);
        let factors: Vec<Complex<T>> = (0..size / 2)
            .map(|j| Complex::expi(omega * T::from_usize(j)))
            .collect();
        Self {
            size,
            factors: Arc::from(factors),
        }
    }

    /// Transform length the table was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn factors(&self) -> &[Complex<T>] {
        &self.factors
    }

    /// Whether a transform of length `n` can read from this table.
    pub fn supports(&self, n: usize) -> bool {
        is_power_of_two(n) && n <= self.size
    }
}

/// Where the transforms get their trigonometric tables from.
pub(crate) trait Tables<T: Float> {
    /// Twiddles usable for a power-of-two transform of length `n`.
    fn twiddles(&mut self, n: usize) -> Twiddles<T>;

    /// Bluestein phase factors `exp(-iπ·(k² mod 2n)/n)` for `k < n`.
    fn chirp(&mut self, n: usize) -> Arc<[Complex<T>]>;
}

/// Computes every table on demand and keeps nothing.
pub(crate) struct PerCall;

impl<T: Float> Tables<T> for PerCall {
    fn twiddles(&mut self, n: usize) -> Twiddles<T> {
        Twiddles::new(n)
    }

    fn chirp(&mut self, n: usize) -> Arc<[Complex<T>]> {
        Arc::from(chirp_factors::<T>(n))
    }
}

fn chirp_factors<T: Float>(n: usize) -> Vec<Complex<T>> {
    let two_n = 2 * n as u128;
    let n_t = T::from_usize(n);
    (0..n)
        .map(|k| {
            // k² is reduced mod 2n to keep the angle small
            let reduced = (k as u128 * k as u128) % two_n;
            Complex::expi(-T::pi() * T::from_usize(reduced as usize) / n_t)
        })
        .collect()
}

/// Stockham FFT of a power-of-two-length complex signal.
///
/// # Panics
/// Panics if the length is not a power of two.
pub fn stockham_fft<T: Float>(x: &Signal<Complex<T>>) -> Signal<Complex<T>> {
    require(try_stockham_fft(x))
}

pub fn try_stockham_fft<T: Float>(x: &Signal<Complex<T>>) -> Result<Signal<Complex<T>>, DspError> {
    let n = x.len();
    if !is_power_of_two(n) {
        return Err(DspError::NonPowerOfTwo(n));
    }
    let twiddles = Twiddles::new(n);
    Ok(x.like(stockham(x.as_slice(), &twiddles)))
}

/// Stockham FFT reading from a precomputed table.
///
/// # Panics
/// Panics if the length is not a power of two or `twiddles` was built for a
/// smaller size.
pub fn stockham_fft_with<T: Float>(
    x: &Signal<Complex<T>>,
    twiddles: &Twiddles<T>,
) -> Signal<Complex<T>> {
    let n = x.len();
    if !is_power_of_two(n) {
        crate::error::precondition_failed(DspError::NonPowerOfTwo(n));
    }
    assert!(
        twiddles.supports(n),
        "twiddle table of size {} cannot serve length {}",
        twiddles.size(),
        n
    );
    x.like(stockham(x.as_slice(), twiddles))
}

/// Radix-2 Stockham kernel. `input.len()` must be a power of two no larger
/// than `twiddles.size()`.
pub(crate) fn stockham<T: Float>(input: &[Complex<T>], twiddles: &Twiddles<T>) -> Vec<Complex<T>> {
    let n = input.len();
    debug_assert!(twiddles.supports(n));
    let half = n / 2;
    let w = twiddles.factors();

    // Ping-pong buffers: `a` holds the current stage, `b` receives the next.
    let mut a = input.to_vec();
    let mut b = vec![Complex::zero(); n];

    // Distance between twiddles used by the first stage
    let mut w_stride = half * (twiddles.size() / n.max(1));

    let mut stride = 1;
    while stride < n {
        for m in (0..half).step_by(stride) {
            let m2 = 2 * m;
            for k in 0..stride {
                let t1 = a[k + m];
                let t2 = w[k * w_stride] * a[k + m + half];
                b[k + m2] = t1 + t2;
                b[k + m2 + stride] = t1 - t2;
            }
        }
        w_stride /= 2;
        mem::swap(&mut a, &mut b);
        stride *= 2;
    }

    a
}

/// Bluestein FFT of a complex signal of any nonzero length.
///
/// # Panics
/// Panics on an empty signal.
pub fn bluestein_fft<T: Float>(x: &Signal<Complex<T>>) -> Signal<Complex<T>> {
    if x.is_empty() {
        crate::error::precondition_failed(DspError::EmptyInput);
    }
    x.like(bluestein(&mut PerCall, x.as_slice()))
}

pub(crate) fn bluestein<T: Float, P: Tables<T>>(
    tables: &mut P,
    x: &[Complex<T>],
) -> Vec<Complex<T>> {
    let n = x.len();
    debug_assert!(n > 0);

    // Padding to at least 2n - 1 keeps the circular convolution from wrapping
    let m = next_power_of_two(2 * n - 1);
    debug_log!("bluestein: n={} padded to m={}", n, m);

    let p = tables.chirp(n);

    let mut a = vec![Complex::zero(); m];
    let mut b = vec![Complex::zero(); m];
    a[0] = x[0] * p[0];
    b[0] = p[0];
    for k in 1..n {
        a[k] = x[k] * p[k];
        let c = p[k].conj();
        b[k] = c;
        b[m - k] = c;
    }

    let twiddles = tables.twiddles(m);
    let c = convolve_pow2(&a, &b, &twiddles);

    c.iter().zip(p.iter()).map(|(&ck, &pk)| ck * pk).collect()
}

/// Circular convolution of two equal power-of-two-length sequences.
///
/// Only meant for Bluestein's padded sequences; the public
/// [`convolve`](crate::convolution::convolve) handles arbitrary signals.
pub(crate) fn convolve_pow2<T: Float>(
    a: &[Complex<T>],
    b: &[Complex<T>],
    twiddles: &Twiddles<T>,
) -> Vec<Complex<T>> {
    debug_assert_eq!(a.len(), b.len());
    debug_assert!(is_power_of_two(a.len()));

    let fa = stockham(a, twiddles);
    let fb = stockham(b, twiddles);

    // Inverse through the conjugation identity, staying on the Stockham kernel
    let product: Vec<Complex<T>> = fa
        .iter()
        .zip(fb.iter())
        .map(|(&x, &y)| (x * y).conj())
        .collect();
    let scale = T::one() / T::from_usize(a.len());
    let mut out = stockham(&product, twiddles);
    for c in out.iter_mut() {
        *c = c.conj().scale(scale);
    }
    out
}

/// Forward transform of a complex slice, dispatching on its length.
pub(crate) fn complex_fft<T: Float, P: Tables<T>>(
    tables: &mut P,
    x: &[Complex<T>],
) -> Vec<Complex<T>> {
    let n = x.len();
    let strategy = FftStrategy::for_complex(n);
    debug_log!("fft: n={} strategy={:?}", n, strategy);
    match strategy {
        FftStrategy::Stockham => {
            let twiddles = tables.twiddles(n);
            stockham(x, &twiddles)
        }
        _ => bluestein(tables, x),
    }
}

/// Inverse transform of a complex slice: `conj(FFT(conj(X))) / N`.
pub(crate) fn complex_ifft<T: Float, P: Tables<T>>(
    tables: &mut P,
    x: &[Complex<T>],
) -> Vec<Complex<T>> {
    let conjugated: Vec<Complex<T>> = x.iter().map(|c| c.conj()).collect();
    let mut out = complex_fft(tables, &conjugated);
    let scale = T::one() / T::from_usize(x.len());
    for c in out.iter_mut() {
        *c = c.conj().scale(scale);
    }
    out
}

/// Forward transform of any sample slice.
pub(crate) fn forward<S: Sample, P: Tables<S::Real>>(
    tables: &mut P,
    x: &[S],
) -> Vec<Complex<S::Real>> {
    match S::as_samples(x) {
        SampleSlice::Real(samples) => rfft::real_fft(tables, samples),
        SampleSlice::Complex(samples) => complex_fft(tables, samples),
    }
}

/// Fast Fourier transform of a real or complex signal.
///
/// Output has the input's length and sample rate and holds the
/// unnormalized DFT `X[k] = Σ x[n]·exp(-2πi·nk/N)`.
///
/// # Panics
/// Panics on an empty signal.
pub fn fft<S: Sample>(x: &Signal<S>) -> Signal<Complex<S::Real>> {
    require(try_fft(x))
}

pub fn try_fft<S: Sample>(x: &Signal<S>) -> Result<Signal<Complex<S::Real>>, DspError> {
    if x.is_empty() {
        return Err(DspError::EmptyInput);
    }
    Ok(x.like(forward(&mut PerCall, x.as_slice())))
}

/// Inverse FFT, scaled by `1/N` so that `ifft(fft(x)) ≈ x`.
///
/// # Panics
/// Panics on an empty signal.
pub fn ifft<T: Float>(x: &Signal<Complex<T>>) -> Signal<Complex<T>> {
    require(try_ifft(x))
}

pub fn try_ifft<T: Float>(x: &Signal<Complex<T>>) -> Result<Signal<Complex<T>>, DspError> {
    if x.is_empty() {
        return Err(DspError::EmptyInput);
    }
    Ok(x.like(complex_ifft(&mut PerCall, x.as_slice())))
}

/// Caches twiddle tables and Bluestein phase factors between transforms.
///
/// Cached tables are immutable and reference counted, so a table handed out
/// by [`FftPlanner::twiddles`] may be read from other threads while the
/// planner keeps growing its cache. Results match the free functions.
pub struct FftPlanner<T: Float> {
    twiddles: HashMap<usize, Twiddles<T>>,
    chirps: HashMap<usize, Arc<[Complex<T>]>>,
    largest: usize,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            twiddles: HashMap::new(),
            chirps: HashMap::new(),
            largest: 0,
        }
    }

    /// Twiddles for a power-of-two length `n`. A larger cached table is
    /// reused through striding before a new one is built.
    ///
    /// # Panics
    /// Panics if `n` is not a power of two.
    pub fn twiddles(&mut self, n: usize) -> Twiddles<T> {
        if let Some(table) = self.twiddles.get(&n) {
            return table.clone();
        }
        if self.largest >= n && is_power_of_two(n) {
            if let Some(table) = self.twiddles.get(&self.largest) {
                debug_log!("planner: length {} served by table {}", n, self.largest);
                return table.clone();
            }
        }
        debug_log!("planner: building twiddles for {}", n);
        let table = Twiddles::new(n);
        self.largest = self.largest.max(n);
        self.twiddles.insert(n, table.clone());
        table
    }

    /// Number of twiddle tables held.
    pub fn cached_tables(&self) -> usize {
        self.twiddles.len()
    }

    pub fn fft<S: Sample<Real = T>>(&mut self, x: &Signal<S>) -> Signal<Complex<T>> {
        if x.is_empty() {
            crate::error::precondition_failed(DspError::EmptyInput);
        }
        x.like(forward(self, x.as_slice()))
    }

    pub fn ifft(&mut self, x: &Signal<Complex<T>>) -> Signal<Complex<T>> {
        if x.is_empty() {
            crate::error::precondition_failed(DspError::EmptyInput);
        }
        x.like(complex_ifft(self, x.as_slice()))
    }

    /// Same as [`crate::convolution::convolve`], reusing cached tables.
    pub fn convolve<A, B>(&mut self, a: &Signal<A>, b: &Signal<B>) -> Signal<A::Output>
    where
        A: crate::convolution::Convolvable<B, Real = T>,
        B: Sample<Real = T>,
    {
        require(crate::convolution::convolve_with(self, a, b))
    }

    /// Same as [`crate::hilbert::hilbert_transform`], reusing cached tables.
    pub fn hilbert_transform(&mut self, x: &Signal<T>) -> Signal<Complex<T>> {
        require(crate::hilbert::hilbert_with(self, x))
    }
}

impl<T: Float> Tables<T> for FftPlanner<T> {
    fn twiddles(&mut self, n: usize) -> Twiddles<T> {
        FftPlanner::twiddles(self, n)
    }

    fn chirp(&mut self, n: usize) -> Arc<[Complex<T>]> {
        Arc::clone(
            self.chirps
                .entry(n)
                .or_insert_with(|| Arc::from(chirp_factors::<T>(n))),
        )
    }
}
