//! Numeric building blocks: a minimal [`Float`] trait, the [`Complex`] pair
//! and the [`Sample`] element interface shared by real and complex signals.
//!
//! Trigonometry goes through `libm` so nothing here needs `std`.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

// Minimal float trait for the generic transforms (no_std, libm-backed)
pub trait Float:
    Sample<Real = Self>
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    /// Convert a length or index. Values beyond the mantissa are rounded.
    fn from_usize(x: usize) -> Self;
    fn pi() -> Self;
    /// Machine epsilon.
    fn epsilon() -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn abs(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn hypot(self, other: Self) -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
    fn epsilon() -> Self {
        f32::EPSILON
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypotf(self, other)
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn epsilon() -> Self {
        f64::EPSILON
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }

    pub fn from_real(re: T) -> Self {
        Self { re, im: T::zero() }
    }

    /// Unit phasor `exp(i·theta)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }

    /// `r·exp(i·theta)`.
    pub fn from_polar(r: T, theta: T) -> Self {
        Self::expi(theta).scale(r)
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared magnitude `re² + im²`.
    #[inline(always)]
    pub fn norm(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude, computed without intermediate overflow.
    pub fn abs(self) -> T {
        self.re.hypot(self.im)
    }

    /// Phase angle in radians, in `(-π, π]`.
    pub fn arg(self) -> T {
        self.im.atan2(self.re)
    }

    #[inline(always)]
    pub fn scale(self, k: T) -> Self {
        Self {
            re: self.re * k,
            im: self.im * k,
        }
    }
}

impl<T: Float> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::from_real(re)
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl<T: Float> Mul<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, k: T) -> Self {
        self.scale(k)
    }
}

impl<T: Float> Div<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn div(self, k: T) -> Self {
        Self {
            re: self.re / k,
            im: self.im / k,
        }
    }
}

impl<T: Float> AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        self.re += other.re;
        self.im += other.im;
    }
}

impl<T: Float> SubAssign for Complex<T> {
    #[inline(always)]
    fn sub_assign(&mut self, other: Self) {
        self.re -= other.re;
        self.im -= other.im;
    }
}

impl<T: Float> MulAssign for Complex<T> {
    #[inline(always)]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

/// Element type of a [`Signal`](crate::signal::Signal).
///
/// Real samples (`f32`, `f64`) and complex samples ([`Complex32`],
/// [`Complex64`]) share this interface so one algorithm body serves both.
/// [`Sample::to_complex`] is the only real-to-complex promotion in the crate.
pub trait Sample: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Scalar type of the real and imaginary parts.
    type Real: Float;

    /// `true` for real element types.
    const IS_REAL: bool;

    fn to_complex(self) -> Complex<Self::Real>;

    /// Narrow a complex value to this element type. Real element types keep
    /// only the real part.
    fn from_complex(value: Complex<Self::Real>) -> Self;

    /// View a run of samples by element kind, without copying.
    fn as_samples(samples: &[Self]) -> SampleSlice<'_, Self::Real>;
}

/// A borrowed run of samples tagged with its element kind.
#[derive(Clone, Copy, Debug)]
pub enum SampleSlice<'a, T: Float> {
    Real(&'a [T]),
    Complex(&'a [Complex<T>]),
}

macro_rules! impl_real_sample {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            type Real = $t;
            const IS_REAL: bool = true;

            #[inline(always)]
            fn to_complex(self) -> Complex<$t> {
                Complex::from_real(self)
            }

            #[inline(always)]
            fn from_complex(value: Complex<$t>) -> Self {
                value.re
            }

            fn as_samples(samples: &[Self]) -> SampleSlice<'_, $t> {
                SampleSlice::Real(samples)
            }
        }
    )*};
}

impl_real_sample!(f32, f64);

impl<T: Float> Sample for Complex<T> {
    type Real = T;
    const IS_REAL: bool = false;

    #[inline(always)]
    fn to_complex(self) -> Complex<T> {
        self
    }

    #[inline(always)]
    fn from_complex(value: Complex<T>) -> Self {
        value
    }

    fn as_samples(samples: &[Self]) -> SampleSlice<'_, T> {
        SampleSlice::Complex(samples)
    }
}
