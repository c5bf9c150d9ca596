//! Sinusoid generators.

use alloc::vec::Vec;

use crate::error::{require, DspError};
use crate::num::Float;
use crate::signal::Signal;

/// Shape of a sinusoid: `amplitude·f(2π·frequency·t + phase_shift) + vertical_shift`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waveform<T: Float> {
    pub frequency: T,
    pub amplitude: T,
    pub phase_shift: T,
    pub vertical_shift: T,
}

impl<T: Float> Waveform<T> {
    /// Unit amplitude, no phase or vertical shift.
    pub fn new(frequency: T) -> Self {
        Self {
            frequency,
            amplitude: T::one(),
            phase_shift: T::zero(),
            vertical_shift: T::zero(),
        }
    }

    pub fn amplitude(mut self, amplitude: T) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Phase offset in radians.
    pub fn phase_shift(mut self, phase_shift: T) -> Self {
        self.phase_shift = phase_shift;
        self
    }

    pub fn vertical_shift(mut self, vertical_shift: T) -> Self {
        self.vertical_shift = vertical_shift;
        self
    }
}

/// Produces fixed-size signals sampled at `t = n / sample_rate`.
#[derive(Clone, Copy, Debug)]
pub struct SignalGenerator<T: Float> {
    sample_rate: usize,
    size: usize,
    sample_interval: T,
}

impl<T: Float> SignalGenerator<T> {
    /// # Panics
    /// Panics if `sample_rate` is zero.
    pub fn new(sample_rate: usize, size: usize) -> Self {
        require(Self::try_new(sample_rate, size))
    }

    pub fn try_new(sample_rate: usize, size: usize) -> Result<Self, DspError> {
        if sample_rate == 0 {
            return Err(DspError::InvalidSampleRate);
        }
        Ok(Self {
            sample_rate,
            size,
            sample_interval: T::one() / T::from_usize(sample_rate),
        })
    }

    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Unit cosine at `frequency` Hz.
    pub fn cosine(&self, frequency: T) -> Signal<T> {
        self.cosine_wave(&Waveform::new(frequency))
    }

    /// Unit sine at `frequency` Hz.
    pub fn sine(&self, frequency: T) -> Signal<T> {
        self.sine_wave(&Waveform::new(frequency))
    }

    pub fn cosine_wave(&self, wave: &Waveform<T>) -> Signal<T> {
        self.generate(wave, T::cos)
    }

    pub fn sine_wave(&self, wave: &Waveform<T>) -> Signal<T> {
        self.generate(wave, T::sin)
    }

    fn generate(&self, wave: &Waveform<T>, f: fn(T) -> T) -> Signal<T> {
        let omega = T::from_f32(2.0) * T::pi() * wave.frequency;
        let data: Vec<T> = (0..self.size)
            .map(|n| {
                let t = T::from_usize(n) * self.sample_interval;
                wave.amplitude * f(omega * t + wave.phase_shift) + wave.vertical_shift
            })
            .collect();
        Signal::from_vec(self.sample_rate, data)
    }
}
