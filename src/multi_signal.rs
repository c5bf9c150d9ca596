//! Multi-channel signals.
//!
//! A [`MultiSignal`] holds any number of channels that share one sample rate
//! and one length. Whole-signal transforms run channel by channel; with the
//! `parallel` feature, enough channels spread the work over rayon's pool.

use alloc::vec::Vec;
use core::slice;

use crate::error::{require, DspError};
use crate::fft::{fft, ifft};
use crate::num::{Complex, Float, Sample};
use crate::signal::Signal;

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

/// Channel count at or above which transforms run in parallel by default.
#[cfg(feature = "parallel")]
pub const DEFAULT_PARALLEL_CHANNEL_THRESHOLD: usize = 2;

/// `0` means no override.
#[cfg(feature = "parallel")]
static PARALLEL_CHANNEL_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static PARALLEL_CHANNEL_THRESHOLD_ENV: OnceLock<usize> = OnceLock::new();

#[cfg(feature = "parallel")]
/// Set the channel count at which multi-channel transforms go parallel.
///
/// Passing `0` reverts to `SIGFFT_PAR_CHANNEL_THRESHOLD` or the default.
pub fn set_parallel_channel_threshold(threshold: usize) {
    PARALLEL_CHANNEL_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
/// Channel count at which multi-channel transforms go parallel.
pub fn parallel_channel_threshold() -> usize {
    let overridden = PARALLEL_CHANNEL_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if overridden != 0 {
        return overridden;
    }
    *PARALLEL_CHANNEL_THRESHOLD_ENV.get_or_init(|| {
        std::env::var("SIGFFT_PAR_CHANNEL_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or(DEFAULT_PARALLEL_CHANNEL_THRESHOLD)
    })
}

/// Channels of equal length sharing one sample rate.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiSignal<S: Sample> {
    sample_rate: usize,
    size: usize,
    channels: Vec<Signal<S>>,
}

impl<S: Sample> MultiSignal<S> {
    /// No channels yet. The first added channel fixes the length.
    ///
    /// # Panics
    /// Panics if `sample_rate` is zero.
    pub fn new(sample_rate: usize) -> Self {
        if sample_rate == 0 {
            crate::error::precondition_failed(DspError::InvalidSampleRate);
        }
        Self {
            sample_rate,
            size: 0,
            channels: Vec::new(),
        }
    }

    /// `channels` zero-filled channels of `size` samples each.
    ///
    /// # Panics
    /// Panics if `sample_rate` is zero.
    pub fn with_shape(sample_rate: usize, size: usize, channels: usize) -> Self {
        let mut multi = Self::new(sample_rate);
        multi.size = size;
        multi.channels = (0..channels)
            .map(|_| Signal::with_size(sample_rate, size))
            .collect();
        multi
    }

    /// Group existing signals as channels.
    ///
    /// # Panics
    /// Panics if `channels` is empty or the signals differ in rate or length.
    pub fn from_channels<I: IntoIterator<Item = Signal<S>>>(channels: I) -> Self {
        require(Self::try_from_channels(channels))
    }

    pub fn try_from_channels<I: IntoIterator<Item = Signal<S>>>(
        channels: I,
    ) -> Result<Self, DspError> {
        let mut channels = channels.into_iter().peekable();
        let first = channels.peek().ok_or(DspError::EmptyInput)?;
        let mut multi = Self {
            sample_rate: first.sample_rate(),
            size: first.len(),
            channels: Vec::new(),
        };
        for channel in channels {
            multi.try_add_channel(channel)?;
        }
        Ok(multi)
    }

    /// # Panics
    /// Panics if `channel` differs from the existing channels in rate or length.
    pub fn add_channel(&mut self, channel: Signal<S>) {
        require(self.try_add_channel(channel))
    }

    pub fn try_add_channel(&mut self, channel: Signal<S>) -> Result<(), DspError> {
        if channel.sample_rate() != self.sample_rate {
            return Err(DspError::MismatchedSampleRates {
                left: self.sample_rate,
                right: channel.sample_rate(),
            });
        }
        if self.channels.is_empty() && self.size == 0 {
            self.size = channel.len();
        } else if channel.len() != self.size {
            return Err(DspError::MismatchedLengths {
                left: self.size,
                right: channel.len(),
            });
        }
        self.channels.push(channel);
        Ok(())
    }

    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    /// Samples per channel.
    pub fn len(&self) -> usize {
        self.size
    }

    /// `true` when the channels hold no samples.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Length of each channel in seconds.
    pub fn duration(&self) -> f64 {
        self.size as f64 / self.sample_rate as f64
    }

    pub fn channels(&self) -> usize {
        self.channels.len()
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn channel(&self, index: usize) -> &Signal<S> {
        require(self.try_channel(index))
    }

    pub fn try_channel(&self, index: usize) -> Result<&Signal<S>, DspError> {
        let channels = self.channels.len();
        self.channels.get(index).ok_or(DspError::ChannelOutOfRange {
            channel: index,
            channels,
        })
    }

    /// Samples of one channel. The slice cannot change the channel's length.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn channel_mut(&mut self, index: usize) -> &mut [S] {
        let channels = self.channels.len();
        match self.channels.get_mut(index) {
            Some(channel) => channel.as_mut_slice(),
            None => crate::error::precondition_failed(DspError::ChannelOutOfRange {
                channel: index,
                channels,
            }),
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, Signal<S>> {
        self.channels.iter()
    }

    pub fn into_channels(self) -> Vec<Signal<S>> {
        self.channels
    }

    /// FFT of every channel.
    ///
    /// # Panics
    /// Panics if the channels are empty.
    pub fn fft_channels(&self) -> MultiSignal<Complex<S::Real>> {
        self.map_channels(fft)
    }

    #[cfg(feature = "parallel")]
    fn map_channels<U: Sample>(&self, f: fn(&Signal<S>) -> Signal<U>) -> MultiSignal<U> {
        let channels: Vec<Signal<U>> = if self.channels.len() >= parallel_channel_threshold() {
            debug_log!("multi_signal: {} channels in parallel", self.channels.len());
            self.channels.par_iter().map(f).collect()
        } else {
            self.channels.iter().map(f).collect()
        };
        self.with_channels(channels)
    }

    #[cfg(not(feature = "parallel"))]
    fn map_channels<U: Sample>(&self, f: fn(&Signal<S>) -> Signal<U>) -> MultiSignal<U> {
        self.with_channels(self.channels.iter().map(f).collect())
    }

    fn with_channels<U: Sample>(&self, channels: Vec<Signal<U>>) -> MultiSignal<U> {
        MultiSignal {
            sample_rate: self.sample_rate,
            size: self.size,
            channels,
        }
    }
}

impl<T: Float> MultiSignal<Complex<T>> {
    /// Inverse FFT of every channel.
    ///
    /// # Panics
    /// Panics if the channels are empty.
    pub fn ifft_channels(&self) -> MultiSignal<Complex<T>> {
        self.map_channels(ifft)
    }
}

impl<'a, S: Sample> IntoIterator for &'a MultiSignal<S> {
    type Item = &'a Signal<S>;
    type IntoIter = slice::Iter<'a, Signal<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}
