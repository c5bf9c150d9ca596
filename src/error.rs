use core::fmt;

/// Precondition violations detected by the checked (`try_*`) entry points.
///
/// The unchecked entry points treat the same conditions as programmer
/// errors and panic with this type's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DspError {
    /// The operation needs at least one sample.
    EmptyInput,
    /// Paired operands differ in length.
    MismatchedLengths { left: usize, right: usize },
    /// Paired operands differ in sample rate.
    MismatchedSampleRates { left: usize, right: usize },
    /// A power-of-two-only primitive was handed another length.
    NonPowerOfTwo(usize),
    /// Sample rates must be strictly positive.
    InvalidSampleRate,
    /// Channel index past the end of a multi-channel signal.
    ChannelOutOfRange { channel: usize, channels: usize },
}

impl fmt::Display for DspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DspError::EmptyInput => write!(f, "input signal is empty"),
            DspError::MismatchedLengths { left, right } => {
                write!(f, "signal lengths differ ({} vs {})", left, right)
            }
            DspError::MismatchedSampleRates { left, right } => {
                write!(f, "sample rates differ ({} Hz vs {} Hz)", left, right)
            }
            DspError::NonPowerOfTwo(n) => write!(f, "length {} is not a power of two", n),
            DspError::InvalidSampleRate => write!(f, "sample rate must be greater than zero"),
            DspError::ChannelOutOfRange { channel, channels } => {
                write!(f, "channel {channel} out of range ({channels} channels)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DspError {}

/// Panic with the error message of a failed precondition check.
#[cold]
#[track_caller]
pub(crate) fn precondition_failed(err: DspError) -> ! {
    panic!("precondition violated: {}", err)
}

/// Unwrap a checked result, failing fast on a precondition violation.
#[inline]
#[track_caller]
pub(crate) fn require<V>(result: Result<V, DspError>) -> V {
    match result {
        Ok(v) => v,
        Err(err) => precondition_failed(err),
    }
}
