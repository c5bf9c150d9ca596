//! Integer helpers used to pick transform sizes.

/// `true` when `value` is divisible by two.
#[inline]
pub const fn is_even(value: usize) -> bool {
    value % 2 == 0
}

/// `true` when `value` is a nonzero power of two.
#[inline]
pub const fn is_power_of_two(value: usize) -> bool {
    value != 0 && (value & (value - 1)) == 0
}

/// Smallest power of two greater than or equal to `value`.
///
/// Zero maps to one, matching a doubling search that starts at one.
///
/// # Panics
/// Panics if the result does not fit in `usize` (`value` above `usize::MAX / 2 + 1`).
#[inline]
pub const fn next_power_of_two(value: usize) -> usize {
    let mut result = 1usize;
    while result < value {
        result = match result.checked_mul(2) {
            Some(r) => r,
            None => panic!("next power of two overflows usize"),
        };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity() {
        assert!(is_even(0));
        assert!(!is_even(1));
        assert!(is_even(10));
        assert!(!is_even(99));
    }

    #[test]
    fn powers_of_two() {
        for shift in 0..usize::BITS {
            assert!(is_power_of_two(1usize << shift));
        }
        for value in [0usize, 3, 5, 6, 7, 9, 12, 100, 1023] {
            assert!(!is_power_of_two(value), "{value}");
        }
    }

    #[test]
    fn next_power() {
        assert_eq!(next_power_of_two(0), 1);
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(2), 2);
        assert_eq!(next_power_of_two(5), 8);
        assert_eq!(next_power_of_two(8), 8);
        assert_eq!(next_power_of_two(9), 16);
        assert_eq!(next_power_of_two(199), 256);
        assert_eq!(next_power_of_two(usize::MAX / 2 + 1), usize::MAX / 2 + 1);
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn next_power_overflow() {
        next_power_of_two(usize::MAX / 2 + 2);
    }
}
