use sigfft::{is_even, is_power_of_two, next_power_of_two};

#[test]
fn powers_of_two_are_exactly_the_single_bit_values() {
    let powers: Vec<usize> = (0..=1024).filter(|&n| is_power_of_two(n)).collect();
    assert_eq!(powers, vec![1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024]);
}

#[test]
fn next_power_examples() {
    assert_eq!(next_power_of_two(5), 8);
    assert_eq!(next_power_of_two(8), 8);
    assert_eq!(next_power_of_two(1), 1);
    assert_eq!(next_power_of_two(2 * 100 - 1), 256);
}

#[test]
fn next_power_is_tight() {
    for n in 1..=4096usize {
        let p = next_power_of_two(n);
        assert!(is_power_of_two(p));
        assert!(p >= n && p / 2 < n, "n={n} p={p}");
    }
}

#[test]
fn parity() {
    assert!(is_even(0) && is_even(2) && is_even(100));
    assert!(!is_even(1) && !is_even(7));
}
