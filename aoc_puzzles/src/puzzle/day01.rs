use std::collections::HashSet;

use aoc_core::parser::{integer, parse_lines};
use aoc_core::Result;

pub fn parse_input(input: &str) -> Result<Vec<i64>> {
    parse_lines(input, integer, "frequency changes")
}

pub fn resulting_frequency(deltas: &[i64]) -> i64 {
    deltas.iter().sum()
}

/// First frequency reached twice while applying `deltas` over and over.
/// `None` if the frequency drifts away without ever repeating.
pub fn first_repeated_frequency(deltas: &[i64]) -> Option<i64> {
    if deltas.is_empty() {
        return None;
    }
    let total = resulting_frequency(deltas);
    let mut lo = 0;
    let mut hi = 0;
    let mut freq = 0;
    for &d in deltas {
        freq += d;
        lo = lo.min(freq);
        hi = hi.max(freq);
    }
    // After this many passes every later value is a shifted copy of one already seen.
    let passes = if total == 0 {
        2
    } else {
        (hi - lo) / total.abs() + 2
    };

    let mut seen = HashSet::new();
    let mut freq = 0;
    seen.insert(freq);
    for _ in 0..passes {
        for &d in deltas {
            freq += d;
            if !seen.insert(freq) {
                return Some(freq);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day01_part1() {
        let deltas = parse_input("+1\n-2\n+3\n+1\n").unwrap();
        assert_eq!(resulting_frequency(&deltas), 3);
        assert_eq!(resulting_frequency(&[1, 1, -2]), 0);
        assert_eq!(resulting_frequency(&[-1, -2, -3]), -6);
    }

    #[test]
    fn test_day01_part2() {
        assert_eq!(first_repeated_frequency(&[1, -2, 3, 1]), Some(2));
        assert_eq!(first_repeated_frequency(&[1, -1]), Some(0));
        assert_eq!(first_repeated_frequency(&[3, 3, 4, -2, -4]), Some(10));
        assert_eq!(first_repeated_frequency(&[-6, 3, 8, 5, -6]), Some(5));
        assert_eq!(first_repeated_frequency(&[7, 7, -2, -7, -4]), Some(14));
    }

    #[test]
    fn test_day01_never_repeats() {
        assert_eq!(first_repeated_frequency(&[1]), None);
        assert_eq!(first_repeated_frequency(&[]), None);
    }
}
