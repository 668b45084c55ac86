use std::collections::HashMap;

use aoc_core::Result;
use aoc_core::error::Error;

pub fn parse_input(input: &str) -> Result<Vec<String>> {
    let ids = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect::<Vec<_>>();
    if let Some(id) = ids.iter().find(|id| !id.chars().all(|c| c.is_ascii_alphabetic())) {
        return Err(Error::parse("box ids", format!("invalid id {:?}", id)));
    }
    Ok(ids)
}

pub fn checksum(ids: &[String]) -> usize {
    let mut twice = 0;
    let mut thrice = 0;
    for id in ids {
        let mut counts = HashMap::new();
        for c in id.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        if counts.values().any(|&n| n == 2) {
            twice += 1;
        }
        if counts.values().any(|&n| n == 3) {
            thrice += 1;
        }
    }
    twice * thrice
}

/// Letters shared by the two ids that differ at exactly one position.
pub fn common_letters(ids: &[String]) -> Option<String> {
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            if a.len() != b.len() {
                continue;
            }
            let n_diff = a.chars().zip(b.chars()).filter(|(p, q)| p != q).count();
            if n_diff == 1 {
                return Some(
                    a.chars()
                        .zip(b.chars())
                        .filter(|(p, q)| p == q)
                        .map(|(p, _)| p)
                        .collect(),
                );
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day02_checksum() {
        let ids = parse_input("abcdef\nbababc\nabbcde\nabcccd\naabcdd\nabcdee\nababab\n").unwrap();
        assert_eq!(checksum(&ids), 12);
    }

    #[test]
    fn test_day02_common_letters() {
        let ids = parse_input("abcde\nfghij\nklmno\npqrst\nfguij\naxcye\nwvxyz\n").unwrap();
        assert_eq!(common_letters(&ids), Some(String::from("fgij")));
        assert_eq!(common_letters(&ids[..2]), None);
    }

    #[test]
    fn test_day02_invalid_id() {
        assert!(parse_input("abc\nab1\n").is_err());
    }
}
