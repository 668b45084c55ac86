use aoc_core::error::Error;
use aoc_core::Result;

pub fn parse_input(input: &str) -> Result<Vec<u8>> {
    let polymer = input.trim().as_bytes().to_vec();
    if let Some(&c) = polymer.iter().find(|c| !c.is_ascii_alphabetic()) {
        return Err(Error::parse(
            "polymer",
            format!("unexpected unit {:?}", c as char),
        ));
    }
    Ok(polymer)
}

fn reacts(a: u8, b: u8) -> bool {
    a != b && a.eq_ignore_ascii_case(&b)
}

/// Fully reacted polymer, built in a single pass with the result used as a stack.
pub fn react<I>(units: I) -> Vec<u8>
where
    I: IntoIterator<Item = u8>,
{
    let mut stack: Vec<u8> = vec![];
    for u in units {
        match stack.last() {
            Some(&top) if reacts(top, u) => {
                stack.pop();
            }
            _ => stack.push(u),
        }
    }
    stack
}

/// Removes every non-overlapping reacting pair and rescans until nothing changes.
pub fn react_naive(polymer: &[u8]) -> Vec<u8> {
    let mut current = polymer.to_vec();
    loop {
        let mut next = Vec::with_capacity(current.len());
        let mut i = 0;
        while i < current.len() {
            if i + 1 < current.len() && reacts(current[i], current[i + 1]) {
                i += 2;
            } else {
                next.push(current[i]);
                i += 1;
            }
        }
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

pub fn reacted_length(polymer: &[u8]) -> usize {
    react(polymer.iter().copied()).len()
}

/// Shortest fully reacted length after removing all units of one type.
pub fn shortest_improved_length(polymer: &[u8]) -> usize {
    // Removing a type commutes with reacting, so start from the reacted polymer.
    let reacted = react(polymer.iter().copied());
    (b'a'..=b'z')
        .map(|t| {
            react(reacted.iter().copied().filter(|u| u.to_ascii_lowercase() != t)).len()
        })
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day05_example() {
        let polymer = parse_input("dabAcCaCBAcCcaDA\n").unwrap();
        assert_eq!(react(polymer.iter().copied()), b"dabCBAcaDA".to_vec());
        assert_eq!(reacted_length(&polymer), 10);
        assert_eq!(shortest_improved_length(&polymer), 4);
    }

    #[test]
    fn test_day05_small() {
        assert_eq!(reacted_length(b"aA"), 0);
        assert_eq!(reacted_length(b"abBA"), 0);
        assert_eq!(reacted_length(b"abAB"), 4);
        assert_eq!(reacted_length(b"aabAAB"), 6);
        assert!(parse_input("ab1").is_err());
    }

    #[cfg(feature = "generator")]
    #[test]
    fn test_day05_naive_agrees() {
        use crate::generator::random_polymer;

        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let polymer = random_polymer(&mut rng, 40, 3);
            assert_eq!(
                react_naive(polymer.as_bytes()),
                react(polymer.bytes()),
                "{}",
                polymer
            );
        }
    }
}
