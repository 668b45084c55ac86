use aoc_core::error::Error;
use aoc_core::parser::{parse_line, parse_lines};
use aoc_core::Result;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::value,
    multi::{count, many1},
    sequence::{preceded, separated_pair},
    IResult,
};
use tracing::debug;

pub const GENERATIONS: u64 = 20;
pub const LONG_GENERATIONS: u64 = 50_000_000_000;

/// Generations simulated before giving up on finding a stable pattern.
const MAX_SIMULATED: u64 = 100_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pots {
    /// Number of the first pot in `plants`.
    pub offset: i64,
    /// Trimmed so that the first and last entries hold plants.
    pub plants: Vec<bool>,
}

impl Pots {
    fn new(offset: i64, plants: Vec<bool>) -> Pots {
        match plants.iter().position(|&p| p) {
            Some(first) => {
                let last = plants.iter().rposition(|&p| p).unwrap_or(first);
                Pots {
                    offset: offset + first as i64,
                    plants: plants[first..=last].to_vec(),
                }
            }
            None => Pots {
                offset: 0,
                plants: vec![],
            },
        }
    }

    pub fn sum(&self) -> i64 {
        self.plants
            .iter()
            .enumerate()
            .filter(|(_, &p)| p)
            .map(|(i, _)| self.offset + i as i64)
            .sum()
    }

    pub fn count(&self) -> usize {
        self.plants.iter().filter(|&&p| p).count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tunnel {
    pub initial: Pots,
    /// Next state of a pot indexed by its neighbourhood `LLCRR` read as a 5-bit number.
    pub rules: [bool; 32],
}

fn pot(input: &str) -> IResult<&str, bool> {
    alt((value(true, char('#')), value(false, char('.'))))(input)
}

fn rule(input: &str) -> IResult<&str, (Vec<bool>, bool)> {
    separated_pair(count(pot, 5), tag(" => "), pot)(input)
}

fn pattern_index(pattern: &[bool]) -> usize {
    pattern.iter().fold(0, |acc, &p| acc * 2 + p as usize)
}

pub fn parse_input(input: &str) -> Result<Tunnel> {
    let mut lines = input.lines().skip_while(|line| line.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| Error::parse("initial state", "empty input"))?;
    let initial = parse_line(header, preceded(tag("initial state: "), many1(pot)), "initial state")?;

    let mut rules = [false; 32];
    let rest = lines.collect::<Vec<_>>().join("\n");
    for (pattern, next) in parse_lines(&rest, rule, "rules")? {
        rules[pattern_index(&pattern)] = next;
    }
    if rules[0] {
        return Err(Error::parse(
            "rules",
            "empty pots must stay empty, otherwise the row fills up infinitely",
        ));
    }
    Ok(Tunnel {
        initial: Pots::new(0, initial),
        rules,
    })
}

impl Tunnel {
    pub fn step(&self, pots: &Pots) -> Pots {
        let n = pots.plants.len() as i64;
        let at = |i: i64| i >= 0 && i < n && pots.plants[i as usize];
        // Only pots within two of an existing plant can change.
        let next = (-2..n + 2)
            .map(|i| {
                let idx = (i - 2..=i + 2).fold(0, |acc, j| acc * 2 + at(j) as usize);
                self.rules[idx]
            })
            .collect();
        Pots::new(pots.offset - 2, next)
    }

    pub fn simulate(&self, generations: u64) -> Pots {
        let mut pots = self.initial.clone();
        for _ in 0..generations {
            pots = self.step(&pots);
        }
        pots
    }

    /// Sum of the numbers of pots with plants after `generations`. Once the
    /// pattern repeats with only its offset shifted, the rest is extrapolated.
    /// `None` if no such repetition is found in time.
    pub fn plant_sum(&self, generations: u64) -> Option<i64> {
        let mut pots = self.initial.clone();
        let mut gen = 0;
        while gen < generations {
            if gen >= MAX_SIMULATED {
                return None;
            }
            let next = self.step(&pots);
            gen += 1;
            if next.plants == pots.plants {
                let shift = next.offset - pots.offset;
                let remaining = (generations - gen) as i64;
                debug!(
                    "pattern is stable after {} generations (shift {})",
                    gen, shift
                );
                return Some(next.sum() + remaining * shift * next.count() as i64);
            }
            pots = next;
        }
        Some(pots.sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "initial state: #..#.#..##......###...###

...## => #
..#.. => #
.#... => #
.#.#. => #
.#.## => #
.##.. => #
.#### => #
#.#.# => #
#.### => #
##.#. => #
##.## => #
###.. => #
###.# => #
####. => #
";

    #[test]
    fn test_day12_example() {
        let tunnel = parse_input(EXAMPLE).unwrap();
        assert_eq!(tunnel.initial.count(), 11);

        let pots = tunnel.simulate(1);
        assert_eq!(pots.offset, 0);
        assert_eq!(pots.sum(), 0 + 4 + 9 + 15 + 18 + 21 + 24);

        let pots = tunnel.simulate(20);
        assert_eq!(pots.offset, -2);
        assert_eq!(pots.sum(), 325);
        assert_eq!(tunnel.plant_sum(GENERATIONS), Some(325));
    }

    #[test]
    fn test_day12_extrapolation_matches_simulation() {
        let tunnel = parse_input(EXAMPLE).unwrap();
        for generations in [150, 200, 500] {
            assert_eq!(
                tunnel.plant_sum(generations),
                Some(tunnel.simulate(generations).sum())
            );
        }
    }

    #[test]
    fn test_day12_glider() {
        let tunnel = parse_input("initial state: #\n\n.#... => #\n").unwrap();
        assert_eq!(tunnel.plant_sum(LONG_GENERATIONS), Some(50_000_000_000));
    }

    #[test]
    fn test_day12_invalid_rules() {
        assert!(parse_input("initial state: #\n\n..... => #\n").is_err());
        assert!(parse_input("initial state: #\n\n.#.. => #\n").is_err());
        assert!(parse_input("state: #\n").is_err());
    }
}
