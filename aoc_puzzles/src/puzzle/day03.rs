use aoc_core::parser::{parse_lines, unsigned};
use aoc_core::util::Grid;
use aoc_core::Result;
use nom::{
    bytes::complete::tag,
    combinator::map,
    sequence::{preceded, separated_pair, tuple},
    IResult,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Claim {
    pub id: u32,
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

fn claim(input: &str) -> IResult<&str, Claim> {
    map(
        tuple((
            preceded(tag("#"), unsigned),
            preceded(tag(" @ "), separated_pair(unsigned, tag(","), unsigned)),
            preceded(tag(": "), separated_pair(unsigned, tag("x"), unsigned)),
        )),
        |(id, (left, top), (width, height))| Claim {
            id,
            left,
            top,
            width,
            height,
        },
    )(input)
}

pub fn parse_input(input: &str) -> Result<Vec<Claim>> {
    parse_lines(input, claim, "claims")
}

fn claim_counts(claims: &[Claim]) -> Grid<u32> {
    let height = claims.iter().map(|c| c.top + c.height).max().unwrap_or(0);
    let width = claims.iter().map(|c| c.left + c.width).max().unwrap_or(0);
    let mut counts = Grid::new(height, width, 0);
    for c in claims {
        for y in c.top..(c.top + c.height) {
            for x in c.left..(c.left + c.width) {
                counts[(y, x)] += 1;
            }
        }
    }
    counts
}

pub fn count_overlapping(claims: &[Claim]) -> usize {
    claim_counts(claims).values().filter(|&&n| n >= 2).count()
}

/// Id of the claim that overlaps no other claim. `None` unless exactly one such claim exists.
pub fn intact_claim(claims: &[Claim]) -> Option<u32> {
    let counts = claim_counts(claims);
    let mut intact = claims.iter().filter(|c| {
        (c.top..(c.top + c.height))
            .all(|y| (c.left..(c.left + c.width)).all(|x| counts[(y, x)] == 1))
    });
    let first = intact.next()?;
    if intact.next().is_some() {
        return None;
    }
    Some(first.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "#1 @ 1,3: 4x4\n#2 @ 3,1: 4x4\n#3 @ 5,5: 2x2\n";

    #[test]
    fn test_day03_parse() {
        let claims = parse_input(EXAMPLE).unwrap();
        assert_eq!(
            claims[1],
            Claim {
                id: 2,
                left: 3,
                top: 1,
                width: 4,
                height: 4
            }
        );
        assert!(parse_input("#1 @ 1,3 4x4\n").is_err());
    }

    #[test]
    fn test_day03_example() {
        let claims = parse_input(EXAMPLE).unwrap();
        assert_eq!(count_overlapping(&claims), 4);
        assert_eq!(intact_claim(&claims), Some(3));
    }
}
