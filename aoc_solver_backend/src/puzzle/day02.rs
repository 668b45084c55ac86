use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day02;

use super::{found, part};
use crate::Solution;

pub fn solve_day02(input: &str, parts: Parts) -> Result<Solution> {
    let ids = day02::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || Ok(day02::checksum(&ids).to_string()))?,
        part2: part(parts.second, || {
            found(day02::common_letters(&ids), "no two ids differ by one letter")
        })?,
        board: None,
    })
}
