use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day22;

use super::{found, part};
use crate::Solution;

pub fn solve_day22(input: &str, parts: Parts) -> Result<Solution> {
    let scan = day22::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || Ok(day22::total_risk(scan).to_string()))?,
        part2: part(parts.second, || {
            found(day22::fastest_rescue(scan), "the target cannot be reached")
        })?,
        board: None,
    })
}
