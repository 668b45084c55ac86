use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day03;

use super::{found, part};
use crate::Solution;

pub fn solve_day03(input: &str, parts: Parts) -> Result<Solution> {
    let claims = day03::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(day03::count_overlapping(&claims).to_string())
        })?,
        part2: part(parts.second, || {
            found(day03::intact_claim(&claims), "every claim overlaps another")
        })?,
        board: None,
    })
}
