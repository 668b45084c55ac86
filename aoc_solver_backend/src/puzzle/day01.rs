use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day01;

use super::{found, part};
use crate::Solution;

pub fn solve_day01(input: &str, parts: Parts) -> Result<Solution> {
    let deltas = day01::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(day01::resulting_frequency(&deltas).to_string())
        })?,
        part2: part(parts.second, || {
            found(
                day01::first_repeated_frequency(&deltas),
                "the frequency never repeats",
            )
        })?,
        board: None,
    })
}
