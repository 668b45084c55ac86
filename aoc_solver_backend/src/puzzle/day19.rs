use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day19;

use super::part;
use crate::Solution;

pub fn solve_day19(input: &str, parts: Parts) -> Result<Solution> {
    let program = day19::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(day19::register0_after_halt(&program, 0, day19::MAX_CYCLES)?.to_string())
        })?,
        part2: part(parts.second, || {
            Ok(day19::divisor_sum_shortcut(&program, 1)?.to_string())
        })?,
        board: None,
    })
}
