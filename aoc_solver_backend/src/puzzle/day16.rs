use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day16;

use super::{found, part};
use crate::Solution;

pub fn solve_day16(input: &str, parts: Parts) -> Result<Solution> {
    let manual = day16::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(day16::count_ambiguous_samples(&manual.samples).to_string())
        })?,
        part2: part(parts.second, || {
            found(
                day16::register0_after_program(&manual),
                "the samples do not pin down every opcode",
            )
        })?,
        board: None,
    })
}
