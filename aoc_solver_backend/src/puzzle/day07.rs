use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day07;

use super::{found, part};
use crate::Solution;

pub fn solve_day07(input: &str, parts: Parts) -> Result<Solution> {
    let steps = day07::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            found(day07::step_order(&steps), "the instructions contain a cycle")
        })?,
        part2: part(parts.second, || {
            found(
                day07::completion_time(&steps, day07::WORKERS, day07::BASE_TIME),
                "the instructions contain a cycle",
            )
        })?,
        board: None,
    })
}
