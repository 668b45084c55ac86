use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day23;

use super::{found, part};
use crate::Solution;

pub fn solve_day23(input: &str, parts: Parts) -> Result<Solution> {
    let bots = day23::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(day23::in_range_of_strongest(&bots).to_string())
        })?,
        part2: part(parts.second, || {
            found(
                day23::best_position(&bots).map(|(_, dist)| dist),
                "there are no nanobots",
            )
        })?,
        board: None,
    })
}
