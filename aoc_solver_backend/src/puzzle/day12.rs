use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day12;

use super::{found, part};
use crate::Solution;

pub fn solve_day12(input: &str, parts: Parts) -> Result<Solution> {
    let tunnel = day12::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(tunnel.simulate(day12::GENERATIONS).sum().to_string())
        })?,
        part2: part(parts.second, || {
            found(
                tunnel.plant_sum(day12::LONG_GENERATIONS),
                "the plants never settle into a moving pattern",
            )
        })?,
        board: None,
    })
}
