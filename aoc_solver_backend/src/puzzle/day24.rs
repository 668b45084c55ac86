use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day24;

use super::{found, part};
use crate::Solution;

pub fn solve_day24(input: &str, parts: Parts) -> Result<Solution> {
    let groups = day24::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            found(day24::remaining_units(&groups), "the fight ends in a stalemate")
        })?,
        part2: part(parts.second, || {
            found(
                day24::smallest_boost(&groups).map(|(_, units)| units),
                "no boost lets the immune system win",
            )
        })?,
        board: None,
    })
}
