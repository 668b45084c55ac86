use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day05;

use super::part;
use crate::Solution;

pub fn solve_day05(input: &str, parts: Parts) -> Result<Solution> {
    let polymer = day05::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(day05::reacted_length(&polymer).to_string())
        })?,
        part2: part(parts.second, || {
            Ok(day05::shortest_improved_length(&polymer).to_string())
        })?,
        board: None,
    })
}
