use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day08;

use super::part;
use crate::Solution;

pub fn solve_day08(input: &str, parts: Parts) -> Result<Solution> {
    let root = day08::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || Ok(day08::metadata_sum(&root).to_string()))?,
        part2: part(parts.second, || Ok(day08::node_value(&root).to_string()))?,
        board: None,
    })
}
