use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day25;

use super::part;
use crate::Solution;

/// The last day has a single puzzle; the second star comes for free.
pub fn solve_day25(input: &str, parts: Parts) -> Result<Solution> {
    let points = day25::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(day25::constellations(&points).to_string())
        })?,
        part2: None,
        board: None,
    })
}
