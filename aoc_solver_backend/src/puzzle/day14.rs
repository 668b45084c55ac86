use aoc_core::config::Parts;
use aoc_core::error::Error;
use aoc_core::Result;
use aoc_puzzles::puzzle::day14;

use super::part;
use crate::Solution;

pub fn solve_day14(input: &str, parts: Parts) -> Result<Solution> {
    let digits = day14::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            let n = digits
                .parse::<usize>()
                .map_err(|e| Error::parse("recipes", e.to_string()))?;
            Ok(day14::ten_scores_after(n))
        })?,
        part2: part(parts.second, || {
            Ok(day14::recipes_before(&digits).to_string())
        })?,
        board: None,
    })
}
