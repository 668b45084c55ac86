use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day09;

use super::part;
use crate::Solution;

pub fn solve_day09(input: &str, parts: Parts) -> Result<Solution> {
    let game = day09::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || Ok(day09::high_score(&game).to_string()))?,
        part2: part(parts.second, || {
            Ok(day09::high_score_extended(&game).to_string())
        })?,
        board: None,
    })
}
