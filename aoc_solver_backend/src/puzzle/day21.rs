use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day21::{self, HaltHash};

use super::{found, part};
use crate::Solution;

pub fn solve_day21(input: &str, parts: Parts) -> Result<Solution> {
    let hash = HaltHash::from_program(&day21::parse_input(input)?)?;
    Ok(Solution {
        part1: part(parts.first, || {
            found(day21::fastest_halt(hash), "the program never halts")
        })?,
        part2: part(parts.second, || {
            found(day21::slowest_halt(hash), "the program never halts")
        })?,
        board: None,
    })
}
