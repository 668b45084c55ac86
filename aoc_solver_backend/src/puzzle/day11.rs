use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day11::{self, PowerGrid};

use super::{found, part};
use crate::Solution;

pub fn solve_day11(input: &str, parts: Parts) -> Result<Solution> {
    let grid = PowerGrid::new(day11::parse_input(input)?);
    Ok(Solution {
        part1: part(parts.first, || {
            found(
                grid.best_square(3).map(|s| format!("{},{}", s.x, s.y)),
                "the grid is too small",
            )
        })?,
        part2: part(parts.second, || {
            found(
                grid.best_square_any_size()
                    .map(|s| format!("{},{},{}", s.x, s.y, s.size)),
                "the grid is empty",
            )
        })?,
        board: None,
    })
}
