use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day20;

use super::part;
use crate::Solution;

pub fn solve_day20(input: &str, parts: Parts) -> Result<Solution> {
    let facility = day20::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(day20::furthest_room(&facility).to_string())
        })?,
        part2: part(parts.second, || {
            Ok(day20::rooms_at_least(&facility, day20::DOOR_THRESHOLD).to_string())
        })?,
        board: None,
    })
}
