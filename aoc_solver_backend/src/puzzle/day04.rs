use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day04;
use tracing::debug;

use super::{found, part};
use crate::Solution;

pub fn solve_day04(input: &str, parts: Parts) -> Result<Solution> {
    let guards = day04::parse_input(input)?;
    for (id, record) in &guards {
        debug!(
            "guard #{}: {} shifts, {:.1} minutes asleep per shift",
            id,
            record.shifts,
            record.sleep_per_shift()
        );
    }
    Ok(Solution {
        part1: part(parts.first, || {
            found(day04::strategy1(&guards), "no guard ever sleeps")
        })?,
        part2: part(parts.second, || {
            found(day04::strategy2(&guards), "no guard ever sleeps")
        })?,
        board: None,
    })
}
