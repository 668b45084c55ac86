use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day10;

use super::part;
use crate::board::{Board, BoardKind, Item, ItemKind};
use crate::Solution;

pub fn solve_day10(input: &str, parts: Parts) -> Result<Solution> {
    let lights = day10::parse_input(input)?;
    let time = day10::convergence_time(&lights);
    Ok(Solution {
        part1: part(parts.first, || {
            Ok(format!("\n{}", day10::message(&lights, time).trim_end()))
        })?,
        part2: part(parts.second, || Ok(time.to_string()))?,
        board: None,
    })
}

/// The message in the sky at the moment the lights converge.
pub fn render_day10(input: &str) -> Result<Board> {
    let lights = day10::parse_input(input)?;
    let sky = day10::sky_at(&lights, day10::convergence_time(&lights));
    let (height, width) = sky.shape();
    let data = sky
        .iter()
        .filter(|&(_, &lit)| lit)
        .map(|((y, x), _)| Item::cell(y, x, "black", ItemKind::Block))
        .collect();
    Ok(Board {
        kind: BoardKind::Grid,
        height,
        width,
        data,
    })
}
