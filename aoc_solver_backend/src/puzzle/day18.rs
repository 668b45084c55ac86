use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day18::{self, Acre};

use super::part;
use crate::board::{Board, BoardKind, Item, ItemKind};
use crate::Solution;

pub fn solve_day18(input: &str, parts: Parts) -> Result<Solution> {
    let area = day18::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            let after = day18::area_after(&area, day18::SHORT_MINUTES);
            Ok(day18::resource_value(&after).to_string())
        })?,
        part2: part(parts.second, || {
            let after = day18::area_after(&area, day18::LONG_MINUTES);
            Ok(day18::resource_value(&after).to_string())
        })?,
        board: None,
    })
}

/// The lumber collection area after ten minutes.
pub fn render_day18(input: &str) -> Result<Board> {
    let area = day18::area_after(&day18::parse_input(input)?, day18::SHORT_MINUTES);
    let (height, width) = area.shape();
    let data = area
        .iter()
        .map(|((y, x), &acre)| {
            let color = match acre {
                Acre::Open => "gray",
                Acre::Trees => "green",
                Acre::Lumberyard => "saddlebrown",
            };
            Item::cell(y, x, color, ItemKind::Text(acre.to_char().to_string()))
        })
        .collect();
    Ok(Board {
        kind: BoardKind::Grid,
        height,
        width,
        data,
    })
}
