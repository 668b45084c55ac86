use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day17::{self, Tile, SPRING_X};

use super::part;
use crate::board::{Board, BoardKind, Item, ItemKind};
use crate::Solution;

pub fn solve_day17(input: &str, parts: Parts) -> Result<Solution> {
    let reservoir = day17::simulate(&day17::parse_input(input)?);
    Ok(Solution {
        part1: part(parts.first, || Ok(reservoir.wet_tiles().to_string()))?,
        part2: part(parts.second, || Ok(reservoir.settled_tiles().to_string()))?,
        board: None,
    })
}

/// The ground slice once the water has spread.
pub fn render_day17(input: &str) -> Result<Board> {
    let reservoir = day17::simulate(&day17::parse_input(input)?);
    let (height, width) = reservoir.tiles.shape();
    let mut data = vec![Item::cell(
        0,
        SPRING_X - reservoir.x0,
        "blue",
        ItemKind::Text(String::from("+")),
    )];
    for ((y, x), &tile) in reservoir.tiles.iter() {
        data.push(match tile {
            Tile::Sand => continue,
            Tile::Clay => Item::cell(y, x, "saddlebrown", ItemKind::Block),
            Tile::Flowing => Item::cell(y, x, "skyblue", ItemKind::Line),
            Tile::Settled => Item::cell(y, x, "blue", ItemKind::Fill),
        });
    }
    Ok(Board {
        kind: BoardKind::Empty,
        height,
        width,
        data,
    })
}
