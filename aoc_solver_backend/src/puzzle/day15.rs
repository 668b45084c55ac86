use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::puzzle::day15::{self, Battle, Race};

use super::{found, part};
use crate::board::{Board, BoardKind, Item, ItemKind};
use crate::Solution;

pub fn solve_day15(input: &str, parts: Parts) -> Result<Solution> {
    let cave = day15::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            found(
                day15::outcome(&cave).map(|o| o.score()),
                "nobody survives",
            )
        })?,
        part2: part(parts.second, || {
            found(
                day15::weakest_flawless_victory(&cave).map(|(_, o)| o.score()),
                "the elves cannot win without losses",
            )
        })?,
        board: None,
    })
}

/// The cave at the end of the battle, survivors labelled with their hit points.
pub fn render_day15(input: &str) -> Result<Board> {
    let cave = day15::parse_input(input)?;
    let mut battle = Battle::new(&cave, day15::ATTACK_POWER);
    battle.run(false);
    let (height, width) = cave.walls.shape();
    let mut data = vec![];
    for ((y, x), &wall) in cave.walls.iter() {
        if wall {
            data.push(Item::cell(y, x, "black", ItemKind::Block));
        }
    }
    for unit in battle.units.iter().filter(|u| u.is_alive()) {
        let (y, x) = unit.pos;
        let color = match unit.race {
            Race::Elf => "green",
            Race::Goblin => "red",
        };
        data.push(Item::cell(y, x, color, ItemKind::Num(unit.hp as i64)));
        data.push(Item::cell(
            y,
            x,
            color,
            ItemKind::Text(unit.race.to_char().to_string()),
        ));
    }
    Ok(Board {
        kind: BoardKind::Grid,
        height,
        width,
        data,
    })
}
