use aoc_core::config::Parts;
use aoc_core::error::Error;
use aoc_core::Result;
use aoc_puzzles::puzzle::day06;

use super::{found, part};
use crate::board::{Board, BoardKind, Item, ItemKind};
use crate::Solution;

const PALETTE: [&str; 6] = ["red", "orange", "green", "blue", "purple", "brown"];

pub fn solve_day06(input: &str, parts: Parts) -> Result<Solution> {
    let points = day06::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            found(day06::largest_finite_area(&points), "no finite area")
        })?,
        part2: part(parts.second, || {
            Ok(day06::safe_region_size(&points, day06::SAFE_DISTANCE).to_string())
        })?,
        board: None,
    })
}

fn label(owner: usize, coordinate: bool) -> String {
    let c = char::from(b'a' + (owner % 26) as u8);
    if coordinate {
        c.to_ascii_uppercase().to_string()
    } else {
        c.to_string()
    }
}

/// Closest coordinate of every location: the coordinates in upper case, the
/// locations they own in lower case, ties as dots.
pub fn render_day06(input: &str) -> Result<Board> {
    let points = day06::parse_input(input)?;
    let map = day06::owner_map(&points).ok_or(Error::NoSolution("no coordinates"))?;
    let (height, width) = map.owners.shape();
    let mut data = vec![];
    for ((y, x), &owner) in map.owners.iter() {
        data.push(match owner {
            Some(i) => Item::cell(y, x, PALETTE[i % PALETTE.len()], ItemKind::Text(label(i, false))),
            None => Item::cell(y, x, "gray", ItemKind::Dot),
        });
    }
    for (i, &(px, py)) in points.iter().enumerate() {
        let y = (py - map.min_y) as usize;
        let x = (px - map.min_x) as usize;
        data.push(Item::cell(y, x, "black", ItemKind::Text(label(i, true))));
    }
    Ok(Board {
        kind: BoardKind::Grid,
        height,
        width,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_day06() {
        let board = render_day06("1, 1\n1, 6\n8, 3\n3, 4\n5, 5\n8, 9\n").unwrap();
        let text = board.to_text();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Aaaa.ccc");
        assert_eq!(lines[3], ".dDdeecc");
        assert_eq!(lines[8], "bb.ffffF");
    }
}
