use aoc_core::config::Parts;
use aoc_core::Result;
use aoc_puzzles::items::Direction;
use aoc_puzzles::puzzle::day13::{self, Track};

use super::part;
use crate::board::{Board, BoardKind, Item, ItemKind};
use crate::Solution;

pub fn solve_day13(input: &str, parts: Parts) -> Result<Solution> {
    let mine = day13::parse_input(input)?;
    Ok(Solution {
        part1: part(parts.first, || {
            let (x, y) = mine.clone().first_crash()?;
            Ok(format!("{},{}", x, y))
        })?,
        part2: part(parts.second, || {
            let (x, y) = mine.clone().last_cart()?;
            Ok(format!("{},{}", x, y))
        })?,
        board: None,
    })
}

/// The tracks with the carts at their starting positions and the first crash site.
pub fn render_day13(input: &str) -> Result<Board> {
    let mine = day13::parse_input(input)?;
    let (height, width) = mine.tracks.shape();
    let mut data = vec![];
    for ((y, x), &track) in mine.tracks.iter() {
        let kind = match track {
            Track::Empty => continue,
            Track::Horizontal => ItemKind::Text(String::from("-")),
            Track::Vertical => ItemKind::Line,
            Track::Slash => ItemKind::Text(String::from("/")),
            Track::Backslash => ItemKind::Text(String::from("\\")),
            Track::Intersection => ItemKind::Text(String::from("+")),
        };
        data.push(Item::cell(y, x, "gray", kind));
    }
    for cart in &mine.carts {
        let kind = match cart.dir {
            Direction::Up => ItemKind::SideArrowUp,
            Direction::Right => ItemKind::SideArrowRight,
            Direction::Down => ItemKind::SideArrowDown,
            Direction::Left => ItemKind::SideArrowLeft,
        };
        data.push(Item::cell(cart.y, cart.x, "blue", kind));
    }
    let (x, y) = mine.clone().first_crash()?;
    data.push(Item::cell(y, x, "red", ItemKind::Cross));
    Ok(Board {
        kind: BoardKind::Empty,
        height,
        width,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r"/->-\
|   |  /----\
| /-+--+-\  |
| | |  | v  |
\-+-/  \-+--/
  \------/
";

    #[test]
    fn test_render_day13() {
        let board = render_day13(EXAMPLE).unwrap();
        let expected = [
            r"/->-\        ",
            r"|   |  /----\",
            r"| /-+--+-\  |",
            r"| | |  X v  |",
            r"\-+-/  \-+--/",
            r"  \------/   ",
        ];
        assert_eq!(board.to_text(), expected.join("\n") + "\n");
    }
}
