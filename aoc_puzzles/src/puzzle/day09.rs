use std::collections::VecDeque;

use aoc_core::parser::{parse_all, unsigned};
use aoc_core::Result;
use nom::{
    bytes::complete::tag,
    sequence::{separated_pair, terminated},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    pub players: usize,
    pub last_marble: u64,
}

pub fn parse_input(input: &str) -> Result<Game> {
    let (players, last_marble) = parse_all(
        input.trim_start(),
        separated_pair(
            unsigned,
            tag(" players; last marble is worth "),
            terminated(unsigned, tag(" points")),
        ),
        "marble game",
    )?;
    Ok(Game {
        players,
        last_marble,
    })
}

/// Highest score of the game. The current marble is kept at the back of the ring.
pub fn high_score(game: &Game) -> u64 {
    if game.players == 0 {
        return 0;
    }
    let mut ring = VecDeque::with_capacity(game.last_marble as usize + 1);
    ring.push_back(0u64);
    let mut scores = vec![0u64; game.players];

    for marble in 1..=game.last_marble {
        if marble % 23 == 0 {
            ring.rotate_right(7 % ring.len());
            let removed = ring.pop_back().unwrap_or(0);
            scores[((marble - 1) % game.players as u64) as usize] += marble + removed;
            if !ring.is_empty() {
                ring.rotate_left(1);
            }
        } else {
            ring.rotate_left(1 % ring.len());
            ring.push_back(marble);
        }
    }
    scores.into_iter().max().unwrap_or(0)
}

/// The same game with a last marble 100 times larger.
pub fn high_score_extended(game: &Game) -> u64 {
    high_score(&Game {
        players: game.players,
        last_marble: game.last_marble * 100,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day09_parse() {
        assert_eq!(
            parse_input("9 players; last marble is worth 25 points\n").unwrap(),
            Game {
                players: 9,
                last_marble: 25
            }
        );
        assert!(parse_input("9 players; last marble is worth 25").is_err());
    }

    #[test]
    fn test_day09_examples() {
        let score = |players, last_marble| {
            high_score(&Game {
                players,
                last_marble,
            })
        };
        assert_eq!(score(9, 25), 32);
        assert_eq!(score(10, 1618), 8317);
        assert_eq!(score(13, 7999), 146373);
        assert_eq!(score(17, 1104), 2764);
        assert_eq!(score(21, 6111), 54718);
        assert_eq!(score(30, 5807), 37305);
    }
}
