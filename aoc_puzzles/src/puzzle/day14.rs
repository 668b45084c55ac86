use aoc_core::error::Error;
use aoc_core::Result;

/// The puzzle input is used both as a count and as a digit sequence.
pub fn parse_input(input: &str) -> Result<String> {
    let s = input.trim();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::parse("recipes", format!("expected digits, got {:?}", s)));
    }
    Ok(String::from(s))
}

pub struct Scoreboard {
    pub scores: Vec<u8>,
    elves: [usize; 2],
}

impl Scoreboard {
    pub fn new() -> Scoreboard {
        Scoreboard {
            scores: vec![3, 7],
            elves: [0, 1],
        }
    }

    /// Creates new recipes from the current two; returns how many were appended.
    pub fn step(&mut self) -> usize {
        let [a, b] = self.elves;
        let sum = self.scores[a] + self.scores[b];
        let added = if sum >= 10 {
            self.scores.push(sum / 10);
            self.scores.push(sum % 10);
            2
        } else {
            self.scores.push(sum);
            1
        };
        let n = self.scores.len();
        self.elves = [
            (a + 1 + self.scores[a] as usize) % n,
            (b + 1 + self.scores[b] as usize) % n,
        ];
        added
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Scoreboard::new()
    }
}

/// The ten scores right after the first `n` recipes.
pub fn ten_scores_after(n: usize) -> String {
    let mut board = Scoreboard::new();
    while board.scores.len() < n + 10 {
        board.step();
    }
    board.scores[n..n + 10]
        .iter()
        .map(|&d| char::from(b'0' + d))
        .collect()
}

/// Number of recipes to the left of the first occurrence of `digits`.
pub fn recipes_before(digits: &str) -> usize {
    let pattern = digits.bytes().map(|b| b - b'0').collect::<Vec<_>>();
    if pattern.is_empty() {
        return 0;
    }
    let mut board = Scoreboard::new();
    let mut checked = 0;
    loop {
        while checked + pattern.len() <= board.scores.len() {
            if board.scores[checked..checked + pattern.len()] == pattern[..] {
                return checked;
            }
            checked += 1;
        }
        board.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day14_scoreboard() {
        let mut board = Scoreboard::new();
        assert_eq!(board.step(), 2);
        assert_eq!(board.scores, vec![3, 7, 1, 0]);
        assert_eq!(board.step(), 2);
        assert_eq!(board.scores, vec![3, 7, 1, 0, 1, 0]);
        assert_eq!(board.step(), 1);
        assert_eq!(board.scores, vec![3, 7, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_day14_ten_scores() {
        assert_eq!(ten_scores_after(9), "5158916779");
        assert_eq!(ten_scores_after(5), "0124515891");
        assert_eq!(ten_scores_after(18), "9251071085");
        assert_eq!(ten_scores_after(2018), "5941429882");
    }

    #[test]
    fn test_day14_recipes_before() {
        assert_eq!(recipes_before("51589"), 9);
        assert_eq!(recipes_before("01245"), 5);
        assert_eq!(recipes_before("92510"), 18);
        assert_eq!(recipes_before("59414"), 2018);
    }

    #[test]
    fn test_day14_parse() {
        assert_eq!(parse_input("01245\n").unwrap(), "01245");
        assert!(parse_input("12a\n").is_err());
    }
}
