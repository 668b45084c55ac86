use aoc_core::error::{Error, Result};
use aoc_core::util::Grid;
use tracing::debug;

use crate::items::Direction;

const MAX_TICKS: usize = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Track {
    Empty,
    Horizontal,
    Vertical,
    /// `/`
    Slash,
    /// `\`
    Backslash,
    Intersection,
}

impl Track {
    fn to_char(self) -> char {
        match self {
            Track::Empty => ' ',
            Track::Horizontal => '-',
            Track::Vertical => '|',
            Track::Slash => '/',
            Track::Backslash => '\\',
            Track::Intersection => '+',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cart {
    pub y: usize,
    pub x: usize,
    pub dir: Direction,
    /// Number of intersections passed; picks left, straight, right in turn.
    pub turns: u32,
}

#[derive(Clone, Debug)]
pub struct Mine {
    pub tracks: Grid<Track>,
    pub carts: Vec<Cart>,
}

pub fn parse_input(input: &str) -> Result<Mine> {
    let chars = Grid::from_lines(input, ' ', |c| match c {
        ' ' | '-' | '|' | '/' | '\\' | '+' | '<' | '>' | '^' | 'v' => Some(c),
        _ => None,
    })?;
    let mut tracks = Grid::new(chars.height(), chars.width(), Track::Empty);
    let mut carts = vec![];
    for ((y, x), &c) in chars.iter() {
        let dir = match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        };
        if let Some(dir) = dir {
            carts.push(Cart {
                y,
                x,
                dir,
                turns: 0,
            });
        }
        tracks[(y, x)] = match c {
            '-' | '<' | '>' => Track::Horizontal,
            '|' | '^' | 'v' => Track::Vertical,
            '/' => Track::Slash,
            '\\' => Track::Backslash,
            '+' => Track::Intersection,
            _ => Track::Empty,
        };
    }
    Ok(Mine { tracks, carts })
}

impl Mine {
    fn advance(&self, cart: &mut Cart) -> Result<()> {
        let (dy, dx) = cart.dir.delta();
        let y = cart.y as i64 + dy;
        let x = cart.x as i64 + dx;
        let track = if y >= 0 && x >= 0 {
            self.tracks.get(y as usize, x as usize).copied()
        } else {
            None
        };
        let track = match track {
            Some(t) if t != Track::Empty => t,
            _ => return Err(Error::NoSolution("a cart ran off the tracks")),
        };
        cart.y = y as usize;
        cart.x = x as usize;
        cart.dir = match (track, cart.dir) {
            (Track::Slash, Direction::Up | Direction::Down)
            | (Track::Backslash, Direction::Left | Direction::Right) => cart.dir.turn_right(),
            (Track::Slash, _) | (Track::Backslash, _) => cart.dir.turn_left(),
            (Track::Intersection, dir) => {
                cart.turns += 1;
                match (cart.turns - 1) % 3 {
                    0 => dir.turn_left(),
                    1 => dir,
                    _ => dir.turn_right(),
                }
            }
            (_, dir) => dir,
        };
        Ok(())
    }

    /// Moves every cart once, in reading order. Carts that collide are removed
    /// at once. Returns the collision points as `(x, y)`.
    pub fn tick(&mut self) -> Result<Vec<(usize, usize)>> {
        self.carts.sort_by_key(|c| (c.y, c.x));
        let mut crashed = vec![false; self.carts.len()];
        let mut crashes = vec![];
        for i in 0..self.carts.len() {
            if crashed[i] {
                continue;
            }
            let mut cart = self.carts[i];
            self.advance(&mut cart)?;
            self.carts[i] = cart;
            let hit = (0..self.carts.len()).find(|&j| {
                j != i && !crashed[j] && (self.carts[j].y, self.carts[j].x) == (cart.y, cart.x)
            });
            if let Some(j) = hit {
                crashed[i] = true;
                crashed[j] = true;
                crashes.push((cart.x, cart.y));
            }
        }
        let mut idx = 0;
        self.carts.retain(|_| {
            idx += 1;
            !crashed[idx - 1]
        });
        Ok(crashes)
    }

    /// Location `(x, y)` of the first collision.
    pub fn first_crash(&mut self) -> Result<(usize, usize)> {
        for tick in 0..MAX_TICKS {
            if let Some(&crash) = self.tick()?.first() {
                debug!("first crash in tick {}", tick + 1);
                return Ok(crash);
            }
        }
        Err(Error::NoSolution("carts never collide"))
    }

    /// Location `(x, y)` of the last cart at the end of the first tick that leaves only one.
    pub fn last_cart(&mut self) -> Result<(usize, usize)> {
        for _ in 0..MAX_TICKS {
            if self.carts.len() <= 1 {
                break;
            }
            self.tick()?;
        }
        match self.carts[..] {
            [cart] => Ok((cart.x, cart.y)),
            [] => Err(Error::NoSolution("every cart crashed")),
            _ => Err(Error::NoSolution("carts keep running")),
        }
    }

    pub fn render(&self) -> String {
        let mut chars = Grid::new(self.tracks.height(), self.tracks.width(), ' ');
        for ((y, x), t) in self.tracks.iter() {
            chars[(y, x)] = t.to_char();
        }
        for cart in &self.carts {
            chars[(cart.y, cart.x)] = match cart.dir {
                Direction::Up => '^',
                Direction::Right => '>',
                Direction::Down => 'v',
                Direction::Left => '<',
            };
        }
        chars.render(|&c| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE1: &str = r"/->-\
|   |  /----\
| /-+--+-\  |
| | |  | v  |
\-+-/  \-+--/
  \------/
";

    const EXAMPLE2: &str = r"/>-<\
|   |
| /<+-\
| | | v
\>+</ |
  |   ^
  \<->/
";

    #[test]
    fn test_day13_parse() {
        let mine = parse_input(EXAMPLE1).unwrap();
        assert_eq!(mine.tracks.shape(), (6, 13));
        assert_eq!(mine.carts.len(), 2);
        assert_eq!(mine.tracks[(0, 2)], Track::Horizontal);
        assert_eq!(mine.tracks[(4, 0)], Track::Backslash);
        assert!(mine.render().starts_with("/->-\\"));
        assert!(parse_input("-x-\n").is_err());
    }

    #[test]
    fn test_day13_first_crash() {
        let mut mine = parse_input(EXAMPLE1).unwrap();
        assert_eq!(mine.first_crash().unwrap(), (7, 3));
    }

    #[test]
    fn test_day13_last_cart() {
        let mut mine = parse_input(EXAMPLE2).unwrap();
        assert_eq!(mine.last_cart().unwrap(), (6, 4));
    }

    #[test]
    fn test_day13_straight_line() {
        let mut mine = parse_input("->--<-\n").unwrap();
        assert_eq!(mine.first_crash().unwrap(), (3, 0));
        let mut mine = parse_input(">-\n").unwrap();
        assert!(mine.first_crash().is_err());
    }
}
