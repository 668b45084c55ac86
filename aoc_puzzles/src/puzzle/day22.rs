use aoc_core::parser::{parse_all, unsigned};
use aoc_core::util::Grid;
use aoc_core::Result;
use nom::{
    bytes::complete::tag,
    character::complete::{char, multispace1},
    combinator::map,
    sequence::{preceded, separated_pair, tuple},
    IResult,
};
use tracing::debug;

use crate::graph::dijkstra;

const MODULUS: u64 = 20183;
const SWITCH_TIME: u64 = 7;
const MOVE_TIME: u64 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scan {
    pub depth: u64,
    /// `(y, x)`
    pub target: (usize, usize),
}

fn scan(input: &str) -> IResult<&str, Scan> {
    map(
        tuple((
            preceded(tag("depth: "), unsigned),
            multispace1,
            preceded(tag("target: "), separated_pair(unsigned, char(','), unsigned)),
        )),
        |(depth, _, (x, y))| Scan {
            depth,
            target: (y, x),
        },
    )(input)
}

pub fn parse_input(input: &str) -> Result<Scan> {
    parse_all(input.trim_start(), scan, "cave scan")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Rocky,
    Wet,
    Narrow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tool {
    Neither,
    Torch,
    ClimbingGear,
}

impl Region {
    pub fn risk(self) -> u64 {
        self as u64
    }

    pub fn tools(self) -> [Tool; 2] {
        match self {
            Region::Rocky => [Tool::ClimbingGear, Tool::Torch],
            Region::Wet => [Tool::ClimbingGear, Tool::Neither],
            Region::Narrow => [Tool::Torch, Tool::Neither],
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Region::Rocky => '.',
            Region::Wet => '=',
            Region::Narrow => '|',
        }
    }
}

/// Erosion levels, computed on demand and grown as the search wanders off.
pub struct Cave {
    scan: Scan,
    erosion: Grid<u64>,
}

impl Cave {
    pub fn new(scan: Scan) -> Cave {
        let mut cave = Cave {
            scan,
            erosion: Grid::new(0, 0, 0),
        };
        cave.extend(scan.target.0 + 1, scan.target.1 + 1);
        cave
    }

    fn extend(&mut self, height: usize, width: usize) {
        let mut erosion = Grid::new(height, width, 0);
        for y in 0..height {
            for x in 0..width {
                let index = if (y, x) == (0, 0) || (y, x) == self.scan.target {
                    0
                } else if y == 0 {
                    x as u64 * 16807
                } else if x == 0 {
                    y as u64 * 48271
                } else {
                    erosion[(y, x - 1)] * erosion[(y - 1, x)]
                };
                erosion[(y, x)] = (index + self.scan.depth) % MODULUS;
            }
        }
        self.erosion = erosion;
    }

    pub fn region(&mut self, y: usize, x: usize) -> Region {
        let (h, w) = self.erosion.shape();
        if y >= h || x >= w {
            let height = if y >= h { (y + 1).max(h * 2) } else { h };
            let width = if x >= w { (x + 1).max(w * 2) } else { w };
            debug!("growing cave to {}x{}", height, width);
            self.extend(height, width);
        }
        match self.erosion[(y, x)] % 3 {
            0 => Region::Rocky,
            1 => Region::Wet,
            _ => Region::Narrow,
        }
    }

    pub fn render(&mut self, height: usize, width: usize) -> String {
        let mut ret = String::new();
        for y in 0..height {
            for x in 0..width {
                ret.push(match (y, x) {
                    (0, 0) => 'M',
                    p if p == self.scan.target => 'T',
                    _ => self.region(y, x).to_char(),
                });
            }
            ret.push('\n');
        }
        ret
    }
}

pub fn total_risk(scan: Scan) -> u64 {
    let mut cave = Cave::new(scan);
    let (ty, tx) = scan.target;
    let mut ret = 0;
    for y in 0..=ty {
        for x in 0..=tx {
            ret += cave.region(y, x).risk();
        }
    }
    ret
}

/// Minutes to reach the target holding the torch, starting at the mouth with it.
pub fn fastest_rescue(scan: Scan) -> Option<u64> {
    let mut cave = Cave::new(scan);
    let start = (0, 0, Tool::Torch);
    let goal = (scan.target.0, scan.target.1, Tool::Torch);
    let next = |&(y, x, tool): &(usize, usize, Tool)| {
        let mut ret = vec![];
        for other in cave.region(y, x).tools() {
            if other != tool {
                ret.push(((y, x, other), SWITCH_TIME));
            }
        }
        let mut neighbors = vec![(y + 1, x), (y, x + 1)];
        if y > 0 {
            neighbors.push((y - 1, x));
        }
        if x > 0 {
            neighbors.push((y, x - 1));
        }
        for (ny, nx) in neighbors {
            if cave.region(ny, nx).tools().contains(&tool) {
                ret.push(((ny, nx, tool), MOVE_TIME));
            }
        }
        ret
    };
    dijkstra(start, next, |&s| s == goal).map(|(_, time)| time)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: Scan = Scan {
        depth: 510,
        target: (10, 10),
    };

    #[test]
    fn test_day22_parse() {
        assert_eq!(parse_input("depth: 510\ntarget: 10,10\n").unwrap(), EXAMPLE);
        assert_eq!(
            parse_input("depth: 8787\ntarget: 10,725\n").unwrap().target,
            (725, 10)
        );
        assert!(parse_input("depth: 510\n").is_err());
    }

    #[test]
    fn test_day22_regions() {
        let mut cave = Cave::new(EXAMPLE);
        assert_eq!(cave.region(0, 1), Region::Wet);
        assert_eq!(cave.region(1, 0), Region::Rocky);
        assert_eq!(cave.region(1, 1), Region::Narrow);
        assert_eq!(cave.region(10, 10), Region::Rocky);
        let map = cave.render(16, 16);
        let lines = map.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "M=.|=.|.|=.|=|=.");
        assert_eq!(lines[1], ".|=|=|||..|.=...");
        assert_eq!(lines[10], ".===|=|===T===||");
        assert_eq!(lines[15], "||.|==.|.|.||=||");
    }

    #[test]
    fn test_day22_example() {
        assert_eq!(total_risk(EXAMPLE), 114);
        assert_eq!(fastest_rescue(EXAMPLE), Some(45));
    }
}
