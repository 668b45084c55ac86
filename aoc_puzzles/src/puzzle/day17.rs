use aoc_core::error::Error;
use aoc_core::parser::{parse_lines, unsigned};
use aoc_core::util::Grid;
use aoc_core::Result;
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::map,
    sequence::{preceded, separated_pair},
    IResult,
};

pub const SPRING_X: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Sand,
    Clay,
    /// Water that passed through.
    Flowing,
    /// Water at rest.
    Settled,
}

/// A vein of clay: the inclusive ranges of `x` and `y` it covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vein {
    pub xs: (usize, usize),
    pub ys: (usize, usize),
}

fn range(input: &str) -> IResult<&str, (usize, usize)> {
    alt((
        separated_pair(unsigned, tag(".."), unsigned),
        map(unsigned, |v| (v, v)),
    ))(input)
}

fn vein(input: &str) -> IResult<&str, Vein> {
    alt((
        map(
            separated_pair(preceded(tag("x="), range), tag(", "), preceded(tag("y="), range)),
            |(xs, ys)| Vein { xs, ys },
        ),
        map(
            separated_pair(preceded(tag("y="), range), tag(", "), preceded(tag("x="), range)),
            |(ys, xs)| Vein { xs, ys },
        ),
    ))(input)
}

pub fn parse_input(input: &str) -> Result<Vec<Vein>> {
    let veins = parse_lines(input, vein, "clay veins")?;
    if let Some(v) = veins.iter().find(|v| v.xs.0 > v.xs.1 || v.ys.0 > v.ys.1) {
        return Err(Error::parse("clay veins", format!("empty range in {:?}", v)));
    }
    if veins.is_empty() {
        return Err(Error::parse("clay veins", "no clay"));
    }
    Ok(veins)
}

pub struct Reservoir {
    /// `x` of the first column.
    pub x0: usize,
    pub min_y: usize,
    pub tiles: Grid<Tile>,
}

impl Reservoir {
    pub fn new(veins: &[Vein]) -> Reservoir {
        let min_x = veins.iter().map(|v| v.xs.0).min().unwrap_or(SPRING_X).min(SPRING_X);
        let max_x = veins.iter().map(|v| v.xs.1).max().unwrap_or(SPRING_X).max(SPRING_X);
        let min_y = veins.iter().map(|v| v.ys.0).min().unwrap_or(0);
        let max_y = veins.iter().map(|v| v.ys.1).max().unwrap_or(0);
        // One spare column on each side for water running over the edge.
        let x0 = min_x.saturating_sub(1);
        let mut tiles = Grid::new(max_y + 1, max_x + 2 - x0, Tile::Sand);
        for v in veins {
            for y in v.ys.0..=v.ys.1 {
                for x in v.xs.0..=v.xs.1 {
                    tiles[(y, x - x0)] = Tile::Clay;
                }
            }
        }
        Reservoir { x0, min_y, tiles }
    }

    /// Scans sideways from `x` along row `y` on top of a supporting layer.
    /// Returns the last column reached and whether it is bounded by clay.
    fn scan(&self, y: usize, x: usize, left: bool) -> (usize, bool) {
        let mut i = x;
        loop {
            if matches!(self.tiles[(y + 1, i)], Tile::Sand | Tile::Flowing) {
                return (i, false);
            }
            let next = if left { i - 1 } else { i + 1 };
            if self.tiles[(y, next)] == Tile::Clay {
                return (i, true);
            }
            i = next;
        }
    }

    /// Lets the spring run until nothing changes.
    pub fn fill(&mut self) {
        let bottom = self.tiles.height() - 1;
        let mut sources = vec![(0, SPRING_X - self.x0)];
        while let Some((mut y, x)) = sources.pop() {
            while y < bottom && self.tiles[(y + 1, x)] == Tile::Sand {
                y += 1;
                self.tiles[(y, x)] = Tile::Flowing;
            }
            if y == bottom || self.tiles[(y + 1, x)] == Tile::Flowing {
                continue;
            }
            loop {
                let (l, l_wall) = self.scan(y, x, true);
                let (r, r_wall) = self.scan(y, x, false);
                if l_wall && r_wall {
                    for i in l..=r {
                        self.tiles[(y, i)] = Tile::Settled;
                    }
                    if y == 0 {
                        break;
                    }
                    y -= 1;
                    continue;
                }
                for i in l..=r {
                    self.tiles[(y, i)] = Tile::Flowing;
                }
                if !l_wall {
                    sources.push((y, l));
                }
                if !r_wall {
                    sources.push((y, r));
                }
                break;
            }
        }
    }

    fn count_in_range<F: Fn(Tile) -> bool>(&self, pred: F) -> usize {
        self.tiles
            .iter()
            .filter(|&((y, _), &t)| y >= self.min_y && pred(t))
            .count()
    }

    /// Tiles reached by water, between the topmost and the bottommost clay.
    pub fn wet_tiles(&self) -> usize {
        self.count_in_range(|t| matches!(t, Tile::Flowing | Tile::Settled))
    }

    pub fn settled_tiles(&self) -> usize {
        self.count_in_range(|t| t == Tile::Settled)
    }

    pub fn render(&self) -> String {
        let mut ret = self.tiles.render(|t| match t {
            Tile::Sand => '.',
            Tile::Clay => '#',
            Tile::Flowing => '|',
            Tile::Settled => '~',
        });
        // The spring sits in the top row.
        let col = SPRING_X - self.x0;
        ret.replace_range(col..col + 1, "+");
        ret
    }
}

pub fn simulate(veins: &[Vein]) -> Reservoir {
    let mut reservoir = Reservoir::new(veins);
    reservoir.fill();
    reservoir
}
