use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_core::parser::{integer, parse_lines, unsigned};
use aoc_core::Result;
use nom::{
    bytes::complete::tag,
    character::complete::char,
    combinator::map,
    sequence::{delimited, preceded, tuple},
    IResult,
};
use tracing::debug;

use crate::items::Point3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nanobot {
    pub pos: Point3,
    pub radius: i64,
}

impl Nanobot {
    pub fn in_range(&self, p: &Point3) -> bool {
        self.pos.manhattan(p) <= self.radius
    }
}

fn nanobot(input: &str) -> IResult<&str, Nanobot> {
    map(
        tuple((
            delimited(
                tag("pos=<"),
                tuple((integer, preceded(char(','), integer), preceded(char(','), integer))),
                char('>'),
            ),
            preceded(tag(", r="), unsigned),
        )),
        |((x, y, z), radius)| Nanobot {
            pos: Point3::new(x, y, z),
            radius,
        },
    )(input)
}

pub fn parse_input(input: &str) -> Result<Vec<Nanobot>> {
    parse_lines(input, nanobot, "nanobots")
}

pub fn in_range_of_strongest(bots: &[Nanobot]) -> usize {
    match bots.iter().max_by_key(|b| b.radius) {
        Some(strongest) => bots.iter().filter(|b| strongest.in_range(&b.pos)).count(),
        None => 0,
    }
}

/// Axis-aligned cube `[corner, corner + size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Cube {
    corner: (i64, i64, i64),
    size: i64,
}

fn axis_gap(v: i64, lo: i64, hi: i64) -> i64 {
    if v < lo {
        lo - v
    } else if v > hi {
        v - hi
    } else {
        0
    }
}

impl Cube {
    fn distance_to(&self, p: &Point3) -> i64 {
        let (x, y, z) = self.corner;
        let s = self.size - 1;
        axis_gap(p.x, x, x + s) + axis_gap(p.y, y, y + s) + axis_gap(p.z, z, z + s)
    }

    /// Number of bots whose range touches the cube.
    fn reach(&self, bots: &[Nanobot]) -> usize {
        bots.iter()
            .filter(|b| self.distance_to(&b.pos) <= b.radius)
            .count()
    }

    fn children(&self) -> impl Iterator<Item = Cube> + '_ {
        let half = self.size / 2;
        (0..8).map(move |k| {
            let (x, y, z) = self.corner;
            Cube {
                corner: (
                    x + if k & 1 != 0 { half } else { 0 },
                    y + if k & 2 != 0 { half } else { 0 },
                    z + if k & 4 != 0 { half } else { 0 },
                ),
                size: half,
            }
        })
    }
}

/// Point in range of the most bots, closest to the origin among those:
/// `(number of bots, distance to the origin)`.
///
/// Searches cubes best first. A cube's reach bounds the count of any point
/// inside it from above and its distance bounds the distance from below, so
/// the first unit cube popped is optimal.
pub fn best_position(bots: &[Nanobot]) -> Option<(usize, i64)> {
    let lo = |f: fn(&Point3) -> i64| bots.iter().map(|b| f(&b.pos) - b.radius).min();
    let hi = |f: fn(&Point3) -> i64| bots.iter().map(|b| f(&b.pos) + b.radius).max();
    let (x0, y0, z0) = (lo(|p| p.x)?, lo(|p| p.y)?, lo(|p| p.z)?);
    let extent = [hi(|p| p.x)? - x0, hi(|p| p.y)? - y0, hi(|p| p.z)? - z0]
        .into_iter()
        .max()
        .unwrap_or(0)
        + 1;
    let mut size = 1;
    while size < extent {
        size *= 2;
    }

    let origin = Point3::ORIGIN;
    let entry = |cube: Cube| {
        (
            cube.reach(bots),
            Reverse(cube.distance_to(&origin)),
            Reverse(cube.size),
            cube,
        )
    };
    let mut heap = BinaryHeap::new();
    heap.push(entry(Cube {
        corner: (x0, y0, z0),
        size,
    }));
    let mut popped = 0usize;
    while let Some((count, Reverse(dist), _, cube)) = heap.pop() {
        popped += 1;
        if cube.size == 1 {
            debug!("best point {:?} after {} cubes", cube.corner, popped);
            return Some((count, dist));
        }
        for child in cube.children() {
            heap.push(entry(child));
        }
    }
    None
}
