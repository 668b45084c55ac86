use aoc_core::parser::{integer, parse_lines};
use aoc_core::util::{manhattan2, Grid};
use aoc_core::Result;
use nom::{bytes::complete::tag, sequence::separated_pair, IResult};

use super::util::bounding_box;

/// Total distance bound of the safe region for the real input.
pub const SAFE_DISTANCE: i64 = 10000;

fn point(input: &str) -> IResult<&str, (i64, i64)> {
    separated_pair(integer, tag(", "), integer)(input)
}

/// Coordinates as `(x, y)`.
pub fn parse_input(input: &str) -> Result<Vec<(i64, i64)>> {
    parse_lines(input, point, "coordinates")
}

/// Index of the unique closest coordinate to `p`, `None` on a tie.
fn owner(points: &[(i64, i64)], p: (i64, i64)) -> Option<usize> {
    let mut best = None;
    let mut best_dist = i64::MAX;
    let mut tie = false;
    for (i, &q) in points.iter().enumerate() {
        let d = manhattan2(p, q);
        if d < best_dist {
            best = Some(i);
            best_dist = d;
            tie = false;
        } else if d == best_dist {
            tie = true;
        }
    }
    if tie {
        None
    } else {
        best
    }
}

/// Owners of every cell of the bounding box of the coordinates.
pub struct OwnerMap {
    pub min_x: i64,
    pub min_y: i64,
    pub owners: Grid<Option<usize>>,
}

pub fn owner_map(points: &[(i64, i64)]) -> Option<OwnerMap> {
    let (min_x, min_y, max_x, max_y) = bounding_box(points.iter().copied())?;
    let height = (max_y - min_y + 1) as usize;
    let width = (max_x - min_x + 1) as usize;
    let mut owners = Grid::new(height, width, None);
    for (y, x) in owners.positions().collect::<Vec<_>>() {
        owners[(y, x)] = owner(points, (min_x + x as i64, min_y + y as i64));
    }
    Some(OwnerMap {
        min_x,
        min_y,
        owners,
    })
}

/// Coordinates owning a cell on the border of the bounding box. Any cell
/// outside the box keeps its owner when moved one step towards the box, so
/// these are exactly the coordinates with infinite areas.
pub fn infinite_by_border(map: &OwnerMap, n_points: usize) -> Vec<bool> {
    let (h, w) = map.owners.shape();
    let mut infinite = vec![false; n_points];
    for ((y, x), &o) in map.owners.iter() {
        if y == 0 || x == 0 || y + 1 == h || x + 1 == w {
            if let Some(i) = o {
                infinite[i] = true;
            }
        }
    }
    infinite
}

fn cross(a: (i64, i64), b: (i64, i64), p: (i64, i64)) -> i64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

/// Convex hull vertices by gift wrapping (Jarvis march), counterclockwise from
/// the leftmost coordinate. Collinear points on an edge are not included.
pub fn convex_hull(points: &[(i64, i64)]) -> Vec<usize> {
    let start = match (0..points.len()).min_by_key(|&i| points[i]) {
        Some(i) => i,
        None => return vec![],
    };
    let mut hull = vec![];
    let mut cur = start;
    loop {
        hull.push(cur);
        let mut cand: Option<usize> = None;
        for i in 0..points.len() {
            if points[i] == points[cur] {
                continue;
            }
            cand = match cand {
                None => Some(i),
                Some(c) => {
                    let cr = cross(points[cur], points[c], points[i]);
                    let farther =
                        manhattan2(points[cur], points[i]) > manhattan2(points[cur], points[c]);
                    if cr < 0 || (cr == 0 && farther) {
                        Some(i)
                    } else {
                        Some(c)
                    }
                }
            };
        }
        match cand {
            Some(c) if points[c] != points[start] && hull.len() <= points.len() => cur = c,
            _ => break,
        }
    }
    hull
}

/// Size of the largest area that is not infinite.
pub fn largest_finite_area(points: &[(i64, i64)]) -> Option<usize> {
    let map = owner_map(points)?;
    let infinite = infinite_by_border(&map, points.len());
    let mut area = vec![0; points.len()];
    for &o in map.owners.values() {
        if let Some(i) = o {
            area[i] += 1;
        }
    }
    (0..points.len())
        .filter(|&i| !infinite[i])
        .map(|i| area[i])
        .max()
}

/// Number of locations whose total distance to all coordinates is below `threshold`.
pub fn safe_region_size(points: &[(i64, i64)], threshold: i64) -> usize {
    let (min_x, min_y, max_x, max_y) = match bounding_box(points.iter().copied()) {
        Some(b) => b,
        None => return 0,
    };
    // Outside this margin every location is at least `threshold` away in total.
    let margin = threshold / points.len() as i64 + 1;
    let mut count = 0;
    for y in (min_y - margin)..=(max_y + margin) {
        for x in (min_x - margin)..=(max_x + margin) {
            let total: i64 = points.iter().map(|&p| manhattan2(p, (x, y))).sum();
            if total < threshold {
                count += 1;
            }
        }
    }
    count
}
