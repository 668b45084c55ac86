use aoc_core::parser::{integer, parse_lines};
use aoc_core::Result;
use nom::{
    character::complete::char,
    combinator::map,
    sequence::{preceded, tuple},
    IResult,
};

use crate::graph::DisjointSet;

pub const LINK_DISTANCE: i64 = 3;

pub type Point4 = [i64; 4];

fn point(input: &str) -> IResult<&str, Point4> {
    map(
        tuple((
            integer,
            preceded(char(','), integer),
            preceded(char(','), integer),
            preceded(char(','), integer),
        )),
        |(a, b, c, d)| [a, b, c, d],
    )(input)
}

pub fn parse_input(input: &str) -> Result<Vec<Point4>> {
    parse_lines(input, point, "fixed points")
}

pub fn distance(p: &Point4, q: &Point4) -> i64 {
    p.iter().zip(q).map(|(a, b)| (a - b).abs()).sum()
}

pub fn constellations(points: &[Point4]) -> usize {
    let mut set = DisjointSet::new(points.len());
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if distance(&points[i], &points[j]) <= LINK_DISTANCE {
                set.union(i, j);
            }
        }
    }
    set.n_components()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(input: &str) -> usize {
        constellations(&parse_input(input).unwrap())
    }

    #[test]
    fn test_day25_examples() {
        assert_eq!(
            count(
                " 0,0,0,0
 3,0,0,0
 0,3,0,0
 0,0,3,0
 0,0,0,3
 0,0,0,6
 9,0,0,0
12,0,0,0
"
                .replace(' ', "")
                .as_str()
            ),
            2
        );
        assert_eq!(
            count(
                "-1,2,2,0
0,0,2,-2
0,0,0,-2
-1,2,0,0
-2,-2,-2,2
3,0,2,-1
-1,3,2,2
-1,0,-1,0
0,2,1,-2
3,0,0,0
"
            ),
            4
        );
        assert_eq!(
            count(
                "1,-1,0,1
2,0,-1,0
3,2,-1,0
0,0,3,1
0,0,-1,-1
2,3,-2,0
-2,2,0,0
2,-2,0,-1
1,-1,0,-1
3,2,0,2
"
            ),
            3
        );
        assert_eq!(
            count(
                "1,-1,-1,-2
-2,-2,0,1
0,2,1,3
-2,3,-2,1
0,2,3,-2
-1,-1,1,-2
0,-2,-1,0
-2,2,3,-1
1,2,2,0
-1,-2,0,-2
"
            ),
            8
        );
    }

    #[cfg(feature = "generator")]
    /// Grows constellations by repeatedly merging any two that have linked points.
    fn naive_constellations(points: &[Point4]) -> usize {
        let mut groups = points.iter().map(|&p| vec![p]).collect::<Vec<_>>();
        loop {
            let mut merged = false;
            'search: for i in 0..groups.len() {
                for j in (i + 1)..groups.len() {
                    let linked = groups[i]
                        .iter()
                        .any(|p| groups[j].iter().any(|q| distance(p, q) <= LINK_DISTANCE));
                    if linked {
                        let g = groups.swap_remove(j);
                        groups[i].extend(g);
                        merged = true;
                        break 'search;
                    }
                }
            }
            if !merged {
                return groups.len();
            }
        }
    }

    #[cfg(feature = "generator")]
    #[test]
    fn test_day25_union_find_agrees() {
        use crate::generator::random_points4;

        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let points = random_points4(&mut rng, 40, 6);
            assert_eq!(constellations(&points), naive_constellations(&points));
        }
    }
}
