use aoc_core::parser::{padded_integer, parse_lines};
use aoc_core::util::Grid;
use aoc_core::Result;
use nom::{
    bytes::complete::tag,
    character::complete::space0,
    combinator::map,
    sequence::{delimited, separated_pair, tuple},
    IResult,
};

use super::util::bounding_box;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Light {
    pub position: (i64, i64),
    pub velocity: (i64, i64),
}

fn vector(input: &str) -> IResult<&str, (i64, i64)> {
    delimited(
        tag("<"),
        separated_pair(padded_integer, tag(","), padded_integer),
        tag(">"),
    )(input)
}

fn light(input: &str) -> IResult<&str, Light> {
    map(
        tuple((
            delimited(tag("position="), vector, tag(" ")),
            delimited(tag("velocity="), vector, space0),
        )),
        |(position, velocity)| Light { position, velocity },
    )(input)
}

pub fn parse_input(input: &str) -> Result<Vec<Light>> {
    parse_lines(input, light, "lights")
}

pub fn positions_at(lights: &[Light], time: i64) -> Vec<(i64, i64)> {
    lights
        .iter()
        .map(|l| {
            (
                l.position.0 + l.velocity.0 * time,
                l.position.1 + l.velocity.1 * time,
            )
        })
        .collect()
}

fn height_at(lights: &[Light], time: i64) -> i64 {
    match bounding_box(positions_at(lights, time)) {
        Some((_, y0, _, y1)) => y1 - y0,
        None => 0,
    }
}

/// Second at which the lights are vertically closest together. The height of
/// the bounding box is convex in time, so the first local minimum is the answer.
pub fn convergence_time(lights: &[Light]) -> i64 {
    let mut time = 0;
    let mut height = height_at(lights, 0);
    loop {
        let next = height_at(lights, time + 1);
        if next >= height {
            return time;
        }
        time += 1;
        height = next;
    }
}

/// Lit cells at `time`, cropped to their bounding box.
pub fn sky_at(lights: &[Light], time: i64) -> Grid<bool> {
    let positions = positions_at(lights, time);
    let (x0, y0, x1, y1) = match bounding_box(positions.iter().copied()) {
        Some(b) => b,
        None => return Grid::new(0, 0, false),
    };
    let mut sky = Grid::new((y1 - y0 + 1) as usize, (x1 - x0 + 1) as usize, false);
    for (x, y) in positions {
        sky[((y - y0) as usize, (x - x0) as usize)] = true;
    }
    sky
}

pub fn message(lights: &[Light], time: i64) -> String {
    sky_at(lights, time).render(|&lit| if lit { '#' } else { '.' })
}

#[cfg(test)]
mod tests {
    use super::*;

    // An "H" that forms at second 3.
    fn example() -> String {
        let mut targets = vec![];
        for y in 0..5 {
            targets.push((0, y, 1));
            targets.push((4, y, -1));
        }
        for x in 1..4 {
            targets.push((x, 2, 0));
        }
        targets
            .into_iter()
            .map(|(x, y, vy)| {
                format!(
                    "position=<{:>3}, {:>3}> velocity=<{:>2}, {:>2}>\n",
                    x + 7,
                    y - 3 * vy,
                    0,
                    vy
                )
            })
            .collect()
    }

    #[test]
    fn test_day10_parse() {
        let lights = parse_input("position=< 9,  1> velocity=< 0,  2>\nposition=<-3, 11> velocity=< 1, -2>\n").unwrap();
        assert_eq!(
            lights,
            vec![
                Light {
                    position: (9, 1),
                    velocity: (0, 2)
                },
                Light {
                    position: (-3, 11),
                    velocity: (1, -2)
                },
            ]
        );
    }

    #[test]
    fn test_day10_message() {
        let lights = parse_input(&example()).unwrap();
        assert_eq!(convergence_time(&lights), 3);
        assert_eq!(
            message(&lights, 3),
            "#...#\n#...#\n#####\n#...#\n#...#\n"
        );
    }

    #[test]
    fn test_day10_static_lights() {
        let lights = parse_input("position=< 1, 1> velocity=< 0, 0>\n").unwrap();
        assert_eq!(convergence_time(&lights), 0);
        assert_eq!(message(&lights, 0), "#\n");
    }
}
