use std::collections::HashMap;

use aoc_core::util::Grid;
use aoc_core::Result;
use tracing::debug;

pub const SHORT_MINUTES: u64 = 10;
pub const LONG_MINUTES: u64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Acre {
    Open,
    Trees,
    Lumberyard,
}

impl Acre {
    pub fn to_char(self) -> char {
        match self {
            Acre::Open => '.',
            Acre::Trees => '|',
            Acre::Lumberyard => '#',
        }
    }
}

pub fn parse_input(input: &str) -> Result<Grid<Acre>> {
    Grid::from_lines(input, Acre::Open, |c| match c {
        '.' => Some(Acre::Open),
        '|' => Some(Acre::Trees),
        '#' => Some(Acre::Lumberyard),
        _ => None,
    })
}

pub fn step(area: &Grid<Acre>) -> Grid<Acre> {
    let mut next = area.clone();
    for ((y, x), &acre) in area.iter() {
        let count = |kind| area.neighbors8(y, x).filter(|&p| area[p] == kind).count();
        next[(y, x)] = match acre {
            Acre::Open if count(Acre::Trees) >= 3 => Acre::Trees,
            Acre::Trees if count(Acre::Lumberyard) >= 3 => Acre::Lumberyard,
            Acre::Lumberyard if count(Acre::Lumberyard) == 0 || count(Acre::Trees) == 0 => {
                Acre::Open
            }
            a => a,
        };
    }
    next
}

pub fn resource_value(area: &Grid<Acre>) -> usize {
    let trees = area.values().filter(|&&a| a == Acre::Trees).count();
    let yards = area.values().filter(|&&a| a == Acre::Lumberyard).count();
    trees * yards
}

/// State after `minutes`, skipping ahead once a previously seen state recurs.
pub fn area_after(area: &Grid<Acre>, minutes: u64) -> Grid<Acre> {
    let mut seen: HashMap<Grid<Acre>, u64> = HashMap::new();
    let mut history = vec![];
    let mut current = area.clone();
    for minute in 0..minutes {
        if let Some(&start) = seen.get(&current) {
            let period = minute - start;
            debug!("cycle of length {} starting at minute {}", period, start);
            let index = start + (minutes - start) % period;
            return history.swap_remove(index as usize);
        }
        seen.insert(current.clone(), minute);
        history.push(current.clone());
        current = step(&current);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = ".#.#...|#.
.....#|##|
.|..|...#.
..|#.....#
#.#|||#|#|
...#.||...
.|....|...
||...#|.#|
|.||||..|.
...#.|..|.
";

    fn render(area: &Grid<Acre>) -> String {
        area.render(|a| a.to_char())
    }

    #[test]
    fn test_day18_example() {
        let area = parse_input(EXAMPLE).unwrap();
        let after1 = step(&area);
        assert_eq!(
            render(&after1),
            ".......##.
......|###
.|..|...#.
..|#||...#
..##||.|#|
...#||||..
||...|||..
|||||.||.|
||||||||||
....||..|.
"
        );
        let after10 = area_after(&area, SHORT_MINUTES);
        assert_eq!(
            render(&after10),
            ".||##.....
||###.....
||##......
|##.....##
|##.....##
|##....##|
||##.####|
||#####|||
||||#|||||
||||||||||
"
        );
        assert_eq!(resource_value(&after10), 1147);
    }

    #[test]
    fn test_day18_cycle_skip_matches_simulation() {
        let area = parse_input(EXAMPLE).unwrap();
        let mut current = area.clone();
        for minute in 1..=60 {
            current = step(&current);
            assert_eq!(area_after(&area, minute), current, "minute {}", minute);
        }
    }
}
