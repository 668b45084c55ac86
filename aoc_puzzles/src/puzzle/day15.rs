use aoc_core::util::Grid;
use aoc_core::Result;
use tracing::{debug, info};

use crate::graph::bfs_distances;

pub const HIT_POINTS: i32 = 200;
pub const ATTACK_POWER: i32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Race {
    Elf,
    Goblin,
}

impl Race {
    pub fn to_char(self) -> char {
        match self {
            Race::Elf => 'E',
            Race::Goblin => 'G',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unit {
    pub race: Race,
    /// `(y, x)`
    pub pos: (usize, usize),
    pub hp: i32,
}

impl Unit {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

#[derive(Clone, Debug)]
pub struct Cave {
    pub walls: Grid<bool>,
    pub units: Vec<Unit>,
}

pub fn parse_input(input: &str) -> Result<Cave> {
    let cells = Grid::from_lines(input, '#', |c| match c {
        '#' | '.' | 'E' | 'G' => Some(c),
        _ => None,
    })?;
    let walls = Grid::new(cells.height(), cells.width(), false);
    let mut cave = Cave {
        walls,
        units: vec![],
    };
    for (p, &c) in cells.iter() {
        match c {
            '#' => cave.walls[p] = true,
            'E' | 'G' => cave.units.push(Unit {
                race: if c == 'E' { Race::Elf } else { Race::Goblin },
                pos: p,
                hp: HIT_POINTS,
            }),
            _ => (),
        }
    }
    Ok(cave)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub rounds: u32,
    pub hit_points: i32,
    pub winner: Race,
}

impl Outcome {
    pub fn score(&self) -> i64 {
        self.rounds as i64 * self.hit_points as i64
    }
}

pub struct Battle {
    walls: Grid<bool>,
    pub units: Vec<Unit>,
    occupant: Grid<Option<usize>>,
    elf_power: i32,
    pub rounds: u32,
    pub elf_deaths: usize,
}

impl Battle {
    pub fn new(cave: &Cave, elf_power: i32) -> Battle {
        let mut occupant = Grid::new(cave.walls.height(), cave.walls.width(), None);
        for (i, u) in cave.units.iter().enumerate() {
            occupant[u.pos] = Some(i);
        }
        Battle {
            walls: cave.walls.clone(),
            units: cave.units.clone(),
            occupant,
            elf_power,
            rounds: 0,
            elf_deaths: 0,
        }
    }

    fn is_open(&self, p: (usize, usize)) -> bool {
        !self.walls[p] && self.occupant[p].is_none()
    }

    fn enemies(&self, race: Race) -> impl Iterator<Item = &Unit> {
        self.units
            .iter()
            .filter(move |u| u.is_alive() && u.race != race)
    }

    /// Weakest adjacent enemy; reading order breaks ties.
    fn adjacent_target(&self, i: usize) -> Option<usize> {
        let (y, x) = self.units[i].pos;
        let race = self.units[i].race;
        self.walls
            .neighbors4(y, x)
            .filter_map(|q| self.occupant[q])
            .filter(|&j| self.units[j].race != race)
            .min_by_key(|&j| self.units[j].hp)
    }

    /// Square to step on towards the nearest reachable square in range of an enemy.
    fn next_step(&self, i: usize) -> Option<(usize, usize)> {
        let pos = self.units[i].pos;
        let dist = bfs_distances(&self.walls, pos, |p| self.is_open(p));
        let target = self
            .enemies(self.units[i].race)
            .flat_map(|u| self.walls.neighbors4(u.pos.0, u.pos.1))
            .filter(|&q| self.is_open(q))
            .filter_map(|q| dist[q].map(|d| (d, q)))
            .min()?
            .1;
        let back = bfs_distances(&self.walls, target, |p| self.is_open(p));
        self.walls
            .neighbors4(pos.0, pos.1)
            .filter(|&q| self.is_open(q))
            .filter_map(|q| back[q].map(|d| (d, q)))
            .min()
            .map(|(_, q)| q)
    }

    fn attack(&mut self, i: usize, target: usize) {
        let power = match self.units[i].race {
            Race::Elf => self.elf_power,
            Race::Goblin => ATTACK_POWER,
        };
        let unit = &mut self.units[target];
        unit.hp -= power;
        if !unit.is_alive() {
            self.occupant[unit.pos] = None;
            if unit.race == Race::Elf {
                self.elf_deaths += 1;
            }
        }
    }

    /// Plays one round. Returns `false` if it ended early because some unit
    /// found no enemies left; such a round does not count as completed.
    pub fn round(&mut self) -> bool {
        let mut order = (0..self.units.len())
            .filter(|&i| self.units[i].is_alive())
            .collect::<Vec<_>>();
        order.sort_by_key(|&i| self.units[i].pos);

        for i in order {
            if !self.units[i].is_alive() {
                continue;
            }
            if self.enemies(self.units[i].race).next().is_none() {
                return false;
            }
            if self.adjacent_target(i).is_none() {
                if let Some(step) = self.next_step(i) {
                    self.occupant[self.units[i].pos] = None;
                    self.occupant[step] = Some(i);
                    self.units[i].pos = step;
                }
            }
            if let Some(target) = self.adjacent_target(i) {
                self.attack(i, target);
            }
        }
        self.rounds += 1;
        true
    }

    /// Fights to the end. With `stop_on_elf_death`, gives up as soon as an elf dies.
    pub fn run(&mut self, stop_on_elf_death: bool) -> Option<Outcome> {
        loop {
            let completed = self.round();
            if stop_on_elf_death && self.elf_deaths > 0 {
                return None;
            }
            if !completed {
                break;
            }
        }
        let survivors = self.units.iter().filter(|u| u.is_alive());
        let hit_points = survivors.clone().map(|u| u.hp).sum();
        let winner = survivors.map(|u| u.race).next()?;
        Some(Outcome {
            rounds: self.rounds,
            hit_points,
            winner,
        })
    }

    /// The map followed by the hit points of the units on each row.
    pub fn render(&self) -> String {
        let mut ret = String::new();
        for y in 0..self.walls.height() {
            let mut hp = vec![];
            for x in 0..self.walls.width() {
                let c = match self.occupant[(y, x)] {
                    Some(i) => {
                        let u = &self.units[i];
                        hp.push(format!("{}({})", u.race.to_char(), u.hp));
                        u.race.to_char()
                    }
                    None if self.walls[(y, x)] => '#',
                    None => '.',
                };
                ret.push(c);
            }
            if !hp.is_empty() {
                ret.push_str("   ");
                ret.push_str(&hp.join(", "));
            }
            ret.push('\n');
        }
        ret
    }
}

pub fn outcome(cave: &Cave) -> Option<Outcome> {
    Battle::new(cave, ATTACK_POWER).run(false)
}

/// Smallest elf attack power winning without a single elf death, with the battle's outcome.
pub fn weakest_flawless_victory(cave: &Cave) -> Option<(i32, Outcome)> {
    // At full hit points every hit is a kill; beyond this nothing improves.
    for power in (ATTACK_POWER + 1)..=HIT_POINTS {
        let mut battle = Battle::new(cave, power);
        match battle.run(true) {
            Some(outcome) => {
                info!("elves win with attack power {}", power);
                return Some((power, outcome));
            }
            None => debug!(
                "attack power {}: an elf died in round {}",
                power,
                battle.rounds + 1
            ),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE1: &str = "#######
#.G...#
#...EG#
#.#.#G#
#..G#E#
#.....#
#######
";

    const EXAMPLE2: &str = "#######
#G..#E#
#E#E.E#
#G.##.#
#...#E#
#...E.#
#######
";

    const EXAMPLE3: &str = "#######
#E..EG#
#.#G.E#
#E.##E#
#G..#.#
#..E#.#
#######
";

    const EXAMPLE4: &str = "#######
#E.G#.#
#.#G..#
#G.#.G#
#G..#.#
#...E.#
#######
";

    const EXAMPLE5: &str = "#######
#.E...#
#.#..G#
#.###.#
#E#G#G#
#...#G#
#######
";

    const EXAMPLE6: &str = "#########
#G......#
#.E.#...#
#..##..G#
#...##..#
#...#...#
#.G...G.#
#.....G.#
#########
";

    fn score(input: &str) -> i64 {
        outcome(&parse_input(input).unwrap()).unwrap().score()
    }

    fn flawless_score(input: &str) -> (i32, i64) {
        let (power, outcome) = weakest_flawless_victory(&parse_input(input).unwrap()).unwrap();
        (power, outcome.score())
    }

    #[test]
    fn test_day15_first_round() {
        let cave = parse_input(EXAMPLE1).unwrap();
        let mut battle = Battle::new(&cave, ATTACK_POWER);
        assert!(battle.round());
        assert_eq!(
            battle.render(),
            "#######
#..G..#   G(200)
#...EG#   E(197), G(197)
#.#G#G#   G(200), G(197)
#...#E#   E(197)
#.....#
#######
"
        );
    }

    #[test]
    fn test_day15_outcome() {
        let result = outcome(&parse_input(EXAMPLE1).unwrap()).unwrap();
        assert_eq!(result.rounds, 47);
        assert_eq!(result.hit_points, 590);
        assert_eq!(result.winner, Race::Goblin);

        assert_eq!(score(EXAMPLE2), 36334);
        assert_eq!(score(EXAMPLE3), 39514);
        assert_eq!(score(EXAMPLE4), 27755);
        assert_eq!(score(EXAMPLE5), 28944);
        assert_eq!(score(EXAMPLE6), 18740);
    }

    #[test]
    fn test_day15_flawless_victory() {
        assert_eq!(flawless_score(EXAMPLE1), (15, 4988));
        assert_eq!(flawless_score(EXAMPLE3), (4, 31284));
        assert_eq!(flawless_score(EXAMPLE4), (15, 3478));
        assert_eq!(flawless_score(EXAMPLE5), (12, 6474));
        assert_eq!(flawless_score(EXAMPLE6), (34, 1140));
    }

    #[test]
    fn test_day15_movement() {
        // The elf walks towards the nearest square in range, preferring reading order.
        let cave = parse_input("#######\n#E..G.#\n#...#.#\n#.G.#G#\n#######\n").unwrap();
        let mut battle = Battle::new(&cave, ATTACK_POWER);
        battle.round();
        assert_eq!(battle.units[0].pos, (1, 2));
    }
}
