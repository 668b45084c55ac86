use std::collections::{BTreeSet, HashMap, VecDeque};

use aoc_core::error::Error;
use aoc_core::util::Grid;
use aoc_core::Result;

use crate::items::Direction;

pub const DOOR_THRESHOLD: usize = 1000;

/// `(y, x)` of a room; the starting room is at the origin.
pub type Room = (i64, i64);

/// Rooms and the doors between them.
#[derive(Clone, Debug, Default)]
pub struct Facility {
    pub doors: HashMap<Room, BTreeSet<Room>>,
}

impl Facility {
    fn connect(&mut self, from: Room, dir: Direction) -> Room {
        let (dy, dx) = dir.delta();
        let to = (from.0 + dy, from.1 + dx);
        self.doors.entry(from).or_default().insert(to);
        self.doors.entry(to).or_default().insert(from);
        to
    }

    pub fn n_rooms(&self) -> usize {
        self.doors.len()
    }

    /// Number of doors on the shortest path to every room.
    pub fn distances(&self) -> HashMap<Room, usize> {
        let mut dist = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert((0, 0), 0);
        queue.push_back((0, 0));
        while let Some(p) = queue.pop_front() {
            let d = dist[&p];
            for &q in self.doors.get(&p).into_iter().flatten() {
                if !dist.contains_key(&q) {
                    dist.insert(q, d + 1);
                    queue.push_back(q);
                }
            }
        }
        dist
    }

    /// Map in the usual notation: `X` is the start, `|` and `-` are doors.
    pub fn render(&self) -> String {
        let min_y = self.doors.keys().map(|r| r.0).min().unwrap_or(0);
        let max_y = self.doors.keys().map(|r| r.0).max().unwrap_or(0);
        let min_x = self.doors.keys().map(|r| r.1).min().unwrap_or(0);
        let max_x = self.doors.keys().map(|r| r.1).max().unwrap_or(0);
        let height = (2 * (max_y - min_y) + 3) as usize;
        let width = (2 * (max_x - min_x) + 3) as usize;
        let mut map = Grid::new(height, width, '#');
        for (&(y, x), neighbors) in &self.doors {
            let row = 2 * (y - min_y) + 1;
            let col = 2 * (x - min_x) + 1;
            map[(row as usize, col as usize)] = if (y, x) == (0, 0) { 'X' } else { '.' };
            for &(ny, nx) in neighbors {
                let door = ((row + ny - y) as usize, (col + nx - x) as usize);
                map[door] = if ny == y { '|' } else { '-' };
            }
        }
        map.render(|&c| c)
    }
}

/// Walks the route regex, keeping the room where each open branch group started.
pub fn parse_input(input: &str) -> Result<Facility> {
    let route = input.trim();
    let body = route
        .strip_prefix('^')
        .and_then(|r| r.strip_suffix('$'))
        .ok_or_else(|| Error::parse("route", "expected ^...$"))?;

    let mut facility = Facility::default();
    facility.doors.insert((0, 0), BTreeSet::new());
    let mut current = (0, 0);
    let mut branches = vec![];
    for c in body.chars() {
        match c {
            '(' => branches.push(current),
            '|' => {
                current = *branches
                    .last()
                    .ok_or_else(|| Error::parse("route", "'|' outside of a group"))?;
            }
            ')' => {
                current = branches
                    .pop()
                    .ok_or_else(|| Error::parse("route", "unbalanced ')'"))?;
            }
            _ => {
                let dir = Direction::from_compass(c)
                    .ok_or_else(|| Error::parse("route", format!("unexpected {:?}", c)))?;
                current = facility.connect(current, dir);
            }
        }
    }
    if !branches.is_empty() {
        return Err(Error::parse("route", "unclosed '('"));
    }
    Ok(facility)
}

pub fn furthest_room(facility: &Facility) -> usize {
    facility.distances().values().copied().max().unwrap_or(0)
}

pub fn rooms_at_least(facility: &Facility, doors: usize) -> usize {
    facility
        .distances()
        .values()
        .filter(|&&d| d >= doors)
        .count()
}
