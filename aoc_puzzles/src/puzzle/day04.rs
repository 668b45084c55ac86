use std::collections::BTreeMap;

use aoc_core::error::Error;
use aoc_core::parser::{parse_lines, unsigned};
use aoc_core::Result;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{consumed, map, value},
    sequence::{delimited, terminated, tuple},
    IResult,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    BeginShift(u32),
    FallAsleep,
    WakeUp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// `YYYY-MM-DD HH:MM`; sorts chronologically.
    pub timestamp: String,
    pub minute: usize,
    pub event: Event,
}

fn timestamp(input: &str) -> IResult<&str, (&str, usize)> {
    map(
        consumed(tuple((
            digit1,
            char('-'),
            digit1,
            char('-'),
            digit1,
            char(' '),
            digit1,
            char(':'),
            unsigned::<usize>,
        ))),
        |(stamp, (.., minute))| (stamp, minute),
    )(input)
}

fn event(input: &str) -> IResult<&str, Event> {
    alt((
        map(
            delimited(tag("Guard #"), unsigned, tag(" begins shift")),
            Event::BeginShift,
        ),
        value(Event::FallAsleep, tag("falls asleep")),
        value(Event::WakeUp, tag("wakes up")),
    ))(input)
}

fn entry(input: &str) -> IResult<&str, Entry> {
    map(
        tuple((delimited(char('['), timestamp, terminated(char(']'), char(' '))), event)),
        |((timestamp, minute), event)| Entry {
            timestamp: String::from(timestamp),
            minute,
            event,
        },
    )(input)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardRecord {
    pub sleep_totals: [u32; 60],
    pub shifts: u32,
}

impl GuardRecord {
    fn new() -> GuardRecord {
        GuardRecord {
            sleep_totals: [0; 60],
            shifts: 0,
        }
    }

    pub fn total_sleep(&self) -> u32 {
        self.sleep_totals.iter().sum()
    }

    /// Average minutes asleep per shift.
    pub fn sleep_per_shift(&self) -> f64 {
        if self.shifts == 0 {
            0.0
        } else {
            self.total_sleep() as f64 / self.shifts as f64
        }
    }

    /// Minute most often spent asleep and how often; the earliest minute wins ties.
    pub fn sleepiest_minute(&self) -> (usize, u32) {
        let mut best = (0, self.sleep_totals[0]);
        for (minute, &n) in self.sleep_totals.iter().enumerate() {
            if n > best.1 {
                best = (minute, n);
            }
        }
        best
    }
}

/// Parses the log, which may be in any order, into per-guard records.
pub fn parse_input(input: &str) -> Result<BTreeMap<u32, GuardRecord>> {
    let mut entries = parse_lines(input, entry, "guard log")?;
    entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let mut guards = BTreeMap::new();
    let mut current = None;
    let mut asleep_since = None;
    for e in &entries {
        match e.event {
            Event::BeginShift(id) => {
                guards.entry(id).or_insert_with(GuardRecord::new).shifts += 1;
                current = Some(id);
                asleep_since = None;
            }
            Event::FallAsleep => {
                if current.is_none() {
                    return Err(Error::parse(
                        "guard log",
                        format!("nobody is on duty at {}", e.timestamp),
                    ));
                }
                asleep_since = Some(e.minute);
            }
            Event::WakeUp => {
                let (id, since) = match (current, asleep_since.take()) {
                    (Some(id), Some(since)) if since <= e.minute && e.minute <= 60 => (id, since),
                    _ => {
                        return Err(Error::parse(
                            "guard log",
                            format!("unexpected wake up at {}", e.timestamp),
                        ))
                    }
                };
                if let Some(record) = guards.get_mut(&id) {
                    for m in since..e.minute {
                        record.sleep_totals[m] += 1;
                    }
                }
            }
        }
    }
    Ok(guards)
}

/// Guard with the most minutes asleep, multiplied by that guard's sleepiest minute.
pub fn strategy1(guards: &BTreeMap<u32, GuardRecord>) -> Option<u64> {
    let mut best: Option<(u32, &GuardRecord)> = None;
    for (&id, record) in guards {
        if best.map_or(true, |(_, b)| record.total_sleep() > b.total_sleep()) {
            best = Some((id, record));
        }
    }
    let (id, record) = best?;
    let (minute, _) = record.sleepiest_minute();
    Some(id as u64 * minute as u64)
}

/// Guard most frequently asleep on the same minute, multiplied by that minute.
pub fn strategy2(guards: &BTreeMap<u32, GuardRecord>) -> Option<u64> {
    let mut best: Option<(u32, usize, u32)> = None;
    for (&id, record) in guards {
        let (minute, n) = record.sleepiest_minute();
        if best.map_or(true, |(_, _, b)| n > b) {
            best = Some((id, minute, n));
        }
    }
    best.map(|(id, minute, _)| id as u64 * minute as u64)
}
