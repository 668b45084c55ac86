use std::collections::{BTreeMap, BTreeSet};

use aoc_core::parser::parse_lines;
use aoc_core::Result;
use nom::{
    bytes::complete::tag,
    character::complete::satisfy,
    sequence::{delimited, pair, preceded},
    IResult,
};
use tracing::debug;

pub const WORKERS: usize = 5;
pub const BASE_TIME: u32 = 60;

/// Prerequisites of every step, including steps without any.
pub type Steps = BTreeMap<char, BTreeSet<char>>;

fn step_name(input: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_uppercase())(input)
}

fn dependency(input: &str) -> IResult<&str, (char, char)> {
    pair(
        preceded(tag("Step "), step_name),
        delimited(
            tag(" must be finished before step "),
            step_name,
            tag(" can begin."),
        ),
    )(input)
}

pub fn parse_input(input: &str) -> Result<Steps> {
    let mut steps = Steps::new();
    for (before, after) in parse_lines(input, dependency, "instructions")? {
        steps.entry(before).or_default();
        steps.entry(after).or_default().insert(before);
    }
    Ok(steps)
}

fn ready_steps<'a>(
    steps: &'a Steps,
    done: &'a BTreeSet<char>,
    started: &'a BTreeSet<char>,
) -> impl Iterator<Item = char> + 'a {
    steps
        .iter()
        .filter(move |&(s, deps)| !started.contains(s) && deps.is_subset(done))
        .map(|(&s, _)| s)
}

/// Steps in order, always taking the alphabetically first available one.
/// `None` if the dependencies are cyclic.
pub fn step_order(steps: &Steps) -> Option<String> {
    let mut done = BTreeSet::new();
    let mut order = String::new();
    while order.len() < steps.len() {
        let next = ready_steps(steps, &done, &done).next()?;
        done.insert(next);
        order.push(next);
    }
    Some(order)
}

pub fn step_duration(step: char, base_time: u32) -> u32 {
    base_time + (step as u32 - 'A' as u32 + 1)
}

/// Time to complete all steps with `workers` workers.
pub fn completion_time(steps: &Steps, workers: usize, base_time: u32) -> Option<u32> {
    let mut done = BTreeSet::new();
    let mut started = BTreeSet::new();
    // (finish time, step) of the steps in progress.
    let mut in_progress: Vec<(u32, char)> = vec![];
    let mut time = 0;

    while done.len() < steps.len() {
        let ready = ready_steps(steps, &done, &started).collect::<Vec<_>>();
        for s in ready.into_iter().take(workers.saturating_sub(in_progress.len())) {
            debug!("t={}: step {} started", time, s);
            started.insert(s);
            in_progress.push((time + step_duration(s, base_time), s));
        }
        // Nothing running means nothing can ever become ready.
        let finish = in_progress.iter().map(|&(t, _)| t).min()?;
        time = finish;
        in_progress.retain(|&(t, s)| {
            if t == finish {
                done.insert(s);
                false
            } else {
                true
            }
        });
    }
    Some(time)
}
