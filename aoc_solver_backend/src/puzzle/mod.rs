use std::fmt::Display;

use aoc_core::config::Parts;
use aoc_core::error::{Error, Result};

use crate::board::Board;
use crate::Solution;

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod day13;
mod day14;
mod day15;
mod day16;
mod day17;
mod day18;
mod day19;
mod day20;
mod day21;
mod day22;
mod day23;
mod day24;
mod day25;

/// Computes an answer only if its part was requested.
fn part<F>(wanted: bool, answer: F) -> Result<Option<String>>
where
    F: FnOnce() -> Result<String>,
{
    if wanted {
        answer().map(Some)
    } else {
        Ok(None)
    }
}

fn found<T: Display>(value: Option<T>, missing: &'static str) -> Result<String> {
    value.map(|v| v.to_string()).ok_or(Error::NoSolution(missing))
}

pub fn solve(day: u32, input: &str, parts: Parts) -> Result<Solution> {
    match day {
        1 => day01::solve_day01(input, parts),
        2 => day02::solve_day02(input, parts),
        3 => day03::solve_day03(input, parts),
        4 => day04::solve_day04(input, parts),
        5 => day05::solve_day05(input, parts),
        6 => day06::solve_day06(input, parts),
        7 => day07::solve_day07(input, parts),
        8 => day08::solve_day08(input, parts),
        9 => day09::solve_day09(input, parts),
        10 => day10::solve_day10(input, parts),
        11 => day11::solve_day11(input, parts),
        12 => day12::solve_day12(input, parts),
        13 => day13::solve_day13(input, parts),
        14 => day14::solve_day14(input, parts),
        15 => day15::solve_day15(input, parts),
        16 => day16::solve_day16(input, parts),
        17 => day17::solve_day17(input, parts),
        18 => day18::solve_day18(input, parts),
        19 => day19::solve_day19(input, parts),
        20 => day20::solve_day20(input, parts),
        21 => day21::solve_day21(input, parts),
        22 => day22::solve_day22(input, parts),
        23 => day23::solve_day23(input, parts),
        24 => day24::solve_day24(input, parts),
        25 => day25::solve_day25(input, parts),
        _ => Err(Error::UnknownDay(day)),
    }
}

/// Board of the days that have a picture to show; `None` for the others.
pub fn render(day: u32, input: &str) -> Result<Option<Board>> {
    let board = match day {
        6 => day06::render_day06(input)?,
        10 => day10::render_day10(input)?,
        13 => day13::render_day13(input)?,
        15 => day15::render_day15(input)?,
        17 => day17::render_day17(input)?,
        18 => day18::render_day18(input)?,
        1..=25 => return Ok(None),
        _ => return Err(Error::UnknownDay(day)),
    };
    Ok(Some(board))
}
