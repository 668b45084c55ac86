extern crate aoc_core;
extern crate aoc_puzzles;

pub mod board;
mod puzzle;

use aoc_core::config::Parts;
use aoc_core::Result;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::board::Board;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub part1: Option<String>,
    pub part2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
}

/// Solves the requested parts of `day`, attaching its board when `render` is set.
pub fn solve_problem(day: u32, input: &str, parts: Parts, render: bool) -> Result<Solution> {
    let mut solution = puzzle::solve(day, input, parts)?;
    if render {
        solution.board = puzzle::render(day, input)?;
        if solution.board.is_none() {
            debug!("day {} has no board", day);
        }
    }
    Ok(solution)
}

/// `{"status":"ok","description":...}` or `{"status":"error","description":"..."}`.
pub fn response_json(result: &Result<Solution>) -> String {
    let value = match result {
        Ok(solution) => json!({ "status": "ok", "description": solution }),
        Err(err) => json!({ "status": "error", "description": err.to_string() }),
    };
    value.to_string()
}
