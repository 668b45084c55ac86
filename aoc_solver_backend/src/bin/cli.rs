extern crate aoc_core;
extern crate aoc_solver_backend;

use std::fs;

use aoc_core::config::Config;
use aoc_core::{Error, Result};
use aoc_solver_backend::{response_json, solve_problem, Solution};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let layer = fmt::layer().compact().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .ok();
}

fn run(config: &Config) -> Result<Solution> {
    let path = config.input_path();
    let input = fs::read_to_string(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    info!("solving day {} with {}", config.day, path);
    solve_problem(config.day, &input, config.parts, config.render)
}

fn main() {
    let config = Config::parse_from_args();
    init_logging(config.verbose);

    let result = run(&config);
    if config.json {
        println!("{}", response_json(&result));
        if result.is_err() {
            std::process::exit(1);
        }
        return;
    }

    match result {
        Ok(solution) => {
            if let Some(answer) = &solution.part1 {
                println!("Part 1: {}", answer);
            }
            if let Some(answer) = &solution.part2 {
                println!("Part 2: {}", answer);
            }
            if let Some(board) = &solution.board {
                print!("{}", board.to_text());
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
