extern crate aoc_core;

pub mod device;
pub mod graph;
pub mod items;
pub mod puzzle;

#[cfg(feature = "generator")]
pub mod generator;
