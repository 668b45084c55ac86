#[cfg(feature = "cli")]
pub mod config;
pub mod error;
#[cfg(feature = "parser")]
pub mod parser;
pub mod util;

pub use error::{Error, Result};
