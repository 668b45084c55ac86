use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line (or the whole input) did not match the puzzle's input format.
    #[error("parse error ({context}): {message}")]
    Parse {
        context: &'static str,
        message: String,
    },

    #[error("unknown day: {0}")]
    UnknownDay(u32),

    /// The input was well-formed but the puzzle has no answer for it.
    #[error("no solution: {0}")]
    NoSolution(&'static str),
}

impl Error {
    pub fn parse(context: &'static str, message: impl Into<String>) -> Error {
        Error::Parse {
            context,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
