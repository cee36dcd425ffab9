//! Errors at the I/O boundary.
//!
//! Detection, analysis, and fixing never fail; only reading inputs,
//! writing fixed files, and loading configuration do.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no files match '{pattern}'")]
    NoMatch { pattern: String },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("{name} has no file to fix in place; drop --write")]
    WriteStdin { name: String },
}

pub type Result<T> = std::result::Result<T, SnipError>;
