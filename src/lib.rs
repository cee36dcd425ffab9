//! snipcheck core library.
//!
//! This crate exposes a heuristic code reviewer for pasted snippets: guess
//! the language, flag a fixed set of style issues per line, and produce a
//! best-effort auto-fixed copy of the text. Detection, review, and fixing
//! are pure functions of their input and never fail.
//!
//! High-level modules:
//! - `detect`: Ordered-pattern language detection over a text prefix.
//! - `checks`: The rule table (line and document rules per language).
//! - `lint`: Review engine running the rule table; batch review.
//! - `fix`: Quick-fix passes; batch fix and in-place write.
//! - `models`: Data models for languages, rules, issues, and results.
//! - `input`: Reading stdin, files, and glob patterns.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `output`: Human/JSON printers for review/fix/detect.
//! - `error`: Errors raised at the I/O boundary.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod fix;
pub mod input;
pub mod lint;
pub mod models;
pub mod output;
pub mod utils;

pub use detect::detect_language;
pub use fix::quick_fix;
pub use lint::{analyze, analyze_with, ReviewOptions};
pub use models::{Issue, Language, Location, ReviewResult, RuleId};
