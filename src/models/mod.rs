//! Shared data models for review and fix outputs.

pub mod language;
pub mod rule;

pub use language::{Language, UnknownLanguage};
pub use rule::{RuleId, UnknownRule};

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// 1-based line position of a line-scoped issue.
pub struct Location {
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single flagged rule violation. Document-wide issues carry no location.
pub struct Issue {
    pub rule: RuleId,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Issue {
    pub fn at_line(rule: RuleId, message: &str, index: usize) -> Self {
        Issue {
            rule,
            message: message.to_string(),
            location: Some(Location { line: index + 1 }),
        }
    }

    pub fn document(rule: RuleId, message: &str) -> Self {
        Issue {
            rule,
            message: message.to_string(),
            location: None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        self.location.map(|l| l.line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Language plus issues in scan order for one text.
pub struct ReviewResult {
    pub language: Language,
    pub issues: Vec<Issue>,
}

impl ReviewResult {
    pub fn has_rule(&self, rule: RuleId) -> bool {
        self.issues.iter().any(|i| i.rule == rule)
    }

    /// Lines (1-based) flagged by `rule`, in scan order.
    pub fn lines_for(&self, rule: RuleId) -> Vec<usize> {
        self.issues
            .iter()
            .filter(|i| i.rule == rule)
            .filter_map(Issue::line)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
/// Review of one named input (file path or `<stdin>`).
pub struct FileReview {
    pub file: String,
    pub language: Language,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub issues: usize,
    pub files: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Review results container across all inputs of one run.
pub struct ReviewReport {
    pub results: Vec<FileReview>,
    pub summary: Summary,
}

#[derive(Debug, Clone)]
/// Quick-fix outcome for one named input.
pub struct FixResult {
    pub file: String,
    /// Source file; `None` for standard input and the built-in sample.
    pub path: Option<PathBuf>,
    pub language: Language,
    pub changed: bool,
    pub wrote: bool,
    pub fixed: String,
    pub original: String,
}
