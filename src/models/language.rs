//! Language labels produced by detection and accepted as overrides.
//!
//! Labels serialize with their display form (`C++`, `TypeScript`, ...).
//! Parsing is case-insensitive and also accepts the short aliases people
//! type on a command line (`ts`, `py`, `cpp`, `sh`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// The fixed set of languages the reviewer can recognize.
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    #[serde(rename = "C++")]
    Cpp,
    C,
    Java,
    Go,
    Rust,
    #[serde(rename = "PHP")]
    Php,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    Shell,
    Unknown,
}

impl Language {
    /// Every label, in detection precedence order, `Unknown` last.
    pub const ALL: [Language; 13] = [
        Language::TypeScript,
        Language::JavaScript,
        Language::Python,
        Language::Cpp,
        Language::C,
        Language::Java,
        Language::Go,
        Language::Rust,
        Language::Php,
        Language::Html,
        Language::Css,
        Language::Shell,
        Language::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::Java => "Java",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Php => "PHP",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Shell => "Shell",
            Language::Unknown => "Unknown",
        }
    }

    /// JavaScript and TypeScript share one rule set and one fix pass.
    pub fn is_script(self) -> bool {
        matches!(self, Language::JavaScript | Language::TypeScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Returned when a language name matches neither a label nor an alias.
#[error("unknown language '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let lang = match key.as_str() {
            "typescript" | "ts" | "tsx" => Language::TypeScript,
            "javascript" | "js" | "jsx" | "mjs" => Language::JavaScript,
            "python" | "py" => Language::Python,
            "c++" | "cpp" | "cxx" | "cc" => Language::Cpp,
            "c" => Language::C,
            "java" => Language::Java,
            "go" | "golang" => Language::Go,
            "rust" | "rs" => Language::Rust,
            "php" => Language::Php,
            "html" | "htm" => Language::Html,
            "css" => Language::Css,
            "shell" | "sh" | "bash" => Language::Shell,
            "unknown" => Language::Unknown,
            _ => return Err(UnknownLanguage(s.to_string())),
        };
        Ok(lang)
    }
}
