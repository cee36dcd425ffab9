//! Heuristic language detection.
//!
//! Detection runs an ordered table of `(language, pattern)` pairs over the
//! first [`SAMPLE_CHARS`] characters of the text and returns the first hit.
//! Order encodes precedence: TypeScript's annotation pattern is tried before
//! the broader JavaScript one, and C++ before C, so the more specific
//! language wins over its superset. No hit means `Unknown`.

use crate::models::Language;
use regex::Regex;
use std::sync::LazyLock;

/// Only this many leading characters take part in detection.
pub const SAMPLE_CHARS: usize = 2000;

const PATTERNS: [(Language, &str); 12] = [
    (
        Language::TypeScript,
        r":\s*(string|number|boolean|any|unknown|never|\w+\[\])",
    ),
    (
        Language::JavaScript,
        r#"(const|let|var)\s+\w+\s*=|function\s*\(|=>|import\s+.*from\s+['"]"#,
    ),
    (
        Language::Python,
        r"(?m)def\s+\w+\(|class\s+\w+:|print\(|^\s*import\s+\w+",
    ),
    (
        Language::Cpp,
        r"#include\s*<.*>|std::|using\s+namespace\s+std",
    ),
    (Language::C, r"#include\s*<.*>|printf\s*\("),
    (
        Language::Java,
        r"public\s+class\s+|System\.out\.println|public\s+static\s+void\s+main",
    ),
    (Language::Go, r"package\s+main|fmt\."),
    (Language::Rust, r"fn\s+main\(\)|let\s+mut\s+|println!"),
    (Language::Php, r"<\?php|\$\w+\s*=|echo\s+"),
    (
        Language::Html,
        r"(?i)<(!DOCTYPE|html|head|body|div|span|script|style|img|a)[\s>]",
    ),
    (
        Language::Css,
        r"\.[a-zA-Z0-9_-]+\s*\{|#[a-fA-F0-9]{3,6}\b|:\s*(flex|grid|block|inline)",
    ),
    (Language::Shell, r"^#!"),
];

static DETECTORS: LazyLock<Vec<(Language, Regex)>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .filter_map(|(lang, pat)| Regex::new(pat).ok().map(|re| (*lang, re)))
        .collect()
});

/// Leading slice of `text` used for detection, cut on a char boundary.
pub fn sample(text: &str) -> &str {
    match text.char_indices().nth(SAMPLE_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Guess the language of `text`. Total: never fails, `Unknown` on no match.
pub fn detect_language(text: &str) -> Language {
    let sample = sample(text);
    let lang = DETECTORS
        .iter()
        .find(|(_, re)| re.is_match(sample))
        .map(|(lang, _)| *lang)
        .unwrap_or(Language::Unknown);
    tracing::trace!(language = %lang, sample_len = sample.len(), "language detected");
    lang
}
