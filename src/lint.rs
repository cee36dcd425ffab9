//! Review engine: runs the rule table over a text.
//!
//! Produces a `ReviewResult` with the detected language and the issues in
//! scan order: generic line rules (line-major), the generic document rule,
//! then the one language-specific set. Issues are never deduplicated.

use crate::checks::{rule_set, Document, RuleSet, GENERIC};
use crate::detect::detect_language;
use crate::input::Input;
use crate::models::{FileReview, Issue, Language, ReviewReport, ReviewResult, RuleId, Summary};
use rayon::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
/// Caller knobs layered over plain [`analyze`].
pub struct ReviewOptions {
    /// Use this language instead of detecting one.
    pub language: Option<Language>,
    /// Drop issues raised by these rules.
    pub disabled: BTreeSet<RuleId>,
}

/// Detect the language of `text` and run every applicable rule.
pub fn analyze(text: &str) -> ReviewResult {
    analyze_with(text, &ReviewOptions::default())
}

pub fn analyze_with(text: &str, opts: &ReviewOptions) -> ReviewResult {
    let language = opts.language.unwrap_or_else(|| detect_language(text));
    let doc = Document::new(text);
    let mut issues = Vec::new();
    for set in [&GENERIC, rule_set(language)] {
        run_set(set, &doc, &mut issues);
    }
    if !opts.disabled.is_empty() {
        issues.retain(|i| !opts.disabled.contains(&i.rule));
    }
    tracing::debug!(
        language = %language,
        lines = doc.lines.len(),
        issues = issues.len(),
        "analyzed text"
    );
    ReviewResult { language, issues }
}

fn run_set(set: &RuleSet, doc: &Document<'_>, issues: &mut Vec<Issue>) {
    for (idx, line) in doc.lines.iter().enumerate() {
        for rule in set.line {
            if (rule.check)(line) {
                tracing::trace!(rule = %rule.id, line = idx + 1, "rule matched");
                issues.push(Issue::at_line(rule.id, rule.message, idx));
            }
        }
    }
    for rule in set.document {
        if (rule.check)(doc) {
            tracing::trace!(rule = %rule.id, "document rule matched");
            issues.push(Issue::document(rule.id, rule.message));
        }
    }
}

/// Review every input independently. Results keep input order.
pub fn run_review(inputs: &[Input], opts: &ReviewOptions) -> ReviewReport {
    let results: Vec<FileReview> = inputs
        .par_iter()
        .map(|input| {
            let res = analyze_with(&input.text, opts);
            FileReview {
                file: input.name.clone(),
                language: res.language,
                issues: res.issues,
            }
        })
        .collect();
    let summary = Summary {
        issues: results.iter().map(|r| r.issues.len()).sum(),
        files: results.len(),
    };
    ReviewReport { results, summary }
}
