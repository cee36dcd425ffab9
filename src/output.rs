//! Output rendering for review, fix, and detect commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-input fields and a top-level summary.

use crate::models::{FixResult, Issue, Language, ReviewReport};
use crate::utils::colors_enabled;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && colors_enabled()
}

fn pretty(v: &JsonVal) -> String {
    serde_json::to_string_pretty(v).unwrap_or_default()
}

/// Print review results in the requested format.
pub fn print_review(report: &ReviewReport, output: &str) {
    match output {
        "json" => println!("{}", pretty(&compose_review_json(report))),
        _ => {
            let color = use_colors(output);
            for r in &report.results {
                let header = format!("{} · Detected language: {}", r.file, r.language);
                if color {
                    println!("{}", header.bold());
                } else {
                    println!("{}", header);
                }
                if r.issues.is_empty() {
                    let ok = "No obvious issues detected. Your code looks good!";
                    if color {
                        println!("  {} {}", "✔".green(), ok);
                    } else {
                        println!("  ✔ {}", ok);
                    }
                }
                for is in &r.issues {
                    let icon = if color {
                        "▲".yellow().to_string()
                    } else {
                        "▲".to_string()
                    };
                    let rule = if color {
                        is.rule.as_str().bold().to_string()
                    } else {
                        is.rule.as_str().to_string()
                    };
                    println!("  {} {}", icon, format_issue(&rule, is));
                }
            }
            let summary = format!(
                "— Summary — issues={} files={}",
                report.summary.issues, report.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// `Rule: message (line N)`, the location only for line issues.
fn format_issue(rule: &str, is: &Issue) -> String {
    match is.line() {
        Some(line) => format!("{}: {} (line {})", rule, is.message, line),
        None => format!("{}: {}", rule, is.message),
    }
}

/// Print quick-fix results. A single input with neither `write` nor `diff`
/// prints the fixed text alone so the command can sit in a pipe; several
/// inputs each print their fixed text under a `--- path` header.
pub fn print_fix(results: &[FixResult], output: &str, write: bool, diff: bool) {
    match output {
        "json" => println!("{}", pretty(&compose_fix_json(results, write, diff))),
        _ => {
            let color = use_colors(output);
            if !write && !diff && results.len() == 1 {
                print!("{}", results[0].fixed);
                return;
            }
            for r in results {
                match fix_entry(r, write, diff) {
                    FixEntry::Unchanged => {
                        if color {
                            println!("{} {}", "no changes:".bright_black(), r.file);
                        } else {
                            println!("no changes: {}", r.file);
                        }
                    }
                    FixEntry::Written => {
                        if color {
                            println!("{} {}", "fixed:".green().bold(), r.file.bold());
                        } else {
                            println!("fixed: {}", r.file);
                        }
                    }
                    FixEntry::Body(body) => {
                        if color {
                            println!("{} {}\n{}", "---".cyan().bold(), r.file.bold(), body);
                        } else {
                            println!("--- {}\n{}", r.file, body);
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum FixEntry {
    Unchanged,
    Written,
    Body(String),
}

/// What a multi-input human listing shows for one result. Previews show
/// every input's text; only `write`/`diff` collapse unchanged inputs.
fn fix_entry(r: &FixResult, write: bool, diff: bool) -> FixEntry {
    if write || diff {
        if !r.changed {
            return FixEntry::Unchanged;
        }
        if write {
            return FixEntry::Written;
        }
        return FixEntry::Body(build_naive_diff(&r.original, &r.fixed));
    }
    FixEntry::Body(r.fixed.clone())
}

/// Print the detected language per input; a lone input prints just the label.
pub fn print_detect(detected: &[(String, Language)], output: &str) {
    match output {
        "json" => {
            let items: Vec<_> = detected
                .iter()
                .map(|(file, lang)| json!({"file": file, "language": lang}))
                .collect();
            println!("{}", pretty(&json!({ "results": items })));
        }
        _ => {
            if let [(_, lang)] = detected {
                println!("{}", lang);
                return;
            }
            for (file, lang) in detected {
                println!("{}\t{}", file, lang);
            }
        }
    }
}

fn build_naive_diff(old: &str, new: &str) -> String {
    let mut out = String::new();
    out.push_str("+++ new\n");
    out.push_str(new);
    out.push_str("--- old\n");
    out.push_str(old);
    out
}

/// Compose review JSON object (pure) for testing/snapshot purposes.
pub fn compose_review_json(report: &ReviewReport) -> JsonVal {
    json!({
        "results": report.results,
        "summary": report.summary,
    })
}

/// Compose fix JSON object (pure) for testing/snapshot purposes.
pub fn compose_fix_json(results: &[FixResult], write: bool, diff: bool) -> JsonVal {
    let items: Vec<_> = results
        .iter()
        .map(|r| {
            let preview = (!write).then_some(&r.fixed);
            let patch = (diff && r.changed).then(|| build_naive_diff(&r.original, &r.fixed));
            json!({
                "file": r.file,
                "language": r.language,
                "changed": r.changed,
                "wrote": r.wrote,
                "preview": preview,
                "diff": patch,
            })
        })
        .collect();
    let summary = json!({
        "changed": results.iter().filter(|r| r.changed).count(),
        "total": results.len(),
        "wrote": results.iter().filter(|r| r.wrote).count(),
    });
    json!({"results": items, "summary": summary})
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileReview, RuleId, Summary};

    fn fix_result(file: &str, original: &str, fixed: &str, wrote: bool) -> FixResult {
        FixResult {
            file: file.into(),
            path: None,
            language: Language::JavaScript,
            changed: original != fixed,
            wrote,
            fixed: fixed.into(),
            original: original.into(),
        }
    }

    #[test]
    fn test_compose_review_json_shape() {
        let report = ReviewReport {
            results: vec![FileReview {
                file: "a.js".into(),
                language: Language::Cpp,
                issues: vec![
                    Issue::at_line(RuleId::Var, "Prefer const/let over var.", 2),
                    Issue::document(RuleId::FinalNewline, "Add a newline at end of file."),
                ],
            }],
            summary: Summary {
                issues: 2,
                files: 1,
            },
        };
        let out = compose_review_json(&report);
        assert_eq!(out["summary"]["issues"], 2);
        assert_eq!(out["results"][0]["language"], "C++");
        assert_eq!(out["results"][0]["issues"][0]["rule"], "Var");
        assert_eq!(out["results"][0]["issues"][0]["location"]["line"], 3);
        // document issues carry no location key at all
        assert!(out["results"][0]["issues"][1]
            .as_object()
            .unwrap()
            .get("location")
            .is_none());
    }

    #[test]
    fn test_compose_fix_json_preview_and_diff() {
        let results = vec![
            fix_result("a.js", "var a = 1\n", "let a = 1;\n", false),
            fix_result("b.js", "ok;\n", "ok;\n", false),
        ];
        // Case: write=false, diff=true ⇒ previews everywhere, diff only when changed
        let out = compose_fix_json(&results, false, true);
        assert_eq!(out["summary"]["changed"], 1);
        assert_eq!(out["summary"]["wrote"], 0);
        assert!(out["results"][0]["preview"].is_string());
        assert!(out["results"][0]["diff"].is_string());
        assert!(out["results"][1]["diff"].is_null());
        // Case: write=true ⇒ no preview, wrote counted from results
        let written = vec![fix_result("a.js", "var a = 1\n", "let a = 1;\n", true)];
        let out2 = compose_fix_json(&written, true, false);
        assert_eq!(out2["summary"]["wrote"], 1);
        assert!(out2["results"][0]["preview"].is_null());
    }

    #[test]
    fn test_format_issue_location() {
        let line = Issue::at_line(RuleId::Tabs, "Replace tabs with spaces for consistency.", 0);
        assert_eq!(
            format_issue("Tabs", &line),
            "Tabs: Replace tabs with spaces for consistency. (line 1)"
        );
        let doc = Issue::document(RuleId::LangAttr, "Add lang attribute to <html> tag.");
        assert_eq!(format_issue("LangAttr", &doc), "LangAttr: Add lang attribute to <html> tag.");
    }

    #[test]
    fn test_fix_entry_previews_every_input() {
        let changed = fix_result("a.js", "var a = 1\n", "let a = 1;\n", false);
        let clean = fix_result("b.js", "ok;\n", "ok;\n", false);
        assert_eq!(fix_entry(&clean, false, false), FixEntry::Body("ok;\n".into()));
        assert_eq!(fix_entry(&changed, false, false), FixEntry::Body("let a = 1;\n".into()));
        assert_eq!(fix_entry(&clean, false, true), FixEntry::Unchanged);
        assert_eq!(fix_entry(&clean, true, false), FixEntry::Unchanged);
        assert_eq!(fix_entry(&changed, true, false), FixEntry::Written);
        assert_eq!(
            fix_entry(&changed, false, true),
            FixEntry::Body("+++ new\nlet a = 1;\n--- old\nvar a = 1\n".into())
        );
    }

    #[test]
    fn test_naive_diff_layout() {
        assert_eq!(build_naive_diff("a\n", "b\n"), "+++ new\nb\n--- old\na\n");
    }
}
