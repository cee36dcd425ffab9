//! Quick fixer: deterministic, non-interactive rewrites.
//!
//! Passes run in a fixed sequence, each over the previous pass's output:
//! - Generic (always): strip trailing whitespace, expand tabs to four
//!   spaces, ensure the text ends with a newline (existing extra trailing
//!   newlines are kept).
//! - Then at most one language pass:
//!   - JavaScript/TypeScript: terminate statement lines, make `==`/`!=`
//!     strict, and replace `var` with `let`.
//!   - Python: `== None` becomes `is None`, `!= None` becomes `is not None`.
//!   - HTML: self-closing `<img ... />` without `alt` gains `alt=""`.
//!
//! Each rewrite is stable for the rule it targets: running the fixer on its
//! own output does not reintroduce that rule's issue. The `var` rewrite is
//! a blind per-line token swap that does not look at strings, comments, or
//! scoping.

use crate::checks::{img_attrs_lack_alt, loose_equality_ops, needs_terminator, split_lines};
use crate::error::{Result, SnipError};
use crate::input::Input;
use crate::models::{FixResult, Language};
use rayon::prelude::*;
use regex::{Captures, Regex};
use std::fs;
use std::sync::LazyLock;

static VAR_KEYWORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\bvar\b").ok());
static EQ_NONE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"==\s*None\b").ok());
static NE_NONE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"!=\s*None\b").ok());
static SELF_CLOSING_IMG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(<img\b)([^>]*?)\s*/>").ok());

/// Apply the generic pass and the pass for `language` to `text`.
pub fn quick_fix(text: &str, language: Language) -> String {
    let generic = fix_generic(text);
    let out = match language {
        l if l.is_script() => fix_script(&generic),
        Language::Python => fix_python(&generic),
        Language::Html => fix_html(&generic),
        _ => generic,
    };
    tracing::debug!(
        language = %language,
        before = text.len(),
        after = out.len(),
        "quick fix applied"
    );
    out
}

fn fix_generic(text: &str) -> String {
    let mut out = split_lines(text)
        .into_iter()
        .map(|line| line.trim_end().replace('\t', "    "))
        .collect::<Vec<_>>()
        .join("\n");
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn fix_script(text: &str) -> String {
    text.split('\n')
        .map(fix_script_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn fix_script_line(line: &str) -> String {
    let terminate = needs_terminator(line);
    let strict = strict_equality(line);
    let mut fixed = match VAR_KEYWORD.as_ref() {
        Some(re) => re.replace_all(&strict, "let").into_owned(),
        None => strict,
    };
    if terminate {
        fixed.push(';');
    }
    fixed
}

/// Turn every loose `==`/`!=` on the line into `===`/`!==`.
fn strict_equality(line: &str) -> String {
    let ops = loose_equality_ops(line);
    if ops.is_empty() {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + ops.len());
    let mut last = 0;
    for at in ops {
        out.push_str(&line[last..at + 2]);
        out.push('=');
        last = at + 2;
    }
    out.push_str(&line[last..]);
    out
}

fn fix_python(text: &str) -> String {
    let out = replace_none_compare(text, &EQ_NONE, "is None");
    replace_none_compare(&out, &NE_NONE, "is not None")
}

/// Swap each match of `re` for `with`, separated by one space from a
/// preceding non-blank so that leading indentation is left alone.
fn replace_none_compare(text: &str, re: &LazyLock<Option<Regex>>, with: &str) -> String {
    let Some(re) = re.as_ref() else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &Captures| {
        let start = caps.get(0).map_or(0, |m| m.start());
        match text[..start].chars().next_back() {
            Some(c) if !c.is_whitespace() => format!(" {}", with),
            _ => with.to_string(),
        }
    })
    .into_owned()
}

fn fix_html(text: &str) -> String {
    let Some(re) = SELF_CLOSING_IMG.as_ref() else {
        return text.to_string();
    };
    re.replace_all(text, |caps: &Captures| {
        let attrs = &caps[2];
        if img_attrs_lack_alt(attrs) {
            format!("{}{} alt=\"\" />", &caps[1], attrs)
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

/// Fix every input independently. `language` overrides detection.
pub fn run_fix(inputs: &[Input], language: Option<Language>) -> Vec<FixResult> {
    inputs
        .par_iter()
        .map(|input| {
            let lang = language.unwrap_or_else(|| crate::detect::detect_language(&input.text));
            let fixed = quick_fix(&input.text, lang);
            FixResult {
                file: input.name.clone(),
                path: input.path.clone(),
                language: lang,
                changed: fixed != input.text,
                wrote: false,
                fixed,
                original: input.text.clone(),
            }
        })
        .collect()
}

/// Write changed results back to their files.
///
/// Every result must come from a file: standard input or the sample fails
/// the whole batch before anything is written.
pub fn write_results(results: &mut [FixResult]) -> Result<()> {
    if let Some(r) = results.iter().find(|r| r.path.is_none()) {
        return Err(SnipError::WriteStdin {
            name: r.file.clone(),
        });
    }
    for r in results.iter_mut().filter(|r| r.changed) {
        let Some(path) = r.path.as_ref() else {
            continue;
        };
        fs::write(path, &r.fixed).map_err(|source| SnipError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(file = %r.file, "wrote fixed file");
        r.wrote = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{analyze, analyze_with, ReviewOptions};
    use crate::models::RuleId;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn review_as(text: &str, lang: Language) -> crate::models::ReviewResult {
        analyze_with(
            text,
            &ReviewOptions {
                language: Some(lang),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_generic_pass() {
        assert_eq!(quick_fix("a  \n\tb", Language::Unknown), "a\n    b\n");
        assert_eq!(quick_fix("x\r\ny\r\n", Language::Unknown), "x\ny\n");
        assert_eq!(quick_fix("", Language::Unknown), "\n");
    }

    #[test]
    fn test_generic_pass_keeps_extra_trailing_newlines() {
        assert_eq!(quick_fix("a\n\n\n", Language::Rust), "a\n\n\n");
    }

    #[test]
    fn test_script_scenario() {
        let text = "function f(){\n  console.log('hi')\n  var x = 1\n}\n";
        let fixed = quick_fix(text, Language::JavaScript);
        let lines: Vec<&str> = fixed.lines().collect();
        assert_eq!(lines[0], "function f(){");
        assert_eq!(lines[1], "  console.log('hi');");
        assert_eq!(lines[2], "  let x = 1;");
        let again = analyze(&fixed);
        assert!(!again.has_rule(RuleId::Semicolons));
        assert!(!again.has_rule(RuleId::Var));
    }

    #[test]
    fn test_strict_equality_rewrite() {
        let fixed = quick_fix("if (a == b) {}", Language::JavaScript);
        assert_eq!(fixed, "if (a === b) {}\n");
        assert!(loose_equality_ops(&fixed).is_empty());
        assert_eq!(
            quick_fix("x = a != b && c === d;", Language::TypeScript),
            "x = a !== b && c === d;\n"
        );
    }

    #[test]
    fn test_strict_equality_leaves_strict_operators() {
        let text = "if (a === b && c !== d) {\n";
        assert_eq!(quick_fix(text, Language::JavaScript), text);
    }

    #[test]
    fn test_var_rewrite_is_blind() {
        // documented imprecision: string contents are rewritten too
        assert_eq!(
            quick_fix("const s = 'var x';", Language::JavaScript),
            "const s = 'let x';\n"
        );
        assert_eq!(
            quick_fix("let variable = 1;", Language::JavaScript),
            "let variable = 1;\n"
        );
    }

    #[test]
    fn test_python_none_rewrite() {
        let fixed = quick_fix("x == None", Language::Python);
        assert!(fixed.contains("x is None"));
        assert!(!review_as(&fixed, Language::Python).has_rule(RuleId::NoneCompare));
        assert_eq!(
            quick_fix("if y!=None:\n    pass\n", Language::Python),
            "if y is not None:\n    pass\n"
        );
    }

    #[test]
    fn test_python_none_rewrite_keeps_indentation() {
        assert_eq!(
            quick_fix("if (x\n        == None):\n    pass\n", Language::Python),
            "if (x\n        is None):\n    pass\n"
        );
        assert_eq!(quick_fix("x==None", Language::Python), "x is None\n");
    }

    #[test]
    fn test_python_none_rewrite_handles_unicode_blanks() {
        let fixed = quick_fix("x ==\u{a0}None\n", Language::Python);
        assert_eq!(fixed, "x is None\n");
        assert!(!review_as(&fixed, Language::Python).has_rule(RuleId::NoneCompare));
    }

    #[test]
    fn test_html_scenario() {
        let fixed = quick_fix("<html><img src=\"a.png\"/></html>", Language::Html);
        assert_eq!(fixed, "<html><img src=\"a.png\" alt=\"\" /></html>\n");
        assert!(!review_as(&fixed, Language::Html).has_rule(RuleId::ImgAlt));
    }

    #[test]
    fn test_html_keeps_existing_alt_and_open_tags() {
        let with_alt = "<img alt=\"logo\" src=\"a.png\" />\n";
        assert_eq!(quick_fix(with_alt, Language::Html), with_alt);
        let open = "<img src=\"a.png\">\n";
        assert_eq!(quick_fix(open, Language::Html), open);
    }

    #[test]
    fn test_other_languages_only_get_generic_pass() {
        assert_eq!(quick_fix("x == None", Language::Rust), "x == None\n");
        assert_eq!(quick_fix("var a = 1", Language::Css), "var a = 1\n");
    }

    #[test]
    fn test_run_fix_and_write_results() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.js");
        std::fs::write(&path, "var a = 1\n").unwrap();
        let inputs = vec![Input::from_file(&path, "var a = 1\n".to_string())];
        let mut results = run_fix(&inputs, None);
        assert_eq!(results[0].language, Language::JavaScript);
        assert!(results[0].changed);
        write_results(&mut results).unwrap();
        assert!(results[0].wrote);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "let a = 1;\n");
    }

    #[test]
    fn test_write_results_rejects_stdin() {
        let inputs = vec![Input::stdin("var a = 1".to_string())];
        let mut results = run_fix(&inputs, None);
        assert!(matches!(
            write_results(&mut results),
            Err(SnipError::WriteStdin { .. })
        ));
        // unchanged stdin cannot be written either
        let mut clean = run_fix(&[Input::stdin("ok;\n".to_string())], None);
        assert!(!clean[0].changed);
        assert!(write_results(&mut clean).is_err());
    }

    #[test]
    fn test_write_results_checks_every_input_before_writing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.js");
        std::fs::write(&path, "var a = 1\n").unwrap();
        let inputs = vec![
            Input::from_file(&path, "var a = 1\n".to_string()),
            Input::stdin("var b = 2".to_string()),
        ];
        let mut results = run_fix(&inputs, None);
        let err = write_results(&mut results).unwrap_err();
        assert_eq!(err.to_string(), "<stdin> has no file to fix in place; drop --write");
        assert!(!results[0].wrote);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "var a = 1\n");
    }

    #[test]
    fn test_write_results_names_the_sample() {
        let mut results = run_fix(&[Input::sample()], None);
        let err = write_results(&mut results).unwrap_err();
        assert!(err.to_string().starts_with("<sample>"));
    }

    proptest! {
        #[test]
        fn prop_generic_fix_clears_whitespace_rules(text in "[ -~\t\r\n]{0,200}") {
            let fixed = quick_fix(&text, Language::Unknown);
            let res = review_as(&fixed, Language::Unknown);
            prop_assert!(!res.has_rule(RuleId::TrailingWhitespace));
            prop_assert!(!res.has_rule(RuleId::Tabs));
            prop_assert!(!res.has_rule(RuleId::FinalNewline));
        }

        #[test]
        fn prop_generic_fix_is_idempotent(text in "[ -~\t\r\n]{0,200}") {
            let once = quick_fix(&text, Language::Unknown);
            prop_assert_eq!(quick_fix(&once, Language::Unknown), once.clone());
        }

        #[test]
        fn prop_script_fix_is_stable_per_rule(text in "[a-z =!;(){}\n]{0,120}") {
            let fixed = quick_fix(&text, Language::JavaScript);
            let res = review_as(&fixed, Language::JavaScript);
            prop_assert!(!res.has_rule(RuleId::Semicolons));
            prop_assert!(!res.has_rule(RuleId::Equality));
            prop_assert!(!res.has_rule(RuleId::Var));
        }
    }
}
