//! Rule table for the review engine.
//!
//! Each rule is a pure predicate over a single line ([`LineRule`]) or over
//! the whole document ([`DocRule`]) plus the message it reports. Rules are
//! grouped into [`RuleSet`]s: the generic set applies to every language and
//! [`rule_set`] returns the one language-specific set for a label. Adding a
//! rule is a table edit; the engine iterates sets uniformly.
//!
//! The terminator, equality, and `<img>` heuristics below are shared with
//! the quick fixer so that a fix never leaves behind what its rule flags.

use crate::models::{Language, RuleId};
use regex::Regex;
use std::sync::LazyLock;

/// Text split into lines on `\n` or `\r\n`, keeping a trailing empty line.
pub struct Document<'a> {
    pub text: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        Document {
            text,
            lines: split_lines(text),
        }
    }
}

/// Split on `\n`, dropping the `\r` of `\r\n` pairs. A lone `\r` at the very
/// end stays on the last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        let l: &str = *line;
        *line = l.strip_suffix('\r').unwrap_or(l);
    }
    lines
}

/// Rule evaluated once per line; reported with the line's location.
pub struct LineRule {
    pub id: RuleId,
    pub message: &'static str,
    pub check: fn(&str) -> bool,
}

/// Rule evaluated once per document; reported without a location.
pub struct DocRule {
    pub id: RuleId,
    pub message: &'static str,
    pub check: fn(&Document<'_>) -> bool,
}

pub struct RuleSet {
    pub line: &'static [LineRule],
    pub document: &'static [DocRule],
}

pub static GENERIC: RuleSet = RuleSet {
    line: &[
        LineRule {
            id: RuleId::TrailingWhitespace,
            message: "Remove trailing spaces.",
            check: has_trailing_whitespace,
        },
        LineRule {
            id: RuleId::Tabs,
            message: "Replace tabs with spaces for consistency.",
            check: has_tab,
        },
    ],
    document: &[DocRule {
        id: RuleId::FinalNewline,
        message: "Add a newline at end of file.",
        check: lacks_final_newline,
    }],
};

static SCRIPT: RuleSet = RuleSet {
    line: &[
        LineRule {
            id: RuleId::Semicolons,
            message: "Consider adding semicolons for consistency.",
            check: needs_terminator,
        },
        LineRule {
            id: RuleId::Equality,
            message: "Use strict equality (===/!==).",
            check: has_loose_equality,
        },
        LineRule {
            id: RuleId::ConsoleLog,
            message: "Remove debug console.log statements.",
            check: has_console_log,
        },
        LineRule {
            id: RuleId::Var,
            message: "Prefer const/let over var.",
            check: has_var_declaration,
        },
    ],
    document: &[],
};

static PYTHON: RuleSet = RuleSet {
    line: &[
        LineRule {
            id: RuleId::NoneCompare,
            message: "Use 'is None' instead of '== None'.",
            check: has_eq_none,
        },
        LineRule {
            id: RuleId::NoneCompare,
            message: "Use 'is not None' instead of '!= None'.",
            check: has_ne_none,
        },
        LineRule {
            id: RuleId::PrintPy2,
            message: "Use print() function syntax.",
            check: has_print_statement,
        },
    ],
    document: &[DocRule {
        id: RuleId::Indentation,
        message: "Avoid mixing tabs and spaces for indentation.",
        check: has_mixed_indentation,
    }],
};

static CPP: RuleSet = RuleSet {
    line: &[LineRule {
        id: RuleId::Namespace,
        message: "Avoid 'using namespace std;' in headers and large scopes.",
        check: has_using_namespace_std,
    }],
    document: &[],
};

static HTML: RuleSet = RuleSet {
    line: &[LineRule {
        id: RuleId::ImgAlt,
        message: "Add alt attribute to images for accessibility.",
        check: has_img_without_alt,
    }],
    document: &[DocRule {
        id: RuleId::LangAttr,
        message: "Add lang attribute to <html> tag.",
        check: html_lacks_lang,
    }],
};

static CSS: RuleSet = RuleSet {
    line: &[LineRule {
        id: RuleId::Important,
        message: "Avoid overusing !important.",
        check: has_important,
    }],
    document: &[],
};

static NONE: RuleSet = RuleSet {
    line: &[],
    document: &[],
};

/// Language-specific rules for `lang`; empty for languages without any.
pub fn rule_set(lang: Language) -> &'static RuleSet {
    match lang {
        l if l.is_script() => &SCRIPT,
        Language::Python => &PYTHON,
        Language::Cpp => &CPP,
        Language::Html => &HTML,
        Language::Css => &CSS,
        _ => &NONE,
    }
}

fn re(pattern: &str) -> Option<Regex> {
    Regex::new(pattern).ok()
}

fn matches(re: &LazyLock<Option<Regex>>, s: &str) -> bool {
    re.as_ref().is_some_and(|r| r.is_match(s))
}

static ENDS_WITH_PUNCT: LazyLock<Option<Regex>> = LazyLock::new(|| re(r"[;{\[,:]$"));
static ENDS_WITH_OPERAND: LazyLock<Option<Regex>> =
    LazyLock::new(|| re(r#"[A-Za-z0-9_)"'\]}]$"#));
static CONTROL_FLOW: LazyLock<Option<Regex>> =
    LazyLock::new(|| re(r"^\s*(if|for|while|else|switch|try|catch|finally)\b"));
static VAR_DECL: LazyLock<Option<Regex>> = LazyLock::new(|| re(r"\bvar\s+"));
static EQ_NONE: LazyLock<Option<Regex>> = LazyLock::new(|| re(r"==\s*None\b"));
static NE_NONE: LazyLock<Option<Regex>> = LazyLock::new(|| re(r"!=\s*None\b"));
static PRINT_STMT: LazyLock<Option<Regex>> = LazyLock::new(|| re(r"\bprint\s+[^(\s]"));
static USING_STD: LazyLock<Option<Regex>> =
    LazyLock::new(|| re(r"using\s+namespace\s+std\s*;"));
static IMG_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| re(r"(?i)<img\b([^>]*)"));
static ALT_ATTR: LazyLock<Option<Regex>> = LazyLock::new(|| re(r"(?i)\balt="));
static HTML_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| re(r"(?i)<html\b"));
static HTML_LANG: LazyLock<Option<Regex>> = LazyLock::new(|| re(r"(?i)<html\b[^>]*lang="));

fn has_trailing_whitespace(line: &str) -> bool {
    line.trim_end().len() != line.len()
}

fn has_tab(line: &str) -> bool {
    line.contains('\t')
}

fn lacks_final_newline(doc: &Document<'_>) -> bool {
    !doc.text.is_empty() && !doc.text.ends_with('\n')
}

/// Non-empty statement line that ends in an operand and is not a
/// control-flow header. Multi-line statements are not tracked.
pub(crate) fn needs_terminator(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && !matches(&ENDS_WITH_PUNCT, trimmed)
        && matches(&ENDS_WITH_OPERAND, trimmed)
        && !matches(&CONTROL_FLOW, trimmed)
}

/// Byte offsets of `==` / `!=` operators that are not part of `===` / `!==`.
pub(crate) fn loose_equality_ops(line: &str) -> Vec<usize> {
    let b = line.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i + 1 < b.len() {
        if b[i + 1] == b'=' && (b[i] == b'=' || b[i] == b'!') {
            let before_ok = b[i] == b'!' || i == 0 || !matches!(b[i - 1], b'=' | b'!');
            let after_ok = b.get(i + 2) != Some(&b'=');
            if before_ok && after_ok {
                found.push(i);
                i += 2;
                continue;
            }
        }
        i += 1;
    }
    found
}

fn has_loose_equality(line: &str) -> bool {
    !loose_equality_ops(line).is_empty()
}

fn has_console_log(line: &str) -> bool {
    line.contains("console.log(")
}

fn has_var_declaration(line: &str) -> bool {
    matches(&VAR_DECL, line)
}

fn has_eq_none(line: &str) -> bool {
    matches(&EQ_NONE, line)
}

fn has_ne_none(line: &str) -> bool {
    matches(&NE_NONE, line)
}

fn has_print_statement(line: &str) -> bool {
    matches(&PRINT_STMT, line)
}

fn has_mixed_indentation(doc: &Document<'_>) -> bool {
    let indents: Vec<&str> = doc
        .lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| &l[..l.len() - l.trim_start().len()])
        .collect();
    indents.iter().any(|i| i.contains('\t')) && indents.iter().any(|i| i.contains(' '))
}

fn has_using_namespace_std(line: &str) -> bool {
    matches(&USING_STD, line)
}

/// True when the attribute run of an `<img` tag (up to `>`) has no `alt=`.
pub(crate) fn img_attrs_lack_alt(attrs: &str) -> bool {
    !matches(&ALT_ATTR, attrs)
}

fn has_img_without_alt(line: &str) -> bool {
    let Some(img) = IMG_TAG.as_ref() else {
        return false;
    };
    img.captures_iter(line)
        .any(|c| c.get(1).is_some_and(|a| img_attrs_lack_alt(a.as_str())))
}

fn html_lacks_lang(doc: &Document<'_>) -> bool {
    matches(&HTML_TAG, doc.text) && !matches(&HTML_LANG, doc.text)
}

fn has_important(line: &str) -> bool {
    line.contains("!important")
}
