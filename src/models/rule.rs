//! Rule identifiers reported in issues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Tag naming the rule that raised an issue. Serialized as the bare tag.
pub enum RuleId {
    TrailingWhitespace,
    Tabs,
    FinalNewline,
    Semicolons,
    Equality,
    ConsoleLog,
    Var,
    NoneCompare,
    PrintPy2,
    Indentation,
    Namespace,
    ImgAlt,
    LangAttr,
    Important,
}

impl RuleId {
    pub const ALL: [RuleId; 14] = [
        RuleId::TrailingWhitespace,
        RuleId::Tabs,
        RuleId::FinalNewline,
        RuleId::Semicolons,
        RuleId::Equality,
        RuleId::ConsoleLog,
        RuleId::Var,
        RuleId::NoneCompare,
        RuleId::PrintPy2,
        RuleId::Indentation,
        RuleId::Namespace,
        RuleId::ImgAlt,
        RuleId::LangAttr,
        RuleId::Important,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::TrailingWhitespace => "TrailingWhitespace",
            RuleId::Tabs => "Tabs",
            RuleId::FinalNewline => "FinalNewline",
            RuleId::Semicolons => "Semicolons",
            RuleId::Equality => "Equality",
            RuleId::ConsoleLog => "ConsoleLog",
            RuleId::Var => "Var",
            RuleId::NoneCompare => "NoneCompare",
            RuleId::PrintPy2 => "PrintPy2",
            RuleId::Indentation => "Indentation",
            RuleId::Namespace => "Namespace",
            RuleId::ImgAlt => "ImgAlt",
            RuleId::LangAttr => "LangAttr",
            RuleId::Important => "Important",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rule '{0}'")]
pub struct UnknownRule(pub String);

impl FromStr for RuleId {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        RuleId::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("consolelog".parse::<RuleId>(), Ok(RuleId::ConsoleLog));
        assert_eq!("ImgAlt".parse::<RuleId>(), Ok(RuleId::ImgAlt));
        let err = "NoSuchRule".parse::<RuleId>().unwrap_err();
        assert_eq!(err, UnknownRule("NoSuchRule".to_string()));
        assert_eq!(err.to_string(), "unknown rule 'NoSuchRule'");
    }
}
