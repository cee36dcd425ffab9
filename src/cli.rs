//! CLI argument parsing via `clap`.

use crate::models::Language;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "snipcheck",
    version,
    about = "Heuristic snippet reviewer",
    long_about = "snipcheck — guess the language of a code snippet, flag common style issues, and apply safe quick fixes.\n\nConfiguration precedence: CLI > snipcheck.toml > defaults.",
    after_help = "Examples:\n  pbpaste | snipcheck review\n  snipcheck review 'src/**/*.js' --output json\n  snipcheck fix page.html --diff\n  snipcheck fix app.js --write",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for reviewing, fixing, and detecting.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current snipcheck version.")]
    Version,
    /// Review inputs and report issues
    #[command(
        about = "Report style issues",
        long_about = "Detect the language of each input and report issues found by the generic and language-specific rules. Issues never affect the exit code.",
        after_help = "Examples:\n  snipcheck review main.py\n  cat page.html | snipcheck review --output json"
    )]
    Review {
        #[arg(help = "Files or glob patterns; '-' or nothing reads stdin")]
        inputs: Vec<String>,
        #[arg(long, help = "Repository root for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Skip detection and use this language (e.g. js, python, html)")]
        language: Option<Language>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Review the built-in sample when input is empty")]
        sample: bool,
    },
    /// Apply quick fixes
    #[command(
        about = "Apply quick fixes",
        long_about = "Apply the generic pass and the detected language's pass. A single input prints the fixed text alone. When --diff is set, write is disabled.",
        after_help = "Examples:\n  snipcheck fix < app.js > app.fixed.js\n  snipcheck fix 'web/*.html' --diff\n  snipcheck fix app.js --write"
    )]
    Fix {
        #[arg(help = "Files or glob patterns; '-' or nothing reads stdin")]
        inputs: Vec<String>,
        #[arg(long, help = "Repository root for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Skip detection and use this language (e.g. js, python, html)")]
        language: Option<Language>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Rewrite changed files in place")]
        write: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Show before/after for changed inputs (implies write=false)")]
        diff: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Fix the built-in sample when input is empty")]
        sample: bool,
    },
    /// Print the detected language
    #[command(
        about = "Detect language",
        long_about = "Print the language guessed for each input from its first 2000 characters."
    )]
    Detect {
        #[arg(help = "Files or glob patterns; '-' or nothing reads stdin")]
        inputs: Vec<String>,
        #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Print the built-in sample snippet
    #[command(about = "Print sample", long_about = "Print the JavaScript snippet used by --sample.")]
    Sample,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_review_with_language_alias() {
        let cli =
            Cli::try_parse_from(["snipcheck", "review", "a.js", "--language", "py", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.cmd {
            Commands::Review {
                inputs, language, ..
            } => {
                assert_eq!(inputs, vec!["a.js".to_string()]);
                assert_eq!(language, Some(Language::Python));
            }
            _ => panic!("expected review"),
        }
    }

    #[test]
    fn test_rejects_unknown_output_mode() {
        assert!(Cli::try_parse_from(["snipcheck", "review", "--output", "xml"]).is_err());
    }
}
