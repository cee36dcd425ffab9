//! Input resolution for the CLI.
//!
//! An argument of `-` (or no argument at all) reads standard input. Any
//! other argument is a glob pattern; a pattern without glob metacharacters
//! is a plain path and must exist. Files are read as bytes and decoded
//! lossily so that odd encodings still get reviewed.

use crate::error::{Result, SnipError};
use crate::utils;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const STDIN_NAME: &str = "<stdin>";
pub const SAMPLE_NAME: &str = "<sample>";

/// Demo snippet reviewed for empty input when `--sample` is given.
pub const SAMPLE_SNIPPET: &str = "// Try me (JavaScript)
function greet(name){
  if(name == null){
    console.log('Hello, stranger')
    return 'Hi ' + name
  }
  var msg = 'Hello, ' + name
  return msg
}
";

#[derive(Debug, Clone)]
/// One text to review, with the name it is reported under.
pub struct Input {
    pub name: String,
    pub path: Option<PathBuf>,
    pub text: String,
}

impl Input {
    pub fn named(name: &str, text: &str) -> Self {
        Input {
            name: name.to_string(),
            path: None,
            text: text.to_string(),
        }
    }

    pub fn stdin(text: String) -> Self {
        Input {
            name: STDIN_NAME.to_string(),
            path: None,
            text,
        }
    }

    pub fn sample() -> Self {
        Input::named(SAMPLE_NAME, SAMPLE_SNIPPET)
    }

    pub fn from_file(path: &Path, text: String) -> Self {
        Input {
            name: utils::rel_to_wd(path),
            path: Some(path.to_path_buf()),
            text,
        }
    }
}

fn is_glob(arg: &str) -> bool {
    arg.contains(|c: char| matches!(c, '*' | '?' | '['))
}

/// Expand CLI arguments into file paths, keeping `-` for standard input.
/// Paths keep argument order; each pattern's matches are sorted.
pub fn expand_args(args: &[String]) -> Result<Vec<Option<PathBuf>>> {
    if args.is_empty() {
        return Ok(vec![None]);
    }
    let mut out: Vec<Option<PathBuf>> = Vec::new();
    for arg in args {
        if arg == "-" {
            out.push(None);
            continue;
        }
        if !is_glob(arg) {
            out.push(Some(PathBuf::from(arg)));
            continue;
        }
        let entries = glob::glob(arg).map_err(|source| SnipError::Glob {
            pattern: arg.clone(),
            source,
        })?;
        let mut matched: Vec<PathBuf> = entries.flatten().filter(|p| p.is_file()).collect();
        if matched.is_empty() {
            return Err(SnipError::NoMatch {
                pattern: arg.clone(),
            });
        }
        matched.sort();
        out.extend(matched.into_iter().map(Some));
    }
    // `-` twice would read an already drained stream
    let mut seen_stdin = false;
    out.retain(|p| p.is_some() || !std::mem::replace(&mut seen_stdin, true));
    Ok(out)
}

pub fn read_file(path: &Path) -> Result<Input> {
    let bytes = fs::read(path).map_err(|source| SnipError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Input::from_file(
        path,
        String::from_utf8_lossy(&bytes).into_owned(),
    ))
}

/// Resolve `args` into inputs, reading standard input from `stdin`.
///
/// With `use_sample`, an empty argument list yields the sample without
/// touching `stdin`, and any input that turns out empty is replaced by it.
pub fn read_inputs<R: Read>(
    args: &[String],
    use_sample: bool,
    mut stdin: R,
) -> Result<Vec<Input>> {
    if use_sample && args.is_empty() {
        return Ok(vec![Input::sample()]);
    }
    let mut inputs = Vec::new();
    for source in expand_args(args)? {
        let input = match source {
            Some(path) => read_file(&path)?,
            None => {
                let mut bytes = Vec::new();
                stdin.read_to_end(&mut bytes).map_err(SnipError::Stdin)?;
                Input::stdin(String::from_utf8_lossy(&bytes).into_owned())
            }
        };
        inputs.push(input);
    }
    if use_sample {
        for input in inputs.iter_mut().filter(|i| i.text.is_empty()) {
            tracing::debug!(input = %input.name, "empty input replaced by sample");
            input.text = SAMPLE_SNIPPET.to_string();
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_no_args_reads_stdin() {
        let inputs = read_inputs(&[], false, Cursor::new("var a = 1\n")).unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].name, STDIN_NAME);
        assert_eq!(inputs[0].text, "var a = 1\n");
        assert!(inputs[0].path.is_none());
    }

    #[test]
    fn test_sample_without_args_skips_stdin() {
        let inputs = read_inputs(&[], true, Cursor::new("ignored")).unwrap();
        assert_eq!(inputs[0].name, SAMPLE_NAME);
        assert_eq!(inputs[0].text, SAMPLE_SNIPPET);
    }

    #[test]
    fn test_sample_replaces_empty_stdin() {
        let args = vec!["-".to_string()];
        let inputs = read_inputs(&args, true, Cursor::new("")).unwrap();
        assert_eq!(inputs[0].name, STDIN_NAME);
        assert_eq!(inputs[0].text, SAMPLE_SNIPPET);
    }

    #[test]
    fn test_glob_expansion_is_sorted_and_files_only() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.js"), "b").unwrap();
        fs::write(root.join("a.js"), "a").unwrap();
        fs::create_dir_all(root.join("c.js")).unwrap();
        let pattern = root.join("*.js").to_string_lossy().to_string();
        let paths = expand_args(&[pattern]).unwrap();
        assert_eq!(
            paths,
            vec![Some(root.join("a.js")), Some(root.join("b.js"))]
        );
    }

    #[test]
    fn test_glob_without_matches_is_an_error() {
        let dir = tempdir().unwrap();
        let pattern = dir.path().join("*.nope").to_string_lossy().to_string();
        assert!(matches!(
            expand_args(&[pattern]),
            Err(SnipError::NoMatch { .. })
        ));
    }

    #[test]
    fn test_missing_plain_path_is_a_read_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.py").to_string_lossy().to_string();
        let err = read_inputs(&[missing], false, Cursor::new("")).unwrap_err();
        assert!(matches!(err, SnipError::Read { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        fs::write(&path, [b'a', 0xff, b'\n']).unwrap();
        let input = read_file(&path).unwrap();
        assert_eq!(input.text, "a\u{fffd}\n");
        assert_eq!(input.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_stdin_listed_twice_is_read_once() {
        let args = vec!["-".to_string(), "-".to_string()];
        assert_eq!(expand_args(&args).unwrap(), vec![None]);
    }
}
