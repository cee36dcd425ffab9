//! Configuration discovery and effective settings resolution.
//!
//! snipcheck reads `snipcheck.toml|yaml|yml` from the repository root (the
//! closest ancestor holding a config file or `.git`) and merges it with CLI
//! flags to produce an `Effective` config.
//! Defaults:
//! - `output`: `human`
//! - `language`: none (detect per input)
//! - `disable`: empty
//! - `fix.write`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Result, SnipError};
use crate::lint::ReviewOptions;
use crate::models::{Language, RuleId};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILES: [&str; 3] = ["snipcheck.toml", "snipcheck.yaml", "snipcheck.yml"];
const OUTPUTS: [&str; 2] = ["human", "json"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Fix-related configuration section under `[fix]`.
pub struct FixCfg {
    pub write: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `snipcheck.toml|yaml`.
pub struct SnipConfig {
    pub output: Option<String>,
    /// Label or alias; forces the language for every input.
    pub language: Option<String>,
    /// Rule ids dropped from reports.
    #[serde(default)]
    pub disable: Vec<String>,
    pub fix: Option<FixCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub output: String,
    pub language: Option<Language>,
    pub disabled: BTreeSet<RuleId>,
    pub write: bool,
}

impl Effective {
    pub fn review_options(&self) -> ReviewOptions {
        ReviewOptions {
            language: self.language,
            disabled: self.disabled.clone(),
        }
    }
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `snipcheck.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SnipConfig` from `snipcheck.toml` or `snipcheck.yaml|yml` if present.
///
/// A config file that exists but does not parse is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, SnipConfig)>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| SnipError::Read {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<SnipConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<SnipConfig>(&s).map_err(|e| e.to_string())
        };
        let cfg = parsed.map_err(|message| SnipError::Config {
            path: path.clone(),
            message,
        })?;
        return Ok(Some((path, cfg)));
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_language: Option<Language>,
    cli_write: Option<bool>,
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, SnipConfig::default()),
    };

    if let Some(out) = cfg.output.as_deref() {
        if !OUTPUTS.contains(&out) {
            return Err(SnipError::Config {
                path: config_path.clone().unwrap_or_default(),
                message: format!("unknown output '{}' (expected human or json)", out),
            });
        }
    }
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let language = match (cli_language, cfg.language.as_deref()) {
        (Some(l), _) => Some(l),
        (None, Some(name)) => Some(name.parse::<Language>().map_err(|e| SnipError::Config {
            path: config_path.clone().unwrap_or_default(),
            message: e.to_string(),
        })?),
        (None, None) => None,
    };

    let mut disabled = BTreeSet::new();
    for id in &cfg.disable {
        match id.parse::<RuleId>() {
            Ok(rule) => {
                disabled.insert(rule);
            }
            Err(e) => tracing::warn!("ignoring disable entry: {}", e),
        }
    }

    let write = cli_write
        .or_else(|| cfg.fix.as_ref().and_then(|f| f.write))
        .unwrap_or(false);

    let eff = Effective {
        repo_root,
        config_path,
        output,
        language,
        disabled,
        write,
    };
    tracing::debug!(?eff, "resolved configuration");
    Ok(eff)
}
