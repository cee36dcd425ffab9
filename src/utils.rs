//! Supporting helpers: terminal prefixes and path display.

use owo_colors::OwoColorize;
use std::path::Path;

/// Colors are on unless `NO_COLOR` is set.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn info_prefix() -> String {
    if colors_enabled() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Display form of `path` relative to the working directory when possible.
pub fn rel_to_wd(path: &Path) -> String {
    let shown = std::env::current_dir()
        .ok()
        .and_then(|wd| {
            let abs = if path.is_absolute() {
                path.to_path_buf()
            } else {
                wd.join(path)
            };
            pathdiff::diff_paths(abs, &wd)
        })
        .filter(|rel| !rel.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf());
    shown.to_string_lossy().to_string()
}
