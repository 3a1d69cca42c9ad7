//! Locations of the files the search screen writes.
//!
//! Everything lives under one data directory: `$SEARCH_SCREEN_DATA_DIR` when
//! set, otherwise `$XDG_DATA_HOME/search-screen`, otherwise
//! `~/.local/share/search-screen`, and finally a relative `.search-screen`
//! directory when no home is known.

use std::path::{Path, PathBuf};

/// Name of the directory created under the platform data home.
pub const APP_DIR_NAME: &str = "search-screen";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SEARCH_SCREEN_DATA_DIR";

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const METRICS_FILE_NAME: &str = "metrics.jsonl";
pub const TRACE_FILE_NAME: &str = "search-screen-otlp.jsonl";

/// Returns the default data directory for this process environment.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(|key| std::env::var(key).ok())
}

/// Resolves the data directory from an arbitrary variable lookup.
///
/// Split out from [`get_data_dir`] so the precedence rules can be tested
/// without touching the real process environment.
pub fn resolve_data_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(dir) = non_empty(DATA_DIR_ENV) {
        return PathBuf::from(expand_tilde_with(&dir, non_empty("HOME").as_deref()));
    }
    if let Some(xdg) = non_empty("XDG_DATA_HOME") {
        return Path::new(&xdg).join(APP_DIR_NAME);
    }
    if let Some(home) = non_empty("HOME") {
        return Path::new(&home).join(".local").join("share").join(APP_DIR_NAME);
    }
    PathBuf::from(format!(".{APP_DIR_NAME}"))
}

/// Expands a leading `~` using `$HOME`.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, std::env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    match (path, home) {
        ("~", Some(home)) => home.to_string(),
        (p, Some(home)) if p.starts_with("~/") => format!("{home}{}", &p[1..]),
        (p, _) => p.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn explicit_override_wins() {
        let dir = resolve_data_dir(env(&[
            (DATA_DIR_ENV, "~/custom"),
            ("XDG_DATA_HOME", "/xdg"),
            ("HOME", "/home/me"),
        ]));
        assert_eq!(dir, PathBuf::from("/home/me/custom"));
    }

    #[test]
    fn xdg_before_home() {
        let dir = resolve_data_dir(env(&[("XDG_DATA_HOME", "/xdg"), ("HOME", "/home/me")]));
        assert_eq!(dir, PathBuf::from("/xdg/search-screen"));
    }

    #[test]
    fn home_fallback_and_blank_values_ignored() {
        let dir = resolve_data_dir(env(&[("XDG_DATA_HOME", "  "), ("HOME", "/home/me")]));
        assert_eq!(dir, PathBuf::from("/home/me/.local/share/search-screen"));
    }

    #[test]
    fn relative_fallback_without_home() {
        assert_eq!(resolve_data_dir(env(&[])), PathBuf::from(".search-screen"));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde_with("~", Some("/h")), "/h");
        assert_eq!(expand_tilde_with("~/x/y", Some("/h")), "/h/x/y");
        assert_eq!(expand_tilde_with("/abs", Some("/h")), "/abs");
        assert_eq!(expand_tilde_with("~/x", None), "~/x");
    }
}
