//! Path helpers for locating the default state file.
//!
//! The navigation state lives in the user's data directory unless the
//! configuration names a file explicitly. Lookup order follows the XDG base
//! directory convention with a working-directory fallback for environments
//! without a home directory (CI containers, sandboxes).

use std::env;
use std::path::PathBuf;

/// Directory name used under the data root.
const APP_DIR: &str = "docnav";

/// Returns the data directory for docnav storage.
///
/// Resolution order:
///
/// 1. `$XDG_DATA_HOME/docnav`
/// 2. `$HOME/.local/share/docnav`
/// 3. `./.docnav`
///
/// Empty variables are treated as unset. The directory is not created.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(
        env::var("XDG_DATA_HOME").ok().as_deref(),
        env::var("HOME").ok().as_deref(),
    )
}

fn data_dir_from(xdg_data_home: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = home.filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    PathBuf::from(".").join(format!(".{APP_DIR}"))
}

/// Default location of the JSON state file.
#[must_use]
pub fn default_state_file() -> PathBuf {
    get_data_dir().join("state.json")
}

/// Expands a leading `~` to the value of `$HOME`.
///
/// Paths without a leading tilde, and every path when `$HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use docnav::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}
