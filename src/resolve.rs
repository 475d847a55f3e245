use path_absolutize::Absolutize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Whether `dir` appears in a `PATH`-style search path.
///
/// Entries are compared after making them absolute and, when they exist,
/// canonical, so `~/.local/bin/` and a symlinked alias both match.
pub fn is_on_search_path(dir: &Path, search_path: Option<&OsStr>) -> bool {
    let Some(search_path) = search_path else {
        return false;
    };
    let wanted = normalize(dir);
    std::env::split_paths(search_path)
        .filter(|entry| !entry.as_os_str().is_empty())
        .any(|entry| normalize(&entry) == wanted)
}

fn normalize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    path.absolutize()
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| path.to_path_buf())
}
